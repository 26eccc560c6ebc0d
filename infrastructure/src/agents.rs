//! Default agent catalog wiring the built-in tools to specialist agents.
//!
//! Registration order matters: it is the order agents are listed in the
//! planner prompt and tried by the deterministic fallback planner.

use crate::tools::{health, location, math, news, weather, web};
use conductor_domain::{AgentCatalog, AgentProfile, tool_agent_prompt};

pub fn default_catalog() -> AgentCatalog {
    AgentCatalog::new()
        .register(
            AgentProfile::new(
                "WeatherAgent",
                "Fetches current weather information for a specified location.",
                tool_agent_prompt(
                    "WeatherAgent",
                    "You have access to a tool that retrieves the current weather for a given location.",
                ),
            )
            .with_tools([weather::GET_WEATHER])
            .with_keywords(["weather", "temperature", "forecast"]),
        )
        .register(
            AgentProfile::new(
                "LocationAgent",
                "Provides summarized information about a specified location, including details like coordinates and relevant links if available.",
                tool_agent_prompt(
                    "LocationAgent",
                    "You have access to a tool that retrieves information about a given location.",
                ),
            )
            .with_tools([location::SEARCH_LOCATION_INFO])
            .with_keywords(["info", "information", "about", "tell me about", "where is"]),
        )
        .register(
            AgentProfile::new(
                "NewsAgent",
                "Fetches top headlines, searches news articles, and provides source credibility info.",
                tool_agent_prompt(
                    "NewsAgent",
                    "You can retrieve breaking news, search articles by topic, and verify news source reliability.",
                ),
            )
            .with_tools([
                news::GET_TOP_HEADLINES,
                news::SEARCH_NEWS_ARTICLES,
                news::GET_NEWS_SOURCE_INFO,
                web::FETCH_WEBPAGE_SUMMARY,
            ])
            .with_keywords(["news", "headline", "headlines", "article"]),
        )
        .register(
            AgentProfile::new(
                "HealthAgent",
                "Provides nutrition facts for foods, trusted symptom information, and nearby clinic lookups.",
                tool_agent_prompt(
                    "HealthAgent",
                    "You can look up nutrition facts for foods, point to trusted medical information about symptoms, and find clinics near a location.",
                ),
            )
            .with_tools([
                health::GET_NUTRITION_INFO,
                health::CHECK_SYMPTOM,
                health::FIND_LOCAL_CLINICS,
            ])
            .with_keywords(["health", "symptom", "nutrition", "calorie", "clinic"]),
        )
        .register(
            AgentProfile::new(
                "MathAgent",
                "Performs basic mathematical operations like addition, subtraction, multiplication, and division.",
                tool_agent_prompt(
                    "MathAgent",
                    "You can perform basic arithmetic operations including addition, subtraction, multiplication, and division. Always double-check calculations before providing results.",
                ),
            )
            .with_tools([
                math::ADD_NUMBERS,
                math::SUBTRACT_NUMBERS,
                math::MULTIPLY_NUMBERS,
                math::DIVIDE_NUMBERS,
            ])
            .with_keywords([
                "calculate", "math", "add", "subtract", "multiply", "divide", "sum",
            ]),
        )
}
