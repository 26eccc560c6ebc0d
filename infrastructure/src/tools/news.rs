//! News tools: NewsAPI-backed when a key is configured, with a Wikipedia
//! "In the news" scrape as the keyless fallback for headlines.

use super::TOOL_USER_AGENT;
use conductor_domain::{ToolDefinition, ToolInvocation, ToolParameter};
use serde_json::Value;
use tracing::warn;

pub const GET_TOP_HEADLINES: &str = "get_top_headlines";
pub const SEARCH_NEWS_ARTICLES: &str = "search_news_articles";
pub const GET_NEWS_SOURCE_INFO: &str = "get_news_source_info";

const WIKIPEDIA_API: &str = "https://en.wikipedia.org/w/api.php";

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(GET_TOP_HEADLINES, "Get the current top news headline"),
        ToolDefinition::new(SEARCH_NEWS_ARTICLES, "Search recent news articles by topic")
            .with_parameter(ToolParameter::new("query", "Topic to search for", true)),
        ToolDefinition::new(
            GET_NEWS_SOURCE_INFO,
            "Get background information about a news organization",
        )
        .with_parameter(ToolParameter::new("source", "Name of the news source", true)),
    ]
}

pub async fn top_headlines(client: &reqwest::Client, api_key: Option<&str>) -> String {
    if let Some(key) = api_key {
        match newsapi_top_headline(client, key).await {
            Ok(Some(headline)) => return headline,
            Ok(None) => {}
            Err(e) => warn!("NewsAPI error: {e}"),
        }
    }

    // Keyless fallback: scrape the "In the news" box on the Wikipedia
    // main page
    match wikipedia_headline(client).await {
        Ok(Some(headline)) => format!("Top headline (from Wikipedia): {headline}"),
        Ok(None) => "Unable to fetch top headlines.".to_string(),
        Err(e) => {
            warn!("Wikipedia fallback failed: {e}");
            "Unable to fetch top headlines.".to_string()
        }
    }
}

pub async fn search_articles(
    client: &reqwest::Client,
    api_key: Option<&str>,
    invocation: &ToolInvocation,
) -> String {
    let query = match invocation.require_string("query") {
        Ok(q) => q,
        Err(e) => return format!("Error: {e}"),
    };

    if let Some(key) = api_key {
        match newsapi_search(client, key, query).await {
            Ok(Some(article)) => return article,
            Ok(None) => {}
            Err(e) => warn!("NewsAPI search error: {e}"),
        }
    }
    format!("No recent news found for '{query}'.")
}

pub async fn source_info(client: &reqwest::Client, invocation: &ToolInvocation) -> String {
    let source = match invocation.require_string("source") {
        Ok(s) => s,
        Err(e) => return format!("Error: {e}"),
    };

    match wikipedia_source_info(client, source).await {
        Ok(Some(info)) => info,
        Ok(None) => format!("Could not find information about '{source}'."),
        Err(e) => {
            warn!("Source info error: {e}");
            format!("Could not find information about '{source}'.")
        }
    }
}

async fn newsapi_top_headline(
    client: &reqwest::Client,
    api_key: &str,
) -> Result<Option<String>, reqwest::Error> {
    let response = client
        .get("https://newsapi.org/v2/top-headlines")
        .query(&[("country", "us"), ("apiKey", api_key)])
        .send()
        .await?;
    if !response.status().is_success() {
        return Ok(None);
    }
    let body: Value = response.json().await?;
    Ok(body.pointer("/articles/0").map(|article| {
        let title = article
            .pointer("/title")
            .and_then(Value::as_str)
            .unwrap_or("No title");
        let source = article
            .pointer("/source/name")
            .and_then(Value::as_str)
            .unwrap_or("Unknown");
        format!("Top headline: {title} ({source})")
    }))
}

async fn newsapi_search(
    client: &reqwest::Client,
    api_key: &str,
    query: &str,
) -> Result<Option<String>, reqwest::Error> {
    let response = client
        .get("https://newsapi.org/v2/everything")
        .query(&[("q", query), ("sortBy", "relevancy"), ("apiKey", api_key)])
        .send()
        .await?;
    if !response.status().is_success() {
        return Ok(None);
    }
    let body: Value = response.json().await?;
    Ok(body.pointer("/articles/0").map(|article| {
        let title = article
            .pointer("/title")
            .and_then(Value::as_str)
            .unwrap_or("No title");
        let description = article
            .pointer("/description")
            .and_then(Value::as_str)
            .unwrap_or("No description");
        let url = article
            .pointer("/url")
            .and_then(Value::as_str)
            .unwrap_or("");
        format!("News: {title}\n{description}\n{url}")
    }))
}

async fn wikipedia_headline(
    client: &reqwest::Client,
) -> Result<Option<String>, reqwest::Error> {
    let html = client
        .get("https://en.wikipedia.org/wiki/Main_Page")
        .header("User-Agent", TOOL_USER_AGENT)
        .send()
        .await?
        .text()
        .await?;
    Ok(extract_first_news_item(&html))
}

/// Pull the first list item out of the main page's "In the news" section.
fn extract_first_news_item(html: &str) -> Option<String> {
    use scraper::{Html, Selector};

    let document = Html::parse_document(html);
    let box_selector = Selector::parse("#mp-itn li").ok()?;
    let item = document.select(&box_selector).next()?;
    let text = item.text().collect::<Vec<_>>().join(" ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() { None } else { Some(text) }
}

async fn wikipedia_source_info(
    client: &reqwest::Client,
    source: &str,
) -> Result<Option<String>, reqwest::Error> {
    let query = format!("{source} (news organization)");
    let search: Value = client
        .get(WIKIPEDIA_API)
        .header("User-Agent", TOOL_USER_AGENT)
        .query(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query.as_str()),
            ("srlimit", "1"),
            ("format", "json"),
        ])
        .send()
        .await?
        .json()
        .await?;

    let Some(title) = search
        .pointer("/query/search/0/title")
        .and_then(Value::as_str)
    else {
        return Ok(None);
    };

    let page: Value = client
        .get(WIKIPEDIA_API)
        .header("User-Agent", TOOL_USER_AGENT)
        .query(&[
            ("action", "query"),
            ("prop", "extracts"),
            ("exintro", "1"),
            ("explaintext", "1"),
            ("titles", title),
            ("format", "json"),
        ])
        .send()
        .await?
        .json()
        .await?;

    let extract = page
        .pointer("/query/pages")
        .and_then(Value::as_object)
        .and_then(|pages| pages.values().next())
        .and_then(|p| p.get("extract"))
        .and_then(Value::as_str)
        .unwrap_or("");

    if extract.is_empty() {
        return Ok(None);
    }

    // First sentence only
    let lead = extract.split('.').next().unwrap_or(extract);
    let url = format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_"));
    Ok(Some(format!("{lead}. More: {url}")))
}
