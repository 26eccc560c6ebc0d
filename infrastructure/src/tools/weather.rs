//! get_weather tool: current conditions from wttr.in

use conductor_domain::{ToolDefinition, ToolInvocation, ToolParameter};

pub const GET_WEATHER: &str = "get_weather";

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(GET_WEATHER, "Get the current weather for a location")
        .with_parameter(ToolParameter::new("location", "City name", true))
}

pub async fn execute(client: &reqwest::Client, invocation: &ToolInvocation) -> String {
    let location = match invocation.require_string("location") {
        Ok(l) => l,
        Err(e) => return format!("Error: {e}"),
    };

    // wttr.in one-line format: "<condition emoji> <temperature>"
    let url = format!("https://wttr.in/{}?format=1", location.trim());
    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => match response.text().await {
            Ok(body) => body.trim().to_string(),
            Err(e) => format!("Error fetching weather: {e}"),
        },
        Ok(_) => format!("Could not find weather for '{location}'."),
        Err(e) => format!("Error fetching weather: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_location_reports_error() {
        let result = execute(&reqwest::Client::new(), &ToolInvocation::new(GET_WEATHER)).await;
        assert!(result.starts_with("Error:"));
        assert!(result.contains("location"));
    }

    #[test]
    fn test_definition_requires_location() {
        let def = definition();
        assert_eq!(def.name, GET_WEATHER);
        assert_eq!(def.required_parameters().count(), 1);
    }
}
