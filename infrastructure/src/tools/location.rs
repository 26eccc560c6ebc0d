//! search_location_info tool: Wikipedia summary with coordinates

use super::TOOL_USER_AGENT;
use conductor_domain::{ToolDefinition, ToolInvocation, ToolParameter};
use serde_json::Value;
use tracing::debug;

pub const SEARCH_LOCATION_INFO: &str = "search_location_info";

const WIKIPEDIA_API: &str = "https://en.wikipedia.org/w/api.php";

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(SEARCH_LOCATION_INFO, "Get information about a location")
        .with_parameter(ToolParameter::new("location", "City name", true))
}

pub async fn execute(client: &reqwest::Client, invocation: &ToolInvocation) -> String {
    let location = match invocation.require_string("location") {
        Ok(l) if !l.trim().is_empty() => l.trim().to_string(),
        Ok(_) => return "Please provide a location.".to_string(),
        Err(e) => return format!("Error: {e}"),
    };

    match lookup(client, &location).await {
        Ok(summary) => summary,
        Err(e) => format!("Error: {e}"),
    }
}

async fn lookup(client: &reqwest::Client, query: &str) -> Result<String, reqwest::Error> {
    // Search for the best-matching page title
    let search: Value = client
        .get(WIKIPEDIA_API)
        .header("User-Agent", TOOL_USER_AGENT)
        .query(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
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
        debug!("no Wikipedia result for '{query}'");
        return Ok(format!("No Wikipedia result for '{query}'."));
    };

    // Fetch intro extract, coordinates and the canonical URL
    let page: Value = client
        .get(WIKIPEDIA_API)
        .header("User-Agent", TOOL_USER_AGENT)
        .query(&[
            ("action", "query"),
            ("prop", "extracts|coordinates|info"),
            ("exintro", "1"),
            ("explaintext", "1"),
            ("titles", title),
            ("format", "json"),
            ("inprop", "url"),
        ])
        .send()
        .await?
        .json()
        .await?;

    let Some(page) = page
        .pointer("/query/pages")
        .and_then(Value::as_object)
        .and_then(|pages| pages.values().next())
    else {
        return Ok(format!("Lookup failed for '{title}'."));
    };

    let summary = page
        .get("extract")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim();
    let url = page
        .get("fullurl")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_"))
        });

    let mut lines = vec![title.to_string(), summary.to_string()];
    if let Some(lat) = page.pointer("/coordinates/0/lat").and_then(Value::as_f64)
        && let Some(lon) = page.pointer("/coordinates/0/lon").and_then(Value::as_f64)
    {
        lines.push(format!("Coordinates: {lat}, {lon}"));
    }
    lines.push(format!("URL: {url}"));
    Ok(lines.join("\n"))
}
