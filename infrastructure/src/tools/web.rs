//! Web search summarization over the DuckDuckGo HTML endpoint.
//!
//! The query may be a topic, a domain, or a full URL; URLs are folded
//! into a plain search query before the lookup.

use super::TOOL_USER_AGENT;
use conductor_domain::{ToolDefinition, ToolInvocation, ToolParameter};
use tracing::warn;

pub const FETCH_WEBPAGE_SUMMARY: &str = "fetch_webpage_summary";

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
const MAX_RESULTS: usize = 2;

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        FETCH_WEBPAGE_SUMMARY,
        "Search the web and return a summary of the top results",
    )
    .with_parameter(ToolParameter::new(
        "query",
        "A topic, domain, or URL to search for",
        true,
    ))
}

pub async fn execute(client: &reqwest::Client, invocation: &ToolInvocation) -> String {
    let query = match invocation.require_string("query") {
        Ok(q) => q,
        Err(e) => return format!("Error: {e}"),
    };

    let search_query = to_search_query(query);
    match search(client, &search_query).await {
        Ok(results) if results.is_empty() => {
            format!("No search results found for: {search_query}")
        }
        Ok(results) => {
            let mut lines = vec!["Search results:".to_string()];
            for (i, result) in results.iter().enumerate() {
                lines.push(format!(
                    "Result {}: {}\nSnippet: {}\nURL: {}",
                    i + 1,
                    result.title,
                    result.snippet,
                    result.url
                ));
            }
            lines.join("\n")
        }
        Err(e) => {
            warn!("Web search failed: {e}");
            format!("Error searching the web for '{query}': {e}")
        }
    }
}

/// Fold a URL down to "host path words"; anything else passes through.
fn to_search_query(query: &str) -> String {
    if !query.starts_with("http://") && !query.starts_with("https://") {
        return query.to_string();
    }
    match reqwest::Url::parse(query) {
        Ok(url) => {
            let host = url.host_str().unwrap_or("");
            let path = url.path().replace('/', " ");
            collapse_whitespace(&format!("{host} {path}"))
        }
        Err(_) => query.to_string(),
    }
}

struct SearchResult {
    title: String,
    snippet: String,
    url: String,
}

async fn search(
    client: &reqwest::Client,
    search_query: &str,
) -> Result<Vec<SearchResult>, reqwest::Error> {
    let html = client
        .get(SEARCH_ENDPOINT)
        .header("User-Agent", TOOL_USER_AGENT)
        .query(&[("q", search_query)])
        .send()
        .await?
        .text()
        .await?;
    Ok(extract_results(&html))
}

fn extract_results(html: &str) -> Vec<SearchResult> {
    use scraper::{Html, Selector};

    let document = Html::parse_document(html);
    let Ok(result_selector) = Selector::parse("div.result") else {
        return Vec::new();
    };
    let Ok(title_selector) = Selector::parse("a.result__a") else {
        return Vec::new();
    };
    let Ok(snippet_selector) = Selector::parse(".result__snippet") else {
        return Vec::new();
    };

    document
        .select(&result_selector)
        .filter_map(|result| {
            let link = result.select(&title_selector).next()?;
            let title = collapse_whitespace(&link.text().collect::<Vec<_>>().join(" "));
            if title.is_empty() {
                return None;
            }
            let snippet = result
                .select(&snippet_selector)
                .next()
                .map(|s| collapse_whitespace(&s.text().collect::<Vec<_>>().join(" ")))
                .unwrap_or_else(|| "No content".to_string());
            let url = link.value().attr("href").unwrap_or("No URL").to_string();
            Some(SearchResult {
                title,
                snippet,
                url,
            })
        })
        .take(MAX_RESULTS)
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
