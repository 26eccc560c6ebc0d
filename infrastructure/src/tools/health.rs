//! Health tools: nutrition facts, symptom lookup links, clinic search.
//!
//! All three stick to keyless public APIs: Open Food Facts for nutrition,
//! a MedlinePlus search link for symptoms, and Nominatim plus Overpass for
//! clinics near a location.

use super::TOOL_USER_AGENT;
use conductor_domain::{ToolDefinition, ToolInvocation, ToolParameter};
use serde_json::Value;
use tracing::warn;

pub const GET_NUTRITION_INFO: &str = "get_nutrition_info";
pub const CHECK_SYMPTOM: &str = "check_symptom";
pub const FIND_LOCAL_CLINICS: &str = "find_local_clinics";

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            GET_NUTRITION_INFO,
            "Get basic nutrition facts for a food item",
        )
        .with_parameter(ToolParameter::new("food", "Food item, e.g. 'banana'", true)),
        ToolDefinition::new(
            CHECK_SYMPTOM,
            "Get a link to trusted medical information about a symptom",
        )
        .with_parameter(ToolParameter::new("symptom", "Symptom description", true)),
        ToolDefinition::new(
            FIND_LOCAL_CLINICS,
            "Find clinics and hospitals near a location",
        )
        .with_parameter(ToolParameter::new("location", "City or area name", true)),
    ]
}

pub async fn nutrition_info(client: &reqwest::Client, invocation: &ToolInvocation) -> String {
    let food = match invocation.require_string("food") {
        Ok(f) => f,
        Err(e) => return format!("Error: {e}"),
    };

    match open_food_facts(client, food).await {
        Ok(Some(info)) => info,
        Ok(None) => format!("Nutrition info for '{food}' not available."),
        Err(e) => {
            warn!("Open Food Facts lookup failed: {e}");
            format!("Nutrition info for '{food}' not available.")
        }
    }
}

pub async fn check_symptom(invocation: &ToolInvocation) -> String {
    let symptom = match invocation.require_string("symptom") {
        Ok(s) => s,
        Err(e) => return format!("Error: {e}"),
    };

    let link = match reqwest::Url::parse_with_params(
        "https://medlineplus.gov/search/",
        &[("query", symptom)],
    ) {
        Ok(url) => url.to_string(),
        Err(e) => return format!("Error: {e}"),
    };
    format!("For '{symptom}', see trusted medical info: {link}")
}

pub async fn find_local_clinics(client: &reqwest::Client, invocation: &ToolInvocation) -> String {
    let location = match invocation.require_string("location") {
        Ok(l) => l,
        Err(e) => return format!("Error: {e}"),
    };

    let (lat, lon) = match geocode(client, location).await {
        Ok(Some(coords)) => coords,
        Ok(None) => return format!("Could not geocode location: {location}"),
        Err(e) => {
            warn!("Clinic search error: {e}");
            return format!("Unable to find clinics near {location}.");
        }
    };

    match overpass_clinics(client, lat, lon).await {
        Ok(names) if names.is_empty() => format!("No clinics found near {location}."),
        Ok(names) => format!(
            "Clinics/hospitals near {location}:\n- {}",
            names.join("\n- ")
        ),
        Err(e) => {
            warn!("Clinic search error: {e}");
            format!("Unable to find clinics near {location}.")
        }
    }
}

async fn open_food_facts(
    client: &reqwest::Client,
    food: &str,
) -> Result<Option<String>, reqwest::Error> {
    let response = client
        .get("https://world.openfoodfacts.org/cgi/search.pl")
        .query(&[("search_terms", food), ("search_simple", "1"), ("json", "1")])
        .send()
        .await?;
    if !response.status().is_success() {
        return Ok(None);
    }
    let body: Value = response.json().await?;
    let Some(product) = body.pointer("/products/0") else {
        return Ok(None);
    };

    let name = product
        .pointer("/product_name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .unwrap_or(food);
    let energy = product
        .pointer("/energy_100g")
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    Ok(Some(format!(
        "{name}: ~{energy} kJ per 100g (from Open Food Facts)."
    )))
}

async fn geocode(
    client: &reqwest::Client,
    location: &str,
) -> Result<Option<(f64, f64)>, reqwest::Error> {
    let body: Value = client
        .get("https://nominatim.openstreetmap.org/search")
        .header("User-Agent", TOOL_USER_AGENT)
        .query(&[("q", location), ("format", "json"), ("limit", "1")])
        .send()
        .await?
        .json()
        .await?;

    // Nominatim returns coordinates as strings
    let lat = body.pointer("/0/lat").and_then(as_coordinate);
    let lon = body.pointer("/0/lon").and_then(as_coordinate);
    Ok(lat.zip(lon))
}

fn as_coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

async fn overpass_clinics(
    client: &reqwest::Client,
    lat: f64,
    lon: f64,
) -> Result<Vec<String>, reqwest::Error> {
    let query = format!(
        r#"[out:json];(node["amenity"~"clinic|hospital"]["name"](around:10000,{lat},{lon}););out 5;"#
    );
    let body: Value = client
        .post("https://overpass-api.de/api/interpreter")
        .header("User-Agent", TOOL_USER_AGENT)
        .body(query)
        .send()
        .await?
        .json()
        .await?;

    let names = body
        .pointer("/elements")
        .and_then(Value::as_array)
        .map(|elements| {
            elements
                .iter()
                .take(3)
                .map(|e| {
                    e.pointer("/tags/name")
                        .and_then(Value::as_str)
                        .unwrap_or("Unnamed")
                        .to_string()
                })
                .collect()
        })
        .unwrap_or_default();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_symptom_builds_medlineplus_link() {
        let invocation = ToolInvocation::new(CHECK_SYMPTOM).with_arg("symptom", "sore throat");
        let result = check_symptom(&invocation).await;
        assert!(result.contains("https://medlineplus.gov/search/?query=sore+throat"));
        assert!(result.contains("'sore throat'"));
    }

    #[tokio::test]
    async fn test_check_symptom_missing_argument() {
        let result = check_symptom(&ToolInvocation::new(CHECK_SYMPTOM)).await;
        assert!(result.starts_with("Error:"));
    }

    #[test]
    fn test_coordinate_parsing_accepts_strings() {
        assert_eq!(as_coordinate(&serde_json::json!("51.5")), Some(51.5));
        assert_eq!(as_coordinate(&serde_json::json!(51.5)), Some(51.5));
        assert_eq!(as_coordinate(&serde_json::json!(null)), None);
    }

    #[test]
    fn test_definitions_cover_all_health_tools() {
        let names: Vec<String> = definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![GET_NUTRITION_INFO, CHECK_SYMPTOM, FIND_LOCAL_CLINICS]
        );
    }
}
