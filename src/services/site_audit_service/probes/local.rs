use crate::models::audit::{LocalListingData, ProbeResult};
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Place {
    display_name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Looks the business up on OpenStreetMap's Nominatim search.
pub async fn check_local_listing(
    client: &Client,
    endpoint: &str,
    business_name: &str,
) -> Result<ProbeResult<LocalListingData>> {
    let places: Vec<Place> = client
        .get(endpoint)
        .query(&[
            ("q", business_name),
            ("format", "json"),
            ("limit", "1"),
            ("addressdetails", "1"),
        ])
        .send()
        .await
        .context("Nominatim request failed")?
        .error_for_status()?
        .json()
        .await
        .context("malformed Nominatim response")?;

    Ok(score_places(places))
}

fn score_places(places: Vec<Place>) -> ProbeResult<LocalListingData> {
    match places.into_iter().next() {
        Some(place) => {
            debug!("Nominatim match: {:?}", place.display_name);
            ProbeResult::new(
                75,
                "Business found in map databases",
                LocalListingData {
                    address: place.display_name,
                    categories: place.kind.map(|kind| vec![kind]),
                    is_listed: true,
                },
            )
        }
        None => ProbeResult::new(
            30,
            "Limited local visibility, claim your listings",
            LocalListingData::default(),
        ),
    }
}

pub fn unverified() -> ProbeResult<LocalListingData> {
    ProbeResult::new(50, "Unable to verify local presence", LocalListingData::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_place_is_captured() {
        let places: Vec<Place> = serde_json::from_str(
            r#"[{"display_name":"Joe's Pizza, 7 Carmine St, New York","type":"restaurant"}]"#,
        )
        .unwrap();
        let result = score_places(places);
        assert_eq!(result.score, 75);
        assert!(result.data.is_listed);
        assert_eq!(result.data.categories, Some(vec!["restaurant".to_string()]));
    }

    #[test]
    fn empty_search_is_limited_visibility() {
        let result = score_places(Vec::new());
        assert_eq!(result.score, 30);
        assert!(!result.data.is_listed);
    }
}
