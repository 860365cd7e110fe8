use crate::models::audit::{ProbeResult, ReviewData, SearchPresence};
use crate::models::comprehensive::YelpBusiness;
use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct YelpSearch {
    #[serde(default)]
    businesses: Vec<YelpBusiness>,
}

/// Yelp Fusion business search. `location` is optional; Yelp then matches
/// on the term alone.
pub async fn search_yelp_businesses(
    client: &Client,
    endpoint: &str,
    key: &str,
    term: &str,
    location: Option<&str>,
    limit: u8,
) -> Result<Vec<YelpBusiness>> {
    let limit = limit.to_string();
    let mut query = vec![("term", term), ("limit", limit.as_str())];
    if let Some(location) = location {
        query.push(("location", location));
    }

    let search: YelpSearch = client
        .get(endpoint)
        .query(&query)
        .header(AUTHORIZATION, format!("Bearer {}", key))
        .send()
        .await
        .context("Yelp request failed")?
        .error_for_status()?
        .json()
        .await
        .context("malformed Yelp response")?;
    Ok(search.businesses)
}

/// Five-star rating to 0-100, plus up to 20 points for review volume.
pub fn review_score(rating: f64, review_count: u64) -> u32 {
    let rating_points = (rating * 20.0).round().max(0.0) as u32;
    let volume_points = (review_count / 10).min(20) as u32;
    (rating_points + volume_points).min(100)
}

fn listed(site: &str, rating: f64, review_count: u64, categories: Option<Vec<String>>) -> ProbeResult<ReviewData> {
    ProbeResult::new(
        review_score(rating, review_count),
        format!("{}/5 stars with {} reviews on {}", rating, review_count, site),
        ReviewData {
            rating: Some(rating),
            review_count: Some(review_count),
            categories,
            is_listed: true,
        },
    )
}

pub async fn check_yelp(
    client: &Client,
    endpoint: &str,
    key: Option<&str>,
    business_name: &str,
    location: &str,
) -> Result<ProbeResult<ReviewData>> {
    let Some(key) = key else {
        info!("Yelp API key not configured");
        return Ok(yelp_unverified());
    };

    let businesses =
        search_yelp_businesses(client, endpoint, key, business_name, Some(location), 1).await?;
    Ok(score_yelp(businesses.into_iter().next()))
}

fn score_yelp(business: Option<YelpBusiness>) -> ProbeResult<ReviewData> {
    match business {
        Some(business) => {
            debug!("Yelp match: {:?} ({})", business.name, business.rating);
            let categories = business.categories.into_iter().map(|c| c.title).collect();
            listed("Yelp", business.rating, business.review_count, Some(categories))
        }
        None => ProbeResult::new(
            30,
            "Business not found on Yelp - claim your listing",
            ReviewData::default(),
        ),
    }
}

pub fn yelp_unverified() -> ProbeResult<ReviewData> {
    ProbeResult::new(50, "Unable to verify Yelp presence", ReviewData::default())
}

#[derive(Debug, Deserialize)]
struct MapsSearch {
    #[serde(default)]
    local_results: Vec<MapsPlace>,
}

#[derive(Debug, Deserialize)]
struct MapsPlace {
    title: Option<String>,
    rating: Option<f64>,
    reviews: Option<u64>,
}

/// Google Business Profile rating through SerpAPI's google_maps engine.
pub async fn check_google_business(
    client: &Client,
    endpoint: &str,
    key: Option<&str>,
    business_name: &str,
    location: &str,
) -> Result<ProbeResult<ReviewData>> {
    let Some(key) = key else {
        info!("SerpAPI key not configured");
        return Ok(google_unverified());
    };

    let q = format!("{} {}", business_name, location);
    let search: MapsSearch = client
        .get(endpoint)
        .query(&[("q", q.as_str()), ("engine", "google_maps"), ("api_key", key)])
        .send()
        .await
        .context("SerpAPI maps request failed")?
        .error_for_status()?
        .json()
        .await
        .context("malformed SerpAPI maps response")?;

    Ok(score_maps(search.local_results.into_iter().next()))
}

fn score_maps(place: Option<MapsPlace>) -> ProbeResult<ReviewData> {
    match place {
        Some(place) => {
            debug!("Google Business match: {:?}", place.title);
            listed(
                "Google",
                place.rating.unwrap_or(0.0),
                place.reviews.unwrap_or(0),
                None,
            )
        }
        None => ProbeResult::new(
            30,
            "Business not found on Google - claim your Google Business Profile",
            ReviewData::default(),
        ),
    }
}

pub fn google_unverified() -> ProbeResult<ReviewData> {
    ProbeResult::new(
        50,
        "Unable to verify Google Business presence",
        ReviewData::default(),
    )
}

#[derive(Debug, Deserialize)]
struct KnowledgeGraph {
    website: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LocalResult {
    website: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WebSearch {
    knowledge_graph: Option<KnowledgeGraph>,
    #[serde(default)]
    local_results: Vec<LocalResult>,
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

const GOOGLE_FOUND: u32 = 85;
const GOOGLE_MISSING: u32 = 30;
const YELP_FOUND: u32 = 80;
const YELP_MISSING: u32 = 25;

/// Plain Google web search for the name, used by business mode.
pub async fn search_google_presence(
    client: &Client,
    endpoint: &str,
    key: Option<&str>,
    business_name: &str,
) -> Result<ProbeResult<SearchPresence>> {
    let Some(key) = key else {
        info!("SerpAPI key not configured, using limited search");
        return Ok(ProbeResult::new(
            GOOGLE_MISSING,
            "Limited search capability - add SERP API key for full analysis",
            SearchPresence::default(),
        ));
    };

    let search: WebSearch = client
        .get(endpoint)
        .query(&[
            ("q", business_name),
            ("api_key", key),
            ("engine", "google"),
            ("num", "10"),
        ])
        .send()
        .await
        .context("SerpAPI search request failed")?
        .error_for_status()?
        .json()
        .await
        .context("malformed SerpAPI search response")?;

    Ok(score_web_search(search))
}

fn score_web_search(search: WebSearch) -> ProbeResult<SearchPresence> {
    let has_panel = search.knowledge_graph.is_some();
    let has_local = !search.local_results.is_empty();
    let found = has_panel || has_local || !search.organic_results.is_empty();

    let website = search
        .knowledge_graph
        .and_then(|graph| graph.website)
        .or_else(|| search.local_results.into_iter().next().and_then(|r| r.website))
        .or_else(|| search.organic_results.into_iter().next().and_then(|r| r.link));

    let feedback = if has_panel {
        "Prominent Google presence with knowledge panel"
    } else if has_local {
        "Found in local search results"
    } else if found {
        "Appears in search results"
    } else {
        "Limited Google visibility"
    };
    let score = if found { GOOGLE_FOUND } else { GOOGLE_MISSING };
    ProbeResult::new(score, feedback, SearchPresence { found, website })
}

pub fn google_search_failed() -> ProbeResult<SearchPresence> {
    ProbeResult::new(GOOGLE_MISSING, "Unable to search Google", SearchPresence::default())
}

/// Name-only Yelp search used by business mode.
pub async fn search_yelp_presence(
    client: &Client,
    endpoint: &str,
    key: Option<&str>,
    business_name: &str,
) -> Result<ProbeResult<SearchPresence>> {
    let Some(key) = key else {
        info!("Yelp API key not configured");
        return Ok(ProbeResult::new(
            YELP_MISSING,
            "Yelp search unavailable",
            SearchPresence::default(),
        ));
    };

    let businesses = search_yelp_businesses(client, endpoint, key, business_name, None, 5).await?;
    Ok(score_yelp_presence(businesses.first()))
}

fn score_yelp_presence(top: Option<&YelpBusiness>) -> ProbeResult<SearchPresence> {
    match top {
        Some(business) => {
            let feedback = if business.rating > 0.0 {
                format!("Found on Yelp with {} star rating", business.rating)
            } else {
                "Found on Yelp".to_string()
            };
            ProbeResult::new(
                YELP_FOUND,
                feedback,
                SearchPresence {
                    found: true,
                    website: None,
                },
            )
        }
        None => ProbeResult::new(
            YELP_MISSING,
            "Not found on Yelp - claim your listing",
            SearchPresence::default(),
        ),
    }
}

pub fn yelp_search_failed() -> ProbeResult<SearchPresence> {
    ProbeResult::new(YELP_MISSING, "Unable to search Yelp", SearchPresence::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_score_combines_rating_and_volume() {
        assert_eq!(review_score(4.5, 1200), 100);
        assert_eq!(review_score(4.0, 55), 85);
        assert_eq!(review_score(3.7, 9), 74);
        assert_eq!(review_score(0.0, 0), 0);
    }

    #[test]
    fn yelp_hit_reports_stars_and_categories() {
        let search: YelpSearch = serde_json::from_str(
            r#"{"businesses":[{"name":"Joe's Pizza","rating":4.5,"review_count":87,
                "categories":[{"alias":"pizza","title":"Pizza"}]}]}"#,
        )
        .unwrap();
        let result = score_yelp(search.businesses.into_iter().next());
        assert_eq!(result.score, 98);
        assert_eq!(result.feedback, "4.5/5 stars with 87 reviews on Yelp");
        assert_eq!(result.data.categories, Some(vec!["Pizza".to_string()]));
    }

    #[test]
    fn whole_star_ratings_print_without_decimals() {
        let result = score_maps(Some(MapsPlace {
            title: None,
            rating: Some(4.0),
            reviews: Some(30),
        }));
        assert_eq!(result.feedback, "4/5 stars with 30 reviews on Google");
        assert_eq!(result.score, 83);
    }

    #[test]
    fn unlisted_businesses_score_thirty() {
        assert_eq!(score_yelp(None).score, 30);
        assert_eq!(score_maps(None).score, 30);
    }

    #[test]
    fn knowledge_panel_wins_the_website() {
        let search: WebSearch = serde_json::from_str(
            r#"{"knowledge_graph":{"title":"Joe's","website":"https://joespizzanyc.com"},
                "organic_results":[{"link":"https://yelp.com/biz/joes"}]}"#,
        )
        .unwrap();
        let result = score_web_search(search);
        assert_eq!(result.score, 85);
        assert_eq!(result.feedback, "Prominent Google presence with knowledge panel");
        assert_eq!(result.data.website.as_deref(), Some("https://joespizzanyc.com"));
    }

    #[test]
    fn organic_results_only() {
        let search: WebSearch =
            serde_json::from_str(r#"{"organic_results":[{"link":"https://example.com"}]}"#).unwrap();
        let result = score_web_search(search);
        assert_eq!(result.feedback, "Appears in search results");
        assert_eq!(result.data.website.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn empty_search_is_limited() {
        let search: WebSearch = serde_json::from_str("{}").unwrap();
        let result = score_web_search(search);
        assert_eq!(result.score, 30);
        assert!(!result.data.found);
    }

    #[test]
    fn yelp_presence_feedback() {
        let business = YelpBusiness {
            name: Some("Joe's".into()),
            rating: 4.5,
            review_count: 10,
            categories: Vec::new(),
        };
        assert_eq!(
            score_yelp_presence(Some(&business)).feedback,
            "Found on Yelp with 4.5 star rating"
        );
        assert_eq!(score_yelp_presence(None).score, 25);
    }
}
