use crate::models::audit::{
    BreakdownItem, BusinessResult, Category, FirmographicData, LocalListingData, NycData,
    ProbeResult, SearchPresence,
};
use crate::models::AppState;
use crate::services::site_audit_service::compute::{
    business_recommendations, presence_label, ScoreError, BUSINESS_WEIGHTS,
};
use crate::services::site_audit_service::fanout::FanOut;
use crate::services::site_audit_service::probes::{local, registry, reviews};
use log::{debug, info};
use uuid::Uuid;

pub const BUSINESS_SOURCE: &str = "Multi-Source Business Search";

const WEBSITE_FOUND: u8 = 90;
const WEBSITE_MISSING: u8 = 50;

#[derive(Debug, Clone)]
pub struct BusinessSignals {
    pub google: ProbeResult<SearchPresence>,
    pub yelp: ProbeResult<SearchPresence>,
    pub local: ProbeResult<LocalListingData>,
    pub registry: ProbeResult<FirmographicData>,
    pub nyc: ProbeResult<NycData>,
}

/// Business-mode audit: presence by name alone, no website needed.
pub async fn audit_business(
    state: &AppState,
    business_name: &str,
) -> Result<BusinessResult, ScoreError> {
    let fan = FanOut::from_config(&state.config);
    let client = &state.http;
    let endpoints = &state.config.endpoints;
    let keys = &state.config.keys;

    let (google, yelp, local, registry, nyc) = tokio::join!(
        fan.probe(
            "google search",
            reviews::search_google_presence(
                client,
                &endpoints.serpapi,
                keys.serp.as_deref(),
                business_name
            ),
            reviews::google_search_failed(),
        ),
        fan.probe(
            "yelp search",
            reviews::search_yelp_presence(
                client,
                &endpoints.yelp,
                keys.yelp.as_deref(),
                business_name
            ),
            reviews::yelp_search_failed(),
        ),
        fan.probe(
            "nominatim",
            local::check_local_listing(client, &endpoints.nominatim, business_name),
            local::unverified(),
        ),
        fan.probe(
            "opencorporates",
            registry::check_registration(client, &endpoints.opencorporates, business_name),
            registry::registration_unverified(),
        ),
        fan.probe(
            "nyc open data",
            registry::check_nyc_registry(client, &endpoints.nyc_open_data, business_name),
            registry::nyc_unverified(),
        ),
    );

    let result = synthesize(
        business_name,
        BusinessSignals {
            google,
            yelp,
            local,
            registry,
            nyc,
        },
    )?;
    info!(
        "business audit of {} completed: {} ({})",
        business_name, result.overall_score, result.label
    );
    Ok(result)
}

pub fn synthesize(business_name: &str, signals: BusinessSignals) -> Result<BusinessResult, ScoreError> {
    debug!("business signals for {}: {:?}", business_name, signals);
    let found_website = signals.google.data.website.clone();
    let (website_score, website_feedback) = match found_website {
        Some(_) => (WEBSITE_FOUND, "Website found"),
        None => (WEBSITE_MISSING, "No website detected"),
    };

    let overall_score = BUSINESS_WEIGHTS.overall(&[
        (Category::GooglePresence, f64::from(signals.google.score)),
        (Category::ReviewSites, f64::from(signals.yelp.score)),
        (Category::LocalVisibility, f64::from(signals.local.score)),
        (Category::Website, f64::from(website_score)),
    ])?;

    let breakdown = vec![
        BreakdownItem::category(
            Category::GooglePresence,
            signals.google.score,
            signals.google.feedback,
        ),
        BreakdownItem::category(Category::ReviewSites, signals.yelp.score, signals.yelp.feedback),
        BreakdownItem::category(
            Category::LocalVisibility,
            signals.local.score,
            signals.local.feedback,
        ),
        BreakdownItem::category(Category::Website, website_score, website_feedback),
    ];
    let recommendations = business_recommendations(&breakdown);

    Ok(BusinessResult {
        audit_id: Uuid::new_v4(),
        business_name: business_name.to_string(),
        overall_score,
        label: presence_label(overall_score),
        breakdown,
        recommendations,
        source: BUSINESS_SOURCE.to_string(),
        found_website,
        firmographic_data: signals.registry.data,
        nyc_data: signals.nyc.data,
    })
}
