// src/services/comprehensive_service/mod.rs

pub mod scoring;
pub mod sources;

use crate::models::api::ComprehensiveAuditRequest;
use crate::models::audit::Category;
use crate::models::comprehensive::{ComprehensiveAuditResponse, SafeBrowsingStatus};
use crate::models::AppState;
use crate::services::site_audit_service::compute::{ScoreError, COMPREHENSIVE_WEIGHTS};
use crate::services::site_audit_service::probes::pagespeed;
use crate::services::site_audit_service::FanOut;
use crate::utils::is_https;
use chrono::Utc;
use log::info;
use reqwest::Url;
use thiserror::Error;

const DEFAULT_LOCATION: &str = "United States";

#[derive(Debug, Error)]
pub enum ComprehensiveError {
    #[error("businessName and websiteUrl are required")]
    MissingFields,

    #[error("websiteUrl is not a valid URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Hostname of `website_url` without a `www.` prefix.
pub fn domain_of(website_url: &str) -> Result<String, ComprehensiveError> {
    let parsed =
        Url::parse(website_url).map_err(|_| ComprehensiveError::InvalidUrl(website_url.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| ComprehensiveError::InvalidUrl(website_url.to_string()))?;
    Ok(host.replacen("www.", "", 1))
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

/// Brand, SEO, local and safety audit of one business website.
pub async fn comprehensive_audit(
    state: &AppState,
    request: ComprehensiveAuditRequest,
) -> Result<ComprehensiveAuditResponse, ComprehensiveError> {
    let (Some(business_name), Some(website_url)) =
        (required(request.business_name), required(request.website_url))
    else {
        return Err(ComprehensiveError::MissingFields);
    };
    let domain = domain_of(&website_url)?;
    let location = required(request.location).unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    info!("starting comprehensive audit for {} ({})", business_name, domain);

    let fan = FanOut::from_config(&state.config);
    let client = &state.http;
    let endpoints = &state.config.endpoints;
    let keys = &state.config.keys;

    let (company, report, safe_browsing, domain_age, yelp) = tokio::join!(
        fan.probe(
            "clearbit",
            sources::clearbit_company(client, &endpoints.clearbit_autocomplete, &business_name),
            None,
        ),
        fan.optional(
            "pagespeed mobile",
            pagespeed::fetch_report(
                client,
                &endpoints.pagespeed,
                keys.pagespeed.as_deref(),
                &website_url,
                &pagespeed::COMPREHENSIVE_CATEGORIES,
                Some("mobile"),
            ),
        ),
        fan.probe(
            "safe browsing",
            sources::safe_browsing_status(
                client,
                &endpoints.safe_browsing,
                keys.safe_browsing.as_deref(),
                &website_url,
            ),
            SafeBrowsingStatus::Unknown,
        ),
        fan.probe(
            "domainsdb",
            sources::domain_age(client, &endpoints.domainsdb, &domain),
            None,
        ),
        fan.probe(
            "yelp",
            sources::top_yelp_business(
                client,
                &endpoints.yelp,
                keys.yelp.as_deref(),
                &business_name,
                &location,
            ),
            None,
        ),
    );

    let clearbit_domain = company.as_ref().and_then(|c| c.domain.clone());
    let logo_url = match clearbit_domain.as_deref() {
        Some(clearbit_domain) => {
            fan.probe(
                "clearbit logo",
                sources::clearbit_logo(client, &endpoints.clearbit_logo, clearbit_domain),
                None,
            )
            .await
        }
        None => None,
    };

    let pagespeed_data = report.and_then(|root| root.categories().cloned());
    let on_page_seo_score = scoring::on_page_seo_score(pagespeed_data.as_ref());
    let brand_clarity_score = scoring::brand_clarity_score(
        &domain,
        clearbit_domain.as_deref(),
        logo_url.is_some(),
        &business_name,
        company.as_ref().and_then(|c| c.name.as_deref()),
    );
    let local_seo_score = scoring::local_seo_score(yelp.as_ref(), domain_age.as_ref(), Utc::now());
    let safety_score = scoring::safety_score(safe_browsing, is_https(&website_url));

    let final_score = COMPREHENSIVE_WEIGHTS.overall(&[
        (Category::OnPageSeo, f64::from(on_page_seo_score)),
        (Category::BrandClarity, f64::from(brand_clarity_score)),
        (Category::LocalSeo, f64::from(local_seo_score)),
        (Category::Safety, f64::from(safety_score)),
    ])?;
    info!(
        "comprehensive audit for {}: final {} (seo {}, brand {}, local {}, safety {})",
        business_name, final_score, on_page_seo_score, brand_clarity_score, local_seo_score, safety_score
    );

    Ok(ComprehensiveAuditResponse {
        final_score,
        on_page_seo_score,
        brand_clarity_score,
        local_seo_score,
        safety_score,
        logo_url,
        company_data: company,
        pagespeed_data,
        domain_age_data: domain_age,
        safe_browsing_status: safe_browsing,
        yelp_data: yelp,
    })
}
