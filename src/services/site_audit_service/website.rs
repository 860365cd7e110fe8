use crate::models::audit::{
    ten_scale, AuditResult, BreakdownItem, Category, CategoryRatings, FirmographicData,
    LocalListingData, NycData, ProbeResult, ReviewData, SecurityData,
};
use crate::models::pagespeed::PrimaryScores;
use crate::models::AppState;
use crate::services::site_audit_service::compute::{
    estimate_percentile, website_label, website_recommendations, EngagementSignals, ScoreError,
    WEBSITE_FALLBACK_WEIGHTS, WEBSITE_WEIGHTS,
};
use crate::services::site_audit_service::error::AuditError;
use crate::services::site_audit_service::fanout::FanOut;
use crate::services::site_audit_service::probes::{
    analyze_content, analyze_seo, analyze_social_links, content_proxy_score, local, pagespeed,
    registry, reviews, security,
};
use crate::utils::fetch_page;
use log::{debug, info, warn};
use uuid::Uuid;

pub const PRIMARY_SOURCE: &str =
    "Live Multi-API Analysis (Yelp + Google Business + OpenCorporates + NYC Open Data + PageSpeed + Social Media)";
pub const FALLBACK_SOURCE: &str = "HTML Fallback Analysis";

const ASSUMED_ACCESSIBILITY: u8 = 60;

/// Everything a website audit gathers besides PageSpeed.
#[derive(Debug, Clone)]
pub struct SiteSignals {
    pub html: Option<String>,
    pub security: ProbeResult<SecurityData>,
    pub local: ProbeResult<LocalListingData>,
    pub registry: ProbeResult<FirmographicData>,
    pub nyc: ProbeResult<NycData>,
    pub yelp: ProbeResult<ReviewData>,
    pub google: ProbeResult<ReviewData>,
}

async fn gather_signals(
    state: &AppState,
    fan: &FanOut,
    url: &str,
    business_name: &str,
) -> SiteSignals {
    let client = &state.http;
    let endpoints = &state.config.endpoints;
    let keys = &state.config.keys;
    let location = state.config.review_location.as_str();

    let (html, security, local, registry, nyc, yelp, google) = tokio::join!(
        fan.optional("site html", fetch_page(client, url)),
        fan.probe(
            "security",
            security::check_security(client, url),
            security::unverified(url),
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
        fan.probe(
            "yelp",
            reviews::check_yelp(
                client,
                &endpoints.yelp,
                keys.yelp.as_deref(),
                business_name,
                location,
            ),
            reviews::yelp_unverified(),
        ),
        fan.probe(
            "google business",
            reviews::check_google_business(
                client,
                &endpoints.serpapi,
                keys.serp.as_deref(),
                business_name,
                location,
            ),
            reviews::google_unverified(),
        ),
    );

    SiteSignals {
        html,
        security,
        local,
        registry,
        nyc,
        yelp,
        google,
    }
}

/// Website-mode audit. PageSpeed plus every probe run concurrently under one
/// request deadline; when PageSpeed is unusable or cut off, the HTML fallback
/// scores the site from whatever the other probes returned.
pub async fn audit_website(
    state: &AppState,
    url: &str,
    business_name: &str,
) -> Result<AuditResult, AuditError> {
    let fan = FanOut::from_config(&state.config);
    let endpoints = &state.config.endpoints;

    let (report, signals) = tokio::join!(
        fan.optional(
            "pagespeed",
            pagespeed::fetch_report(
                &state.http,
                &endpoints.pagespeed,
                state.config.keys.pagespeed.as_deref(),
                url,
                &pagespeed::AUDIT_CATEGORIES,
                None,
            ),
        ),
        gather_signals(state, &fan, url, business_name),
    );

    let scores = report.as_ref().and_then(pagespeed::primary_scores);
    if let (Some(scores), Some(html)) = (scores, signals.html.as_deref()) {
        let result = synthesize(url, business_name, Some(scores), html, &signals)?;
        info!(
            "live audit of {} completed: {} ({})",
            url, result.overall_score, result.label
        );
        return Ok(result);
    }

    warn!("PageSpeed data unusable for {}, using HTML fallback", url);
    fallback(state, &fan, url, business_name, signals).await
}

async fn fallback(
    state: &AppState,
    fan: &FanOut,
    url: &str,
    business_name: &str,
    mut signals: SiteSignals,
) -> Result<AuditResult, AuditError> {
    let html = match signals.html.take() {
        Some(html) => html,
        None => refetch_html(state, fan, url).await?,
    };

    let result = synthesize(url, business_name, None, &html, &signals)?;
    info!(
        "fallback audit of {} completed: {} ({})",
        url, result.overall_score, result.label
    );
    Ok(result)
}

/// Second try at the page, within whatever is left of the request deadline.
async fn refetch_html(state: &AppState, fan: &FanOut, url: &str) -> Result<String, AuditError> {
    if fan.expired() {
        return Err(AuditError::WebsiteUnreachable {
            message: format!("{} did not respond before the request deadline", url),
        });
    }
    match fan.bounded(fetch_page(&state.http, url)).await {
        Ok(Ok(html)) => Ok(html),
        Ok(Err(e)) => Err(AuditError::WebsiteUnreachable {
            message: format!("{:#}", e),
        }),
        Err(_) => Err(AuditError::WebsiteUnreachable {
            message: format!("{} did not respond in time", url),
        }),
    }
}

/// Scores gathered signals. `scores` is `None` on the fallback path.
pub fn synthesize(
    url: &str,
    business_name: &str,
    scores: Option<PrimaryScores>,
    html: &str,
    signals: &SiteSignals,
) -> Result<AuditResult, ScoreError> {
    let seo = analyze_seo(html);
    let content = analyze_content(html);
    let social = analyze_social_links(html);

    let (performance, performance_feedback, accessibility, accessibility_feedback) = match scores {
        Some(scores) => (
            scores.performance,
            pagespeed::PERFORMANCE_FEEDBACK,
            scores.accessibility,
            pagespeed::ACCESSIBILITY_FEEDBACK,
        ),
        None => (
            content_proxy_score(html),
            "Estimated from content analysis",
            ASSUMED_ACCESSIBILITY,
            "Unable to verify, assumed moderate",
        ),
    };
    let used_fallback = scores.is_none();
    let table = if used_fallback {
        &WEBSITE_FALLBACK_WEIGHTS
    } else {
        &WEBSITE_WEIGHTS
    };

    let reputation = &signals.security;
    let local = &signals.local;
    let overall_score = table.overall(&[
        (Category::Performance, f64::from(performance)),
        (Category::Seo, f64::from(seo.score)),
        (Category::Accessibility, f64::from(accessibility)),
        (Category::Reputation, f64::from(reputation.score)),
        (Category::LocalVisibility, f64::from(local.score)),
    ])?;

    let breakdown = vec![
        BreakdownItem::category(Category::Performance, performance, performance_feedback),
        BreakdownItem::category(Category::Seo, seo.score, seo.feedback.clone()),
        BreakdownItem::category(Category::Accessibility, accessibility, accessibility_feedback),
        BreakdownItem::category(Category::Reputation, reputation.score, reputation.feedback.clone()),
        BreakdownItem::category(Category::LocalVisibility, local.score, local.feedback.clone()),
    ];
    for item in &breakdown {
        debug!("{} {}: {} ({})", url, item.label(), item.score(), item.feedback());
    }

    let recommendations = website_recommendations(
        business_name,
        &breakdown,
        &EngagementSignals {
            yelp_rating: signals.yelp.data.rating,
            google_rating: signals.google.data.rating,
            social_score: Some(social.score),
            content: Some(content),
        },
    );

    Ok(AuditResult {
        audit_id: Uuid::new_v4(),
        url: url.to_string(),
        business_name: business_name.to_string(),
        overall_score,
        percentile: estimate_percentile(overall_score),
        label: website_label(overall_score),
        breakdown,
        recommendations,
        source: if used_fallback { FALLBACK_SOURCE } else { PRIMARY_SOURCE }.to_string(),
        used_fallback,
        category_ratings: CategoryRatings {
            performance: ten_scale(performance),
            seo: ten_scale(seo.score),
            accessibility: ten_scale(accessibility),
            reputation: ten_scale(reputation.score),
            local_visibility: ten_scale(local.score),
            social: ten_scale(social.score),
        },
        firmographic_data: signals.registry.data.clone(),
        local_listing_data: local.data.clone(),
        nyc_data: signals.nyc.data.clone(),
        yelp_data: signals.yelp.data.clone(),
        google_business_data: signals.google.data.clone(),
        social_media_data: social.data,
    })
}
