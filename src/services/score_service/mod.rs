// src/services/score_service/mod.rs

use crate::models::api::ScoreRequest;
use crate::models::audit::Category;
use crate::models::score::ScoreResponse;
use crate::services::site_audit_service::compute::{ScoreError, PRESENCE_WEIGHTS};
use log::debug;

const STRONG_SCORE: f64 = 70.0;
const BASELINE_SCORE: f64 = 50.0;

/// Advice for every caller-supplied sub-score under its threshold.
pub fn insights(request: &ScoreRequest) -> Vec<String> {
    let checks = [
        (
            request.performance < STRONG_SCORE,
            "Improve Core Web Vitals and image compression for faster loading speed.",
        ),
        (
            request.seo < STRONG_SCORE,
            "Add meta tags, schema markup, and mobile optimizations to boost SEO.",
        ),
        (
            request.tech_depth < BASELINE_SCORE,
            "Use modern analytics and CMS frameworks for better scalability.",
        ),
        (
            request.visibility < BASELINE_SCORE,
            "Increase reviews and brand mentions across Google and social media.",
        ),
    ];
    checks
        .into_iter()
        .filter(|(weak, _)| *weak)
        .map(|(_, insight)| insight.to_string())
        .collect()
}

pub fn presence_score(request: ScoreRequest) -> Result<ScoreResponse, ScoreError> {
    let total_score = PRESENCE_WEIGHTS.overall(&[
        (Category::Performance, request.performance),
        (Category::Seo, request.seo),
        (Category::TechDepth, request.tech_depth),
        (Category::Visibility, request.visibility),
    ])?;
    let insights = insights(&request);
    debug!(
        "presence score for {}: {} with {} insight(s)",
        request.business_name,
        total_score,
        insights.len()
    );

    Ok(ScoreResponse {
        business_name: request.business_name,
        website_url: request.website_url,
        performance: request.performance,
        seo: request.seo,
        tech_depth: request.tech_depth,
        visibility: request.visibility,
        total_score,
        insights,
    })
}
