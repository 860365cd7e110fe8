// src/services/social_service/mod.rs

pub mod platform;

use crate::models::audit::{BreakdownItem, PlatformAnalysis, SocialResult};
use crate::models::{AppState, SocialHandles};
use crate::services::site_audit_service::compute::{presence_label, social_recommendations};
use crate::services::site_audit_service::FanOut;
use futures::future::join_all;
use log::info;
use platform::Platform;
use thiserror::Error;

const ACTIVE_PLATFORM_SCORE: u8 = 50;

#[derive(Debug, Error)]
pub enum SocialError {
    #[error("At least one social media handle is required")]
    NoHandles,
}

fn requested(handles: &SocialHandles) -> Vec<(Platform, String)> {
    [
        (Platform::Instagram, &handles.instagram),
        (Platform::TikTok, &handles.tiktok),
        (Platform::Facebook, &handles.facebook),
        (Platform::LinkedIn, &handles.linkedin),
    ]
    .into_iter()
    .filter_map(|(platform, handle)| {
        let handle = handle.as_deref()?.trim().trim_start_matches('@');
        (!handle.is_empty()).then(|| (platform, handle.to_string()))
    })
    .collect()
}

/// Analyzes every supplied social profile concurrently.
pub async fn analyze_social(
    state: &AppState,
    business_name: &str,
    handles: &SocialHandles,
) -> Result<SocialResult, SocialError> {
    let requested = requested(handles);
    if requested.is_empty() {
        return Err(SocialError::NoHandles);
    }

    let fan = FanOut::from_config(&state.config);
    let analyses = join_all(requested.iter().map(|(platform, handle)| {
        fan.probe(
            platform.name(),
            platform.fetch_and_analyze(&state.http, &state.config.endpoints, handle),
            platform.unavailable(handle),
        )
    }))
    .await;

    let result = summarize(business_name, analyses);
    info!(
        "social audit of {} completed: {} ({})",
        business_name, result.overall_score, result.label
    );
    Ok(result)
}

pub fn summarize(business_name: &str, analyses: Vec<PlatformAnalysis>) -> SocialResult {
    let total: u32 = analyses.iter().map(|a| u32::from(a.score)).sum();
    let overall_score = if analyses.is_empty() {
        0
    } else {
        (f64::from(total) / analyses.len() as f64).round() as u8
    };

    let active = analyses
        .iter()
        .filter(|a| a.score > ACTIVE_PLATFORM_SCORE)
        .count();
    let summary = match active {
        0 => format!(
            "{} needs to establish social media presence. Start with 1-2 platforms where your audience is most active.",
            business_name
        ),
        1 | 2 => format!(
            "{} has {} active social channel(s). Consider expanding to more platforms for broader reach.",
            business_name, active
        ),
        _ => format!(
            "{} has a strong multi-platform presence with {} active channels. Focus on consistent posting and engagement.",
            business_name, active
        ),
    };

    SocialResult {
        mode: "social",
        business_name: business_name.to_string(),
        overall_score,
        label: presence_label(overall_score),
        breakdown: analyses.into_iter().map(BreakdownItem::Platform).collect(),
        summary,
        recommendations: social_recommendations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audit::Label;
    use crate::test_support::{spawn_upstream, state_for};
    use axum::routing::get;
    use axum::Router;

    fn handles(instagram: Option<&str>, tiktok: Option<&str>) -> SocialHandles {
        SocialHandles {
            instagram: instagram.map(String::from),
            tiktok: tiktok.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn blank_handles_are_skipped() {
        let requested = requested(&handles(Some("@joespizzanyc"), Some("  ")));
        assert_eq!(requested, vec![(Platform::Instagram, "joespizzanyc".to_string())]);
    }

    #[test]
    fn summary_counts_active_platforms() {
        let analyses = vec![
            Platform::Instagram.analyze("joes", r#""username" "edge_owner_to_timeline_media""#),
            Platform::TikTok.analyze("joes", "nothing here"),
        ];
        let result = summarize("Joe's Pizza", analyses);

        // (70 + 0) / 2
        assert_eq!(result.overall_score, 35);
        assert_eq!(result.label, Label::NeedsWork);
        assert!(result.summary.starts_with("Joe's Pizza has 1 active social channel(s)"));
        assert_eq!(result.recommendations.len(), 5);
    }

    #[tokio::test]
    async fn no_handles_is_rejected() {
        let state = state_for("http://127.0.0.1:9");
        let err = analyze_social(&state, "Joe's", &SocialHandles::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "At least one social media handle is required");
    }

    #[tokio::test]
    async fn profiles_are_fetched_from_each_platform() {
        let router = Router::new()
            .route(
                "/instagram/joes/",
                get(|| async { r#"{"username":"joes","edge_followed_by":{"count":10}}"# }),
            )
            .route(
                "/tiktok/{handle}",
                get(|| async { r#"{"uniqueId":"joes","videoCount":3}"# }),
            );
        let base = spawn_upstream(router).await;
        let state = state_for(&base);

        let result = analyze_social(&state, "Joe's Pizza", &handles(Some("joes"), Some("joes")))
            .await
            .unwrap();

        let scores: Vec<u8> = result.breakdown.iter().map(BreakdownItem::score).collect();
        assert_eq!(scores, vec![60, 100]);
        assert_eq!(result.overall_score, 80);
        assert_eq!(result.label, Label::Excellent);
    }
}
