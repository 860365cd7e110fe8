// src/api/mod.rs

pub mod error;
pub mod handler;

use crate::models::AppState;
use axum::routing::{get, post};
use axum::Router;
use handler::{
    analyze_social_handler, check_handler, comprehensive_audit_handler, crawl_handler,
    download_report_handler, fetch_pagespeed_handler, health_handler, score_handler,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/check", get(check_handler))
        .route("/api/analyze-social", get(analyze_social_handler))
        .route("/api/comprehensive-audit", post(comprehensive_audit_handler))
        .route("/api/score", post(score_handler))
        .route("/api/download-report", post(download_report_handler))
        .route("/api/crawl", get(crawl_handler))
        .route("/api/fetch-pagespeed", get(fetch_pagespeed_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_upstream, state_for, JOES_PIZZA_HTML};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const NOWHERE: &str = "http://127.0.0.1:9";

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, bytes) = send(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health() {
        let (status, body) = get_json(router(state_for(NOWHERE)), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn website_mode_requires_url() {
        let (status, body) = get_json(router(state_for(NOWHERE)), "/api/check?mode=website").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required parameter: url");
    }

    #[tokio::test]
    async fn business_mode_requires_name() {
        let (status, body) = get_json(router(state_for(NOWHERE)), "/api/check?mode=business").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required parameter: businessName");
    }

    #[tokio::test]
    async fn social_mode_without_handles() {
        let app = router(state_for(NOWHERE));
        let (status, body) = get_json(app, "/api/check?mode=social&businessName=Joe").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "At least one social media handle is required"}));

        let app = router(state_for(NOWHERE));
        let (status, _) = get_json(app, "/api/analyze-social?instagram=%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unreachable_website_is_a_server_error() {
        let app = router(state_for(NOWHERE));
        let (status, body) = get_json(app, "/api/check?url=http%3A%2F%2F127.0.0.1%3A9%2F").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to analyze website");
        assert_eq!(body["usedFallback"], true);
    }

    #[tokio::test]
    async fn website_mode_falls_back_without_pagespeed() {
        let upstream = Router::new().route("/site", get(|| async { JOES_PIZZA_HTML }));
        let base = spawn_upstream(upstream).await;
        let app = router(state_for(&base));

        let uri = format!("/api/check?mode=website&businessName=Joe%27s%20Pizza&url={}/site", base);
        let (status, body) = get_json(app, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["usedFallback"], true);
        assert_eq!(body["source"], "HTML Fallback Analysis");
        assert_eq!(body["businessName"], "Joe's Pizza");
        let score = body["overallScore"].as_u64().unwrap();
        assert!(score <= 100);
        assert!(body["recommendations"].as_array().unwrap().len() <= 5);
    }

    #[tokio::test]
    async fn score_endpoint() {
        let request = post_json(
            "/api/score",
            r#"{"businessName":"Joe's Pizza","websiteURL":"https://joespizzanyc.com",
                "performance":80,"seo":70,"techDepth":40,"visibility":60}"#,
        );
        let (status, bytes) = send(router(state_for(NOWHERE)), request).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalScore"], 65);
        assert_eq!(body["websiteURL"], "https://joespizzanyc.com");
        assert_eq!(body["insights"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn score_rejects_bad_bodies() {
        let request = post_json("/api/score", r#"{"businessName": 3}"#);
        let (status, bytes) = send(router(state_for(NOWHERE)), request).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid request"}));
    }

    #[tokio::test]
    async fn report_is_an_html_attachment() {
        let request = post_json(
            "/api/download-report",
            r#"{"businessName":"<Joe>","websiteURL":"https://joespizzanyc.com",
                "performance":80,"seo":70,"techDepth":40,"visibility":60,
                "totalScore":65,"insights":["Add schema markup"]}"#,
        );
        let response = router(state_for(NOWHERE)).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"presence-report-"));
        assert!(disposition.ends_with(".html\""));
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("&lt;Joe&gt;"));
        assert!(html.contains("Add schema markup"));
    }

    #[tokio::test]
    async fn comprehensive_audit_requires_fields() {
        let request = post_json("/api/comprehensive-audit", r#"{"businessName":"Joe's"}"#);
        let (status, bytes) = send(router(state_for(NOWHERE)), request).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "businessName and websiteUrl are required");
    }

    #[tokio::test]
    async fn crawl_and_pagespeed_need_a_url() {
        let (status, body) = get_json(router(state_for(NOWHERE)), "/api/crawl").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing URL parameter");

        let (status, _) = get_json(router(state_for(NOWHERE)), "/api/fetch-pagespeed?url=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn crawl_scans_the_page() {
        let upstream = Router::new().route("/site", get(|| async { JOES_PIZZA_HTML }));
        let base = spawn_upstream(upstream).await;

        let uri = format!("/api/crawl?url={}/site", base);
        let (status, body) = get_json(router(state_for(&base)), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Joe's Pizza");
        assert_eq!(body["h1Count"], 1);
        assert_eq!(body["fallback"], true);
    }
}
