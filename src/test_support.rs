// Shared helpers for tests that need a fake upstream.

use crate::models::app::{AppState, Config, Endpoints};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// App state whose every upstream lives under `base`, with short timeouts.
pub fn state_for(base: &str) -> Arc<AppState> {
    state_with_timeouts(base, 1_500, 3_000)
}

pub fn state_with_timeouts(base: &str, probe_timeout_ms: u64, request_deadline_ms: u64) -> Arc<AppState> {
    let config = Config {
        endpoints: Endpoints::rooted_at(base),
        probe_timeout: Duration::from_millis(probe_timeout_ms),
        request_deadline: Duration::from_millis(request_deadline_ms),
        ..Config::default()
    };
    Arc::new(AppState::new(config).unwrap())
}

pub const JOES_PIZZA_HTML: &str = r#"<html><head><title>Joe's Pizza</title>
<meta name="description" content="Best slice in the Village since 1975">
<script type="application/ld+json">{"@type":"Restaurant"}</script>
</head><body><h1>Joe's Pizza</h1>
<p>Order now for pickup or delivery.</p>
<a href="https://instagram.com/joespizzanyc">Instagram</a>
</body></html>"#;

pub const PAGESPEED_REPORT: &str = r#"{"lighthouseResult":{"categories":{
    "performance":{"score":0.9},"accessibility":{"score":0.8},
    "seo":{"score":0.92},"best-practices":{"score":0.96}}}}"#;
