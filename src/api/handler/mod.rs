pub mod audit;
pub mod comprehensive;
pub mod crawl;
pub mod score;

pub use audit::{analyze_social_handler, check_handler};
pub use comprehensive::comprehensive_audit_handler;
pub use crawl::{crawl_handler, fetch_pagespeed_handler};
pub use score::{download_report_handler, score_handler};

use axum::Json;
use serde_json::{json, Value};

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
