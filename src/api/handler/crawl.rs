use crate::api::error::AppError;
use crate::models::crawl::CrawlResponse;
use crate::models::score::PageSpeedSummary;
use crate::models::{AppState, ParamsUrl};
use crate::services::{crawl, summarize_pagespeed};
use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

const MISSING_URL: &str = "Missing URL parameter";

fn required_url(params: ParamsUrl) -> Result<String, AppError> {
    params
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| AppError::bad_request(MISSING_URL))
}

pub async fn crawl_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsUrl>,
) -> Result<Json<CrawlResponse>, AppError> {
    let url = required_url(params)?;
    let response = crawl(&state.http, &url)
        .await
        .map_err(|e| AppError::Upstream {
            error: "Crawl failed",
            message: format!("{:#}", e),
        })?;
    Ok(Json(response))
}

pub async fn fetch_pagespeed_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsUrl>,
) -> Result<Json<PageSpeedSummary>, AppError> {
    let url = required_url(params)?;
    let summary = summarize_pagespeed(
        &state.http,
        &state.config.endpoints.pagespeed,
        state.config.keys.pagespeed.as_deref(),
        &url,
    )
    .await
    .map_err(|e| AppError::Upstream {
        error: "Fetch failed",
        message: format!("{:#}", e),
    })?;
    Ok(Json(summary))
}
