use crate::api::error::AppError;
use crate::models::{AppState, BusinessQuery, Mode, ParamsCheck};
use crate::services::{analyze_social, audit_business, audit_website};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::info;
use std::sync::Arc;

/// `GET /api/check`: one audit per mode.
pub async fn check_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsCheck>,
) -> Result<Response, AppError> {
    let has_name = params
        .business_name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());
    let query = BusinessQuery::from(params);
    info!("check {:?} for {}", query.mode, query.business_name);

    match query.mode {
        Mode::Website => {
            let url = query
                .url
                .ok_or_else(|| AppError::bad_request("Missing required parameter: url"))?;
            let result = audit_website(&state, &url, &query.business_name).await?;
            Ok(Json(result).into_response())
        }
        Mode::Business => {
            if !has_name {
                return Err(AppError::bad_request(
                    "Missing required parameter: businessName",
                ));
            }
            let result = audit_business(&state, &query.business_name).await?;
            Ok(Json(result).into_response())
        }
        Mode::Social => {
            let result =
                analyze_social(&state, &query.business_name, &query.social_handles).await?;
            Ok(Json(result).into_response())
        }
    }
}

/// `GET /api/analyze-social`: social mode regardless of `mode`.
pub async fn analyze_social_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsCheck>,
) -> Result<Response, AppError> {
    let query = BusinessQuery::from(params);
    let result = analyze_social(&state, &query.business_name, &query.social_handles).await?;
    Ok(Json(result).into_response())
}
