use crate::api::error::AppError;
use crate::models::api::ComprehensiveAuditRequest;
use crate::models::comprehensive::ComprehensiveAuditResponse;
use crate::models::AppState;
use crate::services::{comprehensive_audit, ComprehensiveError};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::warn;
use std::sync::Arc;

pub async fn comprehensive_audit_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ComprehensiveAuditRequest>, JsonRejection>,
) -> Result<Json<ComprehensiveAuditResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("rejected comprehensive audit body: {}", rejection);
        AppError::from(ComprehensiveError::MissingFields)
    })?;
    let response = comprehensive_audit(&state, request).await?;
    Ok(Json(response))
}
