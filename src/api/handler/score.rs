use crate::api::error::AppError;
use crate::models::api::{ReportRequest, ScoreRequest};
use crate::models::score::ScoreResponse;
use crate::services::{presence_score, render_report, report_filename};
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use log::{info, warn};

const INVALID_REQUEST: &str = "Invalid request";

fn invalid(rejection: JsonRejection) -> AppError {
    warn!("rejected body: {}", rejection);
    AppError::bad_request(INVALID_REQUEST)
}

/// `POST /api/score`: weighted presence score over caller-supplied sub-scores.
pub async fn score_handler(
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(request) = payload.map_err(invalid)?;
    Ok(Json(presence_score(request)?))
}

/// `POST /api/download-report`: the score as a downloadable HTML page.
pub async fn download_report_handler(
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(report) = payload.map_err(invalid)?;
    let now = Utc::now();
    let filename = report_filename(now);
    info!("rendering report {} for {}", filename, report.business_name);

    let headers = [
        (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    Ok((headers, render_report(&report, now)))
}
