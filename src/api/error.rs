use crate::services::{AuditError, ComprehensiveError, SocialError};
use crate::services::site_audit_service::compute::ScoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    used_fallback: Option<bool>,
}

/// Everything a handler can fail with, mapped onto a JSON error body.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    /// The website audit could not read the site even on the fallback path.
    AnalysisFailed { message: String },
    Upstream { error: &'static str, message: String },
    Internal(String),
}

impl AppError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        AppError::BadRequest(error.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(error) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error,
                    message: None,
                    used_fallback: None,
                },
            ),
            AppError::AnalysisFailed { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Failed to analyze website".to_string(),
                    message: Some(message),
                    used_fallback: Some(true),
                },
            ),
            AppError::Upstream { error, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: error.to_string(),
                    message: Some(message),
                    used_fallback: None,
                },
            ),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Internal server error".to_string(),
                    message: Some(message),
                    used_fallback: None,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ScoreError> for AppError {
    fn from(e: ScoreError) -> Self {
        error!("scoring failed: {}", e);
        AppError::Internal(e.to_string())
    }
}

impl From<AuditError> for AppError {
    fn from(e: AuditError) -> Self {
        match e {
            AuditError::WebsiteUnreachable { message } => {
                error!("website analysis failed: {}", message);
                AppError::AnalysisFailed { message }
            }
            AuditError::Score(e) => e.into(),
        }
    }
}

impl From<SocialError> for AppError {
    fn from(e: SocialError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<ComprehensiveError> for AppError {
    fn from(e: ComprehensiveError) -> Self {
        match e {
            ComprehensiveError::MissingFields | ComprehensiveError::InvalidUrl(_) => {
                AppError::BadRequest(e.to_string())
            }
            ComprehensiveError::Score(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_of(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn website_failures_flag_the_fallback() {
        let (status, body) = body_of(
            AuditError::WebsiteUnreachable {
                message: "connection refused".to_string(),
            }
            .into(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": "Failed to analyze website", "message": "connection refused", "usedFallback": true})
        );
    }

    #[tokio::test]
    async fn bad_requests_carry_only_the_error() {
        let (status, body) = body_of(SocialError::NoHandles.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "At least one social media handle is required"}));
    }
}
