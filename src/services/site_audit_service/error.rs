use crate::services::site_audit_service::compute::ScoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    /// Neither PageSpeed nor the page itself could be read.
    #[error("Failed to analyze website")]
    WebsiteUnreachable { message: String },

    #[error(transparent)]
    Score(#[from] ScoreError),
}
