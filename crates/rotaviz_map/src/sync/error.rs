use rotaviz_service::error::ServiceError;
use thiserror::Error;

pub const GENERIC_OPTIMIZATION_ERROR: &str = "optimization request failed";

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to load data from the service: {0}")]
    InitialLoad(#[source] ServiceError),

    #[error("Optimization failed: {0}")]
    Optimization(String),

    #[error("Invalid optimization result: {0}")]
    MalformedResult(String),

    #[error("An optimization is already in progress")]
    OptimizationInProgress,
}

impl SyncError {
    /// Maps a failed optimization call to the message shown to the user.
    pub(crate) fn from_optimization(error: ServiceError) -> Self {
        match error {
            ServiceError::Api { detail, .. } => SyncError::Optimization(
                detail.unwrap_or_else(|| String::from(GENERIC_OPTIMIZATION_ERROR)),
            ),
            ServiceError::Deserialize(err) => SyncError::MalformedResult(err.to_string()),
            other => SyncError::Optimization(other.to_string()),
        }
    }
}
