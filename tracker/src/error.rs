//! Tracker error handling
//!
//! Domain-level rejections (not ready, bad index, invalid value) are kept
//! distinct from store and I/O failures so callers can show a recoverable
//! message for the former.

use fittrack_shared::HistoryError;
use thiserror::Error;

/// Errors surfaced by the tracker service and its stores
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No user profile has been saved")]
    ProfileMissing,

    #[error("Store error: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    /// Whether the user can fix this by retrying or correcting input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TrackerError::History(_) | TrackerError::Validation(_) | TrackerError::ProfileMissing
        )
    }
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
