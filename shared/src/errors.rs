//! Error types for the FitTrack domain library

use thiserror::Error;

/// Rejected measurement history mutation
///
/// Every variant leaves the history untouched, so the caller can report the
/// problem and let the user retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Measurement history is not loaded yet")]
    NotReady,

    #[error("Entry index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}
