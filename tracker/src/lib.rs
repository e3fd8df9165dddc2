//! FitTrack Tracker Library
//!
//! Glue between the pure calculators in `fittrack-shared` and the stores
//! that hold a user's profile and measurement history.
//!
//! ## Architecture
//!
//! - Store: profile/history persistence traits, in-memory implementations
//! - Service: logging/editing measurements and assembling the dashboard
//! - Snapshot: JSON import used by the `fittrack` binary

pub mod config;
pub mod error;
pub mod service;
pub mod snapshot;
pub mod store;

pub use error::{TrackerError, TrackerResult};
pub use service::{Dashboard, TrackerService};
