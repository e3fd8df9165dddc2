//! FitTrack Shared Library
//!
//! Pure domain calculations used by the tracker service and the WASM
//! bindings: daily calorie/macro targets, progress statistics over a
//! measurement history, and a few supporting health metrics. Nothing in this
//! crate performs I/O or keeps global state.

pub mod errors;
pub mod goals;
pub mod health_metrics;
pub mod nutrition;
pub mod profile;
pub mod progress;
pub mod rounding;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use goals::{
    calculate_bmr, calculate_daily_calories, calculate_daily_targets, calculate_macros,
    calculate_target_breakdown, calculate_tdee, TargetBreakdown,
};
pub use profile::*;
pub use progress::{DisplayRange, MeasurementEntry, MeasurementLog, ProgressSummary, WeeklyAverage};
