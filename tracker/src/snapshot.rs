//! JSON snapshot input for the `fittrack` binary
//!
//! A snapshot is an exported copy of one user's data: the profile, the
//! measurement history and logged meals.

use crate::error::TrackerResult;
use crate::store::{InMemoryHistoryStore, InMemoryProfileStore};
use chrono::NaiveDate;
use fittrack_shared::nutrition::MealEntry;
use fittrack_shared::{MeasurementEntry, UserProfile};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Exported user data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub profile: UserProfile,
    #[serde(default)]
    pub history: Vec<MeasurementEntry>,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    /// Pin "today" for reproducible reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

impl Snapshot {
    /// Read and parse a snapshot file
    pub fn load(path: impl AsRef<Path>) -> TrackerResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        debug!(
            path = %path.display(),
            entries = snapshot.history.len(),
            meals = snapshot.meals.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Seed in-memory stores with the snapshot contents
    pub fn into_stores(self) -> (InMemoryProfileStore, InMemoryHistoryStore, Vec<MealEntry>) {
        (
            InMemoryProfileStore::new(Some(self.profile)),
            InMemoryHistoryStore::loaded(self.history),
            self.meals,
        )
    }
}
