//! Profile and history stores
//!
//! The tracker does not own persistence; it talks to whatever keeps the
//! profile and the measurement history through these traits. Each store is
//! responsible for its own atomicity. In-memory implementations back the
//! binary and the tests.

use crate::error::{TrackerError, TrackerResult};
use fittrack_shared::{MeasurementEntry, UserProfile};

/// Source of the user's profile
pub trait ProfileStore {
    /// The saved profile, if the user has completed onboarding
    fn load_profile(&self) -> TrackerResult<Option<UserProfile>>;

    fn save_profile(&mut self, profile: &UserProfile) -> TrackerResult<()>;

    /// Record a newly logged weight on the profile
    fn update_current_weight(&mut self, weight_kg: f64) -> TrackerResult<()>;
}

/// Source of the measurement history
pub trait HistoryStore {
    /// `None` while the history has not been loaded yet
    fn load_history(&self) -> TrackerResult<Option<Vec<MeasurementEntry>>>;

    fn save_history(&mut self, entries: &[MeasurementEntry]) -> TrackerResult<()>;
}

/// Profile kept in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profile: Option<UserProfile>,
}

impl InMemoryProfileStore {
    pub fn new(profile: Option<UserProfile>) -> Self {
        Self { profile }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn load_profile(&self) -> TrackerResult<Option<UserProfile>> {
        Ok(self.profile.clone())
    }

    fn save_profile(&mut self, profile: &UserProfile) -> TrackerResult<()> {
        self.profile = Some(profile.clone());
        Ok(())
    }

    fn update_current_weight(&mut self, weight_kg: f64) -> TrackerResult<()> {
        let profile = self.profile.as_mut().ok_or(TrackerError::ProfileMissing)?;
        profile.current_weight_kg = weight_kg;
        Ok(())
    }
}

/// History kept in memory
///
/// Starts either loaded or pending; a pending store can be filled later
/// with [`InMemoryHistoryStore::finish_loading`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    entries: Option<Vec<MeasurementEntry>>,
}

impl InMemoryHistoryStore {
    pub fn loaded(entries: Vec<MeasurementEntry>) -> Self {
        Self {
            entries: Some(entries),
        }
    }

    pub fn pending() -> Self {
        Self { entries: None }
    }

    pub fn finish_loading(&mut self, entries: Vec<MeasurementEntry>) {
        self.entries = Some(entries);
    }

    /// Entries exactly as last saved
    pub fn saved(&self) -> Option<&[MeasurementEntry]> {
        self.entries.as_deref()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn load_history(&self) -> TrackerResult<Option<Vec<MeasurementEntry>>> {
        Ok(self.entries.clone())
    }

    fn save_history(&mut self, entries: &[MeasurementEntry]) -> TrackerResult<()> {
        if self.entries.is_none() {
            return Err(TrackerError::Store(
                "cannot save before the history has loaded".to_string(),
            ));
        }
        self.entries = Some(entries.to_vec());
        Ok(())
    }
}
