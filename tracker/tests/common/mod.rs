//! Common test utilities for integration tests
//!
//! Builds a tracker over in-memory stores with a known profile.

#![allow(dead_code)]

use chrono::NaiveDate;
use fittrack::config::ProgressConfig;
use fittrack::store::{InMemoryHistoryStore, InMemoryProfileStore};
use fittrack::TrackerService;
use fittrack_shared::nutrition::MealEntry;
use fittrack_shared::{ActivityLevel, FitnessGoal, Gender, MeasurementEntry, UserProfile};

pub type TestService = TrackerService<InMemoryProfileStore, InMemoryHistoryStore>;

/// Tracker wrapper used across integration tests
pub struct TestTracker {
    pub service: TestService,
}

impl TestTracker {
    /// Tracker with a loaded, empty history
    pub fn new() -> Self {
        Self::with_history(Vec::new())
    }

    /// Tracker seeded with existing entries
    pub fn with_history(entries: Vec<MeasurementEntry>) -> Self {
        let service = TrackerService::new(
            InMemoryProfileStore::new(Some(test_profile())),
            InMemoryHistoryStore::loaded(entries),
            ProgressConfig::default(),
        )
        .expect("Failed to build tracker");
        Self { service }
    }

    /// Tracker whose history has not loaded
    pub fn pending() -> Self {
        let service = TrackerService::new(
            InMemoryProfileStore::new(Some(test_profile())),
            InMemoryHistoryStore::pending(),
            ProgressConfig::default(),
        )
        .expect("Failed to build tracker");
        Self { service }
    }

    /// Log a series of `(day of January 2024, value)` pairs
    pub fn log_all(&mut self, values: &[(u32, f64)]) {
        for &(day, value) in values {
            self.service
                .log_measurement(jan(day), value)
                .expect("Failed to log measurement");
        }
    }

    pub fn values(&self) -> Vec<f64> {
        self.service.entries().iter().map(|e| e.value).collect()
    }

    pub fn deltas(&self) -> Vec<f64> {
        self.service.entries().iter().map(|e| e.delta).collect()
    }
}

/// Female, 28, 165 cm, 75.2 kg, moderate, fat loss
pub fn test_profile() -> UserProfile {
    UserProfile {
        gender: Gender::Female,
        age: 28,
        height_cm: 165.0,
        current_weight_kg: 75.2,
        activity_level: ActivityLevel::Moderate,
        goal: FitnessGoal::FatLoss,
    }
}

pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date")
}

pub fn meal(day: u32, name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> MealEntry {
    MealEntry {
        date: jan(day),
        name: name.to_string(),
        calories,
        protein_grams: protein,
        carbs_grams: carbs,
        fat_grams: fat,
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
