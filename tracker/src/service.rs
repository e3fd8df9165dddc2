//! Tracker service
//!
//! Connects the profile and history stores to the calculators:
//! - Logging, editing and deleting measurements
//! - Keeping the profile weight in step with newly logged measurements
//! - Assembling targets, progress and intake into one dashboard

use crate::config::ProgressConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::store::{HistoryStore, ProfileStore};
use chrono::NaiveDate;
use fittrack_shared::goals::calculate_target_breakdown;
use fittrack_shared::health_metrics::{bmi_for_profile, calculate_daily_water_ml, BmiResult};
use fittrack_shared::nutrition::{aggregate_intake, intake_progress, IntakeProgress, MealEntry};
use fittrack_shared::progress::{self, chronological_index};
use fittrack_shared::validation::{validate_measurement_value, validate_profile};
use fittrack_shared::{
    HistoryError, MeasurementEntry, MeasurementLog, ProgressSummary, TargetBreakdown, UserProfile,
    WeeklyAverage,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything the dashboard shows for one day
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub targets: TargetBreakdown,
    pub progress: ProgressSummary,
    pub weekly_averages: Vec<WeeklyAverage>,
    pub intake: IntakeProgress,
    pub bmi: BmiResult,
    pub daily_water_ml: i32,
}

/// Tracker service over a profile store and a history store
pub struct TrackerService<P, H> {
    profiles: P,
    history: H,
    log: MeasurementLog,
    config: ProgressConfig,
}

impl<P: ProfileStore, H: HistoryStore> TrackerService<P, H> {
    /// Create the service and load whatever history is available
    pub fn new(profiles: P, history: H, config: ProgressConfig) -> TrackerResult<Self> {
        let mut service = Self {
            profiles,
            history,
            log: MeasurementLog::pending(),
            config,
        };
        service.reload()?;
        Ok(service)
    }

    /// Re-read the history from its store
    pub fn reload(&mut self) -> TrackerResult<()> {
        self.log = match self.history.load_history()? {
            Some(entries) => {
                debug!(entries = entries.len(), "Measurement history loaded");
                MeasurementLog::loaded(entries)
            }
            None => {
                debug!("Measurement history not available yet");
                MeasurementLog::pending()
            }
        };
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.log.is_ready()
    }

    pub fn profile(&self) -> TrackerResult<UserProfile> {
        self.profiles
            .load_profile()?
            .ok_or(TrackerError::ProfileMissing)
    }

    /// Entries oldest first
    pub fn entries(&self) -> &[MeasurementEntry] {
        self.log.entries()
    }

    /// Entries newest first, as lists display them
    pub fn entries_newest_first(&self) -> Vec<MeasurementEntry> {
        self.log.entries().iter().rev().cloned().collect()
    }

    /// Current calorie and macro targets
    pub fn targets(&self) -> TrackerResult<TargetBreakdown> {
        let profile = self.profile()?;
        let breakdown = calculate_target_breakdown(&profile);
        debug!(
            calories = breakdown.targets.calories,
            protein = breakdown.targets.protein_grams,
            carbs = breakdown.targets.carbs_grams,
            fat = breakdown.targets.fat_grams,
            "Calculated daily targets"
        );
        Ok(breakdown)
    }

    /// Replace the stored profile after checking its ranges
    pub fn update_profile(&mut self, profile: &UserProfile) -> TrackerResult<()> {
        if let Err(errors) = validate_profile(profile) {
            let message = errors
                .iter()
                .map(|e| e.user_message())
                .collect::<Vec<_>>()
                .join("; ");
            warn!("Profile rejected: {}", message);
            return Err(TrackerError::Validation(message));
        }

        self.profiles.save_profile(profile)?;
        info!(goal = ?profile.goal, weight = profile.current_weight_kg, "Profile updated");
        Ok(())
    }

    /// Log a measurement for `date` and copy it onto the profile
    pub fn log_measurement(&mut self, date: NaiveDate, value: f64) -> TrackerResult<()> {
        validate_measurement_value(value).map_err(TrackerError::Validation)?;
        let profile = self.profile()?;

        let mut next = self.log.clone();
        if let Err(err) = next.add_entry(date, value, profile.current_weight_kg) {
            warn!(%date, "Measurement rejected: {}", err);
            return Err(err.into());
        }
        self.history.save_history(next.entries())?;

        if let Err(err) = self.profiles.update_current_weight(value) {
            // Put the previous history back so both stores agree again
            if let Err(revert) = self.history.save_history(self.log.entries()) {
                warn!("Could not restore history: {}", revert);
            }
            return Err(err);
        }
        self.log = next;

        info!(%date, value, "Measurement logged");
        Ok(())
    }

    /// Change the value of the entry shown at `display_index` (newest first)
    pub fn edit_measurement(&mut self, display_index: usize, value: f64) -> TrackerResult<()> {
        validate_measurement_value(value).map_err(TrackerError::Validation)?;
        let index = self.resolve_display_index(display_index)?;

        let mut next = self.log.clone();
        next.update_entry(index, value)?;
        self.history.save_history(next.entries())?;
        self.log = next;

        info!(index, value, "Measurement edited");
        Ok(())
    }

    /// Delete the entry shown at `display_index` (newest first)
    pub fn delete_measurement(&mut self, display_index: usize) -> TrackerResult<MeasurementEntry> {
        let index = self.resolve_display_index(display_index)?;

        let mut next = self.log.clone();
        let removed = next.delete_entry(index)?;
        self.history.save_history(next.entries())?;
        self.log = next;

        info!(date = %removed.date, "Measurement deleted");
        Ok(removed)
    }

    fn resolve_display_index(&self, display_index: usize) -> TrackerResult<usize> {
        if !self.log.is_ready() {
            warn!("Measurement history not ready");
            return Err(HistoryError::NotReady.into());
        }
        let len = self.log.len();
        chronological_index(len, display_index).ok_or_else(|| {
            warn!(display_index, len, "Measurement index out of range");
            TrackerError::History(HistoryError::IndexOutOfRange {
                index: display_index,
                len,
            })
        })
    }

    /// Progress statistics as of `today`
    pub fn progress(&self, today: NaiveDate) -> TrackerResult<ProgressSummary> {
        let profile = self.profile()?;
        Ok(progress::summarize(
            self.log.entries(),
            today,
            profile.current_weight_kg,
            self.config.moving_average_window,
        ))
    }

    /// Targets, progress and intake for `today`
    pub fn dashboard(&self, today: NaiveDate, meals: &[MealEntry]) -> TrackerResult<Dashboard> {
        let profile = self.profile()?;
        let targets = self.targets()?;
        let intake = aggregate_intake(meals, today);

        Ok(Dashboard {
            date: today,
            progress: self.progress(today)?,
            weekly_averages: progress::weekly_averages(self.log.entries()),
            intake: intake_progress(&intake, &targets.targets),
            targets,
            bmi: bmi_for_profile(&profile),
            daily_water_ml: calculate_daily_water_ml(
                profile.current_weight_kg,
                profile.activity_level,
            ),
        })
    }

    /// Hand the stores back, e.g. to inspect what was persisted
    pub fn into_stores(self) -> (P, H) {
        (self.profiles, self.history)
    }
}
