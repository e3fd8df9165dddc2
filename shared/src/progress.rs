//! Progress statistics over a measurement history
//!
//! Read operations take the history as a slice in any order and never
//! modify it. Values are framed for weight loss: a decrease is reported as a
//! positive change.
//!
//! When the history is empty, "current" and "initial" fall back to a value
//! the caller supplies (usually the weight stored on the profile).
//!
//! [`MeasurementLog`] owns a chronologically sorted history and applies
//! add/update/delete. It may be constructed before the backing store has
//! delivered any data, in which case mutations are refused with
//! [`HistoryError::NotReady`].

use crate::errors::HistoryError;
use crate::rounding::{round_half_up, round_one_decimal};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Half-width of the chart band around the current value, as a fraction
const DISPLAY_BAND_FRACTION: f64 = 0.05;

/// Padding added beyond the historic extremes when the band is widened
const DISPLAY_MARGIN: f64 = 0.5;

/// How far back the weekly comparison looks
const WEEKLY_LOOKBACK_DAYS: i64 = 7;

/// One dated measurement, e.g. a morning weigh-in in kilograms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementEntry {
    pub date: NaiveDate,
    pub value: f64,
    /// Change from the chronologically preceding entry
    #[serde(default)]
    pub delta: f64,
}

impl MeasurementEntry {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value,
            delta: 0.0,
        }
    }
}

/// Chart axis bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

/// Average of the entries that fall in one ISO week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAverage {
    pub iso_year: i32,
    pub iso_week: u32,
    /// Monday of the week
    pub week_start: NaiveDate,
    pub average: f64,
    pub entries: usize,
}

/// All progress figures for one dashboard render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub current_value: f64,
    pub initial_value: f64,
    pub total_change: f64,
    pub average_weekly_change: f64,
    pub weekly_change: f64,
    pub display_range: DisplayRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving_average: Option<f64>,
    pub entries_count: usize,
}

// ============================================================================
// Ordering helpers
// ============================================================================

fn latest(history: &[MeasurementEntry]) -> Option<&MeasurementEntry> {
    history.iter().max_by_key(|e| e.date)
}

fn earliest(history: &[MeasurementEntry]) -> Option<&MeasurementEntry> {
    history.iter().min_by_key(|e| e.date)
}

/// Copy of the history ordered oldest first
pub fn sorted_chronologically(history: &[MeasurementEntry]) -> Vec<MeasurementEntry> {
    let mut sorted = history.to_vec();
    sorted.sort_by_key(|e| e.date);
    sorted
}

/// Map a newest-first display index onto the chronological index
///
/// Lists are usually rendered with the latest entry on top, while the
/// mutators address entries oldest first.
pub fn chronological_index(len: usize, display_index: usize) -> Option<usize> {
    if display_index < len {
        Some(len - 1 - display_index)
    } else {
        None
    }
}

/// Recompute every delta of a chronologically sorted slice
///
/// The oldest entry gets 0; each later entry gets its value minus the
/// preceding entry's value.
pub fn recompute_deltas(entries: &mut [MeasurementEntry]) {
    let mut previous: Option<f64> = None;
    for entry in entries.iter_mut() {
        entry.delta = match previous {
            Some(prev) => entry.value - prev,
            None => 0.0,
        };
        previous = Some(entry.value);
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Value of the latest entry, or `fallback` for an empty history
pub fn current_value(history: &[MeasurementEntry], fallback: f64) -> f64 {
    latest(history).map_or(fallback, |e| e.value)
}

/// Value of the earliest entry, or `fallback` for an empty history
pub fn initial_value(history: &[MeasurementEntry], fallback: f64) -> f64 {
    earliest(history).map_or(fallback, |e| e.value)
}

/// `initial - current`, rounded to one decimal (a loss is positive)
pub fn total_change(history: &[MeasurementEntry], fallback: f64) -> f64 {
    round_one_decimal(initial_value(history, fallback) - current_value(history, fallback))
}

/// Total change spread over the weeks between the first and last entry
///
/// Returns 0 with fewer than two entries, or when the span rounds to zero
/// weeks (three days or less).
pub fn average_weekly_change(history: &[MeasurementEntry], fallback: f64) -> f64 {
    if history.len() < 2 {
        return 0.0;
    }
    let (Some(first), Some(last)) = (earliest(history), latest(history)) else {
        return 0.0;
    };

    let days = (last.date - first.date).num_days() as f64;
    let weeks = days / 7.0;
    if round_half_up(weeks) == 0.0 {
        return 0.0;
    }

    round_one_decimal(total_change(history, fallback) / weeks)
}

/// Change since the most recent entry at least a week older than `today`
///
/// Uses the latest entry dated on or before `today - 7 days`; with no such
/// entry the change is 0. Same sign convention as [`total_change`].
pub fn weekly_change(history: &[MeasurementEntry], today: NaiveDate, fallback: f64) -> f64 {
    let cutoff = today - Duration::days(WEEKLY_LOOKBACK_DAYS);
    let week_old = history
        .iter()
        .filter(|e| e.date <= cutoff)
        .max_by_key(|e| e.date);

    match week_old {
        Some(entry) => round_one_decimal(entry.value - current_value(history, fallback)),
        None => 0.0,
    }
}

/// Axis bounds for charting the history
///
/// Starts from a ±5% band around the current value. If the historic minimum
/// is below the band, the low end moves to `min - 0.5` and the high end grows
/// by the same distance; the historic maximum is handled symmetrically. Both
/// checks compare against the original band and both apply when both fire.
pub fn display_range(history: &[MeasurementEntry], fallback: f64) -> DisplayRange {
    let current = current_value(history, fallback);
    let span = current * DISPLAY_BAND_FRACTION;
    let band_low = current - span;
    let band_high = current + span;

    let mut range = DisplayRange {
        min: band_low,
        max: band_high,
    };

    let historic_min = history.iter().map(|e| e.value).reduce(f64::min);
    let historic_max = history.iter().map(|e| e.value).reduce(f64::max);

    if let Some(low) = historic_min.filter(|v| *v < band_low) {
        let widen = band_low - (low - DISPLAY_MARGIN);
        range.min -= widen;
        range.max += widen;
    }

    if let Some(high) = historic_max.filter(|v| *v > band_high) {
        let widen = (high + DISPLAY_MARGIN) - band_high;
        range.max += widen;
        range.min -= widen;
    }

    range
}

/// Mean of the `window` most recent entries
pub fn moving_average(history: &[MeasurementEntry], window: usize) -> Option<f64> {
    if history.is_empty() || window == 0 {
        return None;
    }

    let sorted = sorted_chronologically(history);
    let count = sorted.len().min(window);
    let sum: f64 = sorted.iter().rev().take(count).map(|e| e.value).sum();
    Some(sum / count as f64)
}

/// Per-ISO-week averages, oldest week first, rounded to one decimal
pub fn weekly_averages(history: &[MeasurementEntry]) -> Vec<WeeklyAverage> {
    let mut weeks: BTreeMap<(i32, u32), Vec<f64>> = BTreeMap::new();
    for entry in history {
        let week = entry.date.iso_week();
        weeks
            .entry((week.year(), week.week()))
            .or_default()
            .push(entry.value);
    }

    weeks
        .into_iter()
        .filter_map(|((iso_year, iso_week), values)| {
            let week_start = NaiveDate::from_isoywd_opt(iso_year, iso_week, Weekday::Mon)?;
            let average = values.iter().sum::<f64>() / values.len() as f64;
            Some(WeeklyAverage {
                iso_year,
                iso_week,
                week_start,
                average: round_one_decimal(average),
                entries: values.len(),
            })
        })
        .collect()
}

/// Compute every progress figure in one pass over the inputs
pub fn summarize(
    history: &[MeasurementEntry],
    today: NaiveDate,
    fallback: f64,
    moving_average_window: usize,
) -> ProgressSummary {
    ProgressSummary {
        current_value: current_value(history, fallback),
        initial_value: initial_value(history, fallback),
        total_change: total_change(history, fallback),
        average_weekly_change: average_weekly_change(history, fallback),
        weekly_change: weekly_change(history, today, fallback),
        display_range: display_range(history, fallback),
        moving_average: moving_average(history, moving_average_window),
        entries_count: history.len(),
    }
}

// ============================================================================
// Measurement Log
// ============================================================================

/// Chronologically sorted measurement history with explicit mutators
///
/// `None` means the backing store has not delivered the history yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementLog {
    entries: Option<Vec<MeasurementEntry>>,
}

impl MeasurementLog {
    /// A log whose history is still loading
    pub fn pending() -> Self {
        Self { entries: None }
    }

    /// A ready log; entries are sorted oldest first, deltas are kept as given
    ///
    /// When several entries share a date, the one that comes last in
    /// `entries` is kept.
    pub fn loaded(mut entries: Vec<MeasurementEntry>) -> Self {
        entries.sort_by_key(|e| e.date);

        let mut unique: Vec<MeasurementEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            match unique.last_mut() {
                Some(last) if last.date == entry.date => *last = entry,
                _ => unique.push(entry),
            }
        }

        Self {
            entries: Some(unique),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.entries.is_some()
    }

    /// Entries oldest first; empty while pending
    pub fn entries(&self) -> &[MeasurementEntry] {
        self.entries.as_deref().unwrap_or(&[])
    }

    pub fn into_entries(self) -> Option<Vec<MeasurementEntry>> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Record `value` for `date`
    ///
    /// An existing entry for the date is overwritten in place and its delta
    /// is taken against the entry before it. Otherwise a new entry is
    /// inserted with `delta = value - current value` of the history before
    /// the insert, and the history is re-sorted.
    pub fn add_entry(&mut self, date: NaiveDate, value: f64, fallback: f64) -> Result<(), HistoryError> {
        let entries = self.entries.as_mut().ok_or(HistoryError::NotReady)?;

        if let Some(index) = entries.iter().position(|e| e.date == date) {
            let delta = match index.checked_sub(1) {
                Some(prev) => value - entries[prev].value,
                None => 0.0,
            };
            let entry = &mut entries[index];
            entry.value = value;
            entry.delta = delta;
            return Ok(());
        }

        let delta = value - current_value(entries, fallback);
        entries.push(MeasurementEntry { date, value, delta });
        entries.sort_by_key(|e| e.date);
        Ok(())
    }

    /// Replace the value at a chronological index and recompute all deltas
    pub fn update_entry(&mut self, index: usize, new_value: f64) -> Result<(), HistoryError> {
        let entries = self.entries.as_mut().ok_or(HistoryError::NotReady)?;
        let len = entries.len();
        let entry = entries
            .get_mut(index)
            .ok_or(HistoryError::IndexOutOfRange { index, len })?;

        entry.value = new_value;
        recompute_deltas(entries);
        Ok(())
    }

    /// Remove the entry at a chronological index and recompute all deltas
    pub fn delete_entry(&mut self, index: usize) -> Result<MeasurementEntry, HistoryError> {
        let entries = self.entries.as_mut().ok_or(HistoryError::NotReady)?;
        if index >= entries.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: entries.len(),
            });
        }

        let removed = entries.remove(index);
        recompute_deltas(entries);
        Ok(removed)
    }
}
