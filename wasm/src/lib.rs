//! FitTrack WASM Module
//!
//! WebAssembly bindings over `fittrack-shared` so the browser front-end
//! computes targets and progress with the same rules as the tracker.
//!
//! Enum arguments are parsed leniently, like stored profiles. Structured
//! results cross the boundary as JSON strings.

use chrono::NaiveDate;
use fittrack_shared::goals::{calculate_daily_calories, calculate_target_breakdown};
use fittrack_shared::health_metrics::{calculate_bmi, calculate_daily_water_ml};
use fittrack_shared::progress::{display_range, summarize};
use fittrack_shared::{ActivityLevel, FitnessGoal, Gender, MeasurementEntry, UserProfile};
use wasm_bindgen::prelude::*;

fn build_profile(
    gender: &str,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: &str,
    goal: &str,
) -> Result<UserProfile, String> {
    Ok(UserProfile {
        gender: gender.parse::<Gender>()?,
        age,
        height_cm,
        current_weight_kg: weight_kg,
        activity_level: ActivityLevel::parse_lenient(activity_level),
        goal: FitnessGoal::parse_lenient(goal),
    })
}

fn parse_history(history_json: &str) -> Result<Vec<MeasurementEntry>, String> {
    serde_json::from_str(history_json).map_err(|e| format!("Invalid history: {}", e))
}

fn daily_targets(
    gender: &str,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: &str,
    goal: &str,
) -> Result<String, String> {
    let profile = build_profile(gender, age, height_cm, weight_kg, activity_level, goal)?;
    serde_json::to_string(&calculate_target_breakdown(&profile)).map_err(|e| e.to_string())
}

fn range_for(history_json: &str, fallback: f64) -> Result<String, String> {
    let history = parse_history(history_json)?;
    serde_json::to_string(&display_range(&history, fallback)).map_err(|e| e.to_string())
}

fn summary_for(
    history_json: &str,
    today: &str,
    fallback: f64,
    moving_average_window: usize,
) -> Result<String, String> {
    let history = parse_history(history_json)?;
    let today = today
        .parse::<NaiveDate>()
        .map_err(|e| format!("Invalid date {}: {}", today, e))?;
    let summary = summarize(&history, today, fallback, moving_average_window);
    serde_json::to_string(&summary).map_err(|e| e.to_string())
}

/// Daily calorie target, or -1 for an unknown gender
#[wasm_bindgen]
pub fn daily_calories(
    gender: &str,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: &str,
    goal: &str,
) -> i32 {
    build_profile(gender, age, height_cm, weight_kg, activity_level, goal)
        .map(|profile| calculate_daily_calories(&profile))
        .unwrap_or(-1)
}

/// Calories, macros, BMR and TDEE as JSON
#[wasm_bindgen]
pub fn daily_targets_json(
    gender: &str,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: &str,
    goal: &str,
) -> Result<String, JsValue> {
    daily_targets(gender, age, height_cm, weight_kg, activity_level, goal)
        .map_err(|e| JsValue::from_str(&e))
}

/// Chart bounds for a JSON array of measurement entries
#[wasm_bindgen]
pub fn display_range_json(history_json: &str, fallback: f64) -> Result<String, JsValue> {
    range_for(history_json, fallback).map_err(|e| JsValue::from_str(&e))
}

/// Progress statistics for a JSON array of entries; `today` is `YYYY-MM-DD`
#[wasm_bindgen]
pub fn progress_summary_json(
    history_json: &str,
    today: &str,
    fallback: f64,
    moving_average_window: usize,
) -> Result<String, JsValue> {
    summary_for(history_json, today, fallback, moving_average_window)
        .map_err(|e| JsValue::from_str(&e))
}

/// BMI from weight (kg) and height (cm), 0 for a non-positive height
#[wasm_bindgen]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    calculate_bmi(weight_kg, height_cm)
}

/// Recommended daily water intake in ml
#[wasm_bindgen]
pub fn daily_water_ml(weight_kg: f64, activity_level: &str) -> i32 {
    calculate_daily_water_ml(weight_kg, ActivityLevel::parse_lenient(activity_level))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY: &str = r#"[
        {"date": "2024-01-15", "value": 74.0},
        {"date": "2024-01-01", "value": 76.0},
        {"date": "2024-01-08", "value": 75.0}
    ]"#;

    #[test]
    fn test_daily_calories() {
        assert_eq!(daily_calories("female", 28, 165.0, 75.2, "moderate", "fat_loss"), 1797);
        // Unknown activity/goal fall back to moderate/maintenance
        assert_eq!(daily_calories("female", 28, 165.0, 75.2, "???", ""), 2297);
        assert_eq!(daily_calories("robot", 28, 165.0, 75.2, "moderate", "fat_loss"), -1);
    }

    #[test]
    fn test_daily_targets() {
        let json = daily_targets("female", 28, 165.0, 75.2, "moderately-active", "fat-loss").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["targets"]["calories"], 1797);
        assert_eq!(value["targets"]["protein_grams"], 165);
        assert_eq!(value["targets"]["carbs_grams"], 172);
        assert_eq!(value["targets"]["fat_grams"], 50);
        assert!(daily_targets("x", 28, 165.0, 75.2, "moderate", "fat_loss").is_err());
    }

    #[test]
    fn test_range_for_empty_history() {
        let json = range_for("[]", 80.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!((value["min"].as_f64().unwrap() - 76.0).abs() < 1e-9);
        assert!((value["max"].as_f64().unwrap() - 84.0).abs() < 1e-9);
        assert!(range_for("not json", 80.0).is_err());
    }

    #[test]
    fn test_summary_for() {
        let json = summary_for(HISTORY, "2024-01-15", 80.0, 2).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["current_value"], 74.0);
        assert_eq!(value["total_change"], 2.0);
        assert_eq!(value["average_weekly_change"], 1.0);
        assert_eq!(value["weekly_change"], 1.0);
        assert_eq!(value["moving_average"], 74.5);
        assert!(summary_for(HISTORY, "15/01/2024", 80.0, 2).is_err());
    }

    #[test]
    fn test_bmi() {
        assert!((bmi(70.0, 175.0) - 22.86).abs() < 0.01);
        assert_eq!(bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_daily_water() {
        assert_eq!(daily_water_ml(70.0, "sedentary"), 2100);
        assert_eq!(daily_water_ml(70.0, "extra_active"), 2940);
    }
}
