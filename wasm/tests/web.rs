//! Browser tests for the exported bindings
//!
//! Run with `wasm-pack test --headless --firefox wasm`.

#![cfg(target_arch = "wasm32")]

use fittrack_wasm::{
    bmi, daily_calories, daily_targets_json, daily_water_ml, display_range_json,
    progress_summary_json,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const HISTORY: &str = r#"[
    {"date": "2024-01-01", "value": 76.0},
    {"date": "2024-01-08", "value": 75.0},
    {"date": "2024-01-15", "value": 74.0}
]"#;

#[wasm_bindgen_test]
fn daily_calories_matches_native() {
    assert_eq!(daily_calories("female", 28, 165.0, 75.2, "moderate", "fat_loss"), 1797);
    assert_eq!(daily_calories("unknown", 28, 165.0, 75.2, "moderate", "fat_loss"), -1);
}

#[wasm_bindgen_test]
fn daily_targets_json_returns_breakdown() {
    let json = daily_targets_json("male", 30, 180.0, 80.0, "sedentary", "maintenance").unwrap();
    assert!(json.contains("\"bmr\""));
    assert!(json.contains("\"targets\""));
}

#[wasm_bindgen_test]
fn invalid_input_becomes_js_error() {
    let err = daily_targets_json("unknown", 30, 180.0, 80.0, "sedentary", "maintenance")
        .unwrap_err();
    assert!(err.as_string().unwrap().contains("Unknown gender"));

    let err = display_range_json("not json", 80.0).unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Invalid history"));
}

#[wasm_bindgen_test]
fn progress_summary_json_over_history() {
    let json = progress_summary_json(HISTORY, "2024-01-15", 80.0, 7).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_change"], 2.0);
    assert_eq!(value["weekly_change"], 1.0);
    assert!(progress_summary_json(HISTORY, "yesterday", 80.0, 7).is_err());
}

#[wasm_bindgen_test]
fn scalar_exports() {
    assert_eq!(bmi(70.0, 0.0), 0.0);
    assert_eq!(daily_water_ml(70.0, "sedentary"), 2100);
}
