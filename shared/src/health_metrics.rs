//! Body-mass index and hydration targets
//!
//! Secondary dashboard figures derived from the same profile that drives
//! the calorie targets.

use crate::profile::{ActivityLevel, UserProfile};
use crate::rounding::round_to_i32;
use serde::{Deserialize, Serialize};

/// Base water intake per kilogram of body weight
const WATER_ML_PER_KG: f64 = 30.0;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
    /// Healthy weight range in kg for this height (BMI 18.5-25)
    pub healthy_weight_range_kg: (f64, f64),
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate healthy weight range for a given height
pub fn healthy_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    (18.5 * height_m_sq, 25.0 * height_m_sq)
}

/// BMI, category and healthy range for a profile
pub fn bmi_for_profile(profile: &UserProfile) -> BmiResult {
    let value = calculate_bmi(profile.current_weight_kg, profile.height_cm);
    BmiResult {
        value,
        category: classify_bmi(value),
        healthy_weight_range_kg: healthy_weight_range_kg(profile.height_cm),
    }
}

/// Recommended daily water intake in ml
///
/// 30 ml per kg of body weight, scaled up with activity.
pub fn calculate_daily_water_ml(weight_kg: f64, activity_level: ActivityLevel) -> i32 {
    let base_ml = weight_kg * WATER_ML_PER_KG;
    let factor = match activity_level {
        ActivityLevel::Sedentary => 1.0,
        ActivityLevel::Light => 1.1,
        ActivityLevel::Moderate => 1.2,
        ActivityLevel::Very => 1.3,
        ActivityLevel::Extra => 1.4,
    };
    round_to_i32(base_ml * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 175cm -> BMI ~22.86
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.01);
        assert_eq!(classify_bmi(bmi), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(classify_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(27.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_healthy_weight_range() {
        // For 175cm, healthy range should be ~56.7-76.6 kg
        let (min, max) = healthy_weight_range_kg(175.0);
        assert!((min - 56.7).abs() < 0.1);
        assert!((max - 76.6).abs() < 0.1);
    }

    #[test]
    fn test_hydration_calculation() {
        assert_eq!(calculate_daily_water_ml(70.0, ActivityLevel::Sedentary), 2100);
        assert_eq!(calculate_daily_water_ml(70.0, ActivityLevel::Very), 2730);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: more active = more water needed
        #[test]
        fn prop_activity_increases_water(weight in 40.0f64..150.0) {
            let amounts: Vec<i32> = ActivityLevel::ALL
                .iter()
                .map(|level| calculate_daily_water_ml(weight, *level))
                .collect();
            prop_assert!(amounts.windows(2).all(|w| w[0] < w[1]));
        }

        /// Property: midpoint of the healthy range is a normal BMI
        #[test]
        fn prop_healthy_range_midpoint_is_normal(height in 140.0f64..210.0) {
            let (min, max) = healthy_weight_range_kg(height);
            let bmi = calculate_bmi((min + max) / 2.0, height);
            prop_assert_eq!(classify_bmi(bmi), BmiCategory::Normal);
        }
    }
}
