//! Meal intake totals compared against daily targets

use crate::profile::DailyTargets;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged meal or snack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub date: NaiveDate,
    pub name: String,
    pub calories: f64,
    #[serde(default)]
    pub protein_grams: f64,
    #[serde(default)]
    pub carbs_grams: f64,
    #[serde(default)]
    pub fat_grams: f64,
}

/// Summed intake for a single day
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyIntake {
    pub calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
    pub meals: usize,
}

/// Consumed vs. target for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientProgress {
    pub consumed: f64,
    pub target: f64,
    /// Negative once the target is exceeded
    pub remaining: f64,
    /// Share of the target consumed, 0 when the target is not positive
    pub percent: f64,
}

impl NutrientProgress {
    fn new(consumed: f64, target: i32) -> Self {
        let target = target as f64;
        let percent = if target > 0.0 {
            consumed / target * 100.0
        } else {
            0.0
        };
        Self {
            consumed,
            target,
            remaining: target - consumed,
            percent,
        }
    }
}

/// Intake for a day measured against the daily targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntakeProgress {
    pub calories: NutrientProgress,
    pub protein: NutrientProgress,
    pub carbs: NutrientProgress,
    pub fat: NutrientProgress,
}

/// Sum every meal logged on `date`
pub fn aggregate_intake(meals: &[MealEntry], date: NaiveDate) -> DailyIntake {
    meals
        .iter()
        .filter(|m| m.date == date)
        .fold(DailyIntake::default(), |acc, meal| DailyIntake {
            calories: acc.calories + meal.calories,
            protein_grams: acc.protein_grams + meal.protein_grams,
            carbs_grams: acc.carbs_grams + meal.carbs_grams,
            fat_grams: acc.fat_grams + meal.fat_grams,
            meals: acc.meals + 1,
        })
}

/// Compare a day's intake with the targets
pub fn intake_progress(intake: &DailyIntake, targets: &DailyTargets) -> IntakeProgress {
    IntakeProgress {
        calories: NutrientProgress::new(intake.calories, targets.calories),
        protein: NutrientProgress::new(intake.protein_grams, targets.protein_grams),
        carbs: NutrientProgress::new(intake.carbs_grams, targets.carbs_grams),
        fat: NutrientProgress::new(intake.fat_grams, targets.fat_grams),
    }
}
