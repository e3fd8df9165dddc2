//! User profile and daily target types
//!
//! Enum values arrive as free-form strings from stored profiles and form
//! inputs. Activity level and goal are parsed leniently: anything
//! unrecognized resolves to the documented default instead of failing, so a
//! stale or hand-edited profile still renders a dashboard. Gender has no
//! default and is rejected when unknown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

// ============================================================================
// Gender
// ============================================================================

/// Gender used to select the BMR constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Very,
    /// Very hard exercise, physical job
    Extra,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Very,
        ActivityLevel::Extra,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Very => 1.725,
            ActivityLevel::Extra => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Very => "Hard exercise 6-7 days/week",
            ActivityLevel::Extra => "Very hard exercise or physical job",
        }
    }

    /// Parse a stored value, falling back to [`ActivityLevel::Moderate`]
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" | "lightly_active" => ActivityLevel::Light,
            "moderate" | "moderately_active" => ActivityLevel::Moderate,
            "very" | "very_active" => ActivityLevel::Very,
            "extra" | "extra_active" => ActivityLevel::Extra,
            _ => ActivityLevel::default(),
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        ActivityLevel::parse_lenient(&value)
    }
}

impl From<&str> for ActivityLevel {
    fn from(value: &str) -> Self {
        ActivityLevel::parse_lenient(value)
    }
}

// ============================================================================
// Fitness Goal
// ============================================================================

/// Stated goal, selects the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FitnessGoal {
    FatLoss,
    MuscleGain,
    Recomposition,
    #[default]
    Maintenance,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 4] = [
        FitnessGoal::FatLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Recomposition,
        FitnessGoal::Maintenance,
    ];

    /// Flat kcal adjustment applied to TDEE
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            FitnessGoal::FatLoss => -500.0,
            FitnessGoal::MuscleGain => 300.0,
            FitnessGoal::Recomposition => -200.0,
            FitnessGoal::Maintenance => 0.0,
        }
    }

    /// Parse a stored value, falling back to [`FitnessGoal::Maintenance`]
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fat_loss" | "fatloss" | "lose" | "weight_loss" => FitnessGoal::FatLoss,
            "muscle_gain" | "musclegain" | "gain" | "bulk" => FitnessGoal::MuscleGain,
            "recomposition" | "recomp" => FitnessGoal::Recomposition,
            _ => FitnessGoal::default(),
        }
    }
}

impl From<String> for FitnessGoal {
    fn from(value: String) -> Self {
        FitnessGoal::parse_lenient(&value)
    }
}

impl From<&str> for FitnessGoal {
    fn from(value: &str) -> Self {
        FitnessGoal::parse_lenient(value)
    }
}

// ============================================================================
// Profile and Targets
// ============================================================================

/// Body metrics, activity level and goal for one user
///
/// Range attributes are checked by [`crate::validation::validate_profile`];
/// the calculators accept any value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    pub gender: Gender,
    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150 years"))]
    pub age: u32,
    #[validate(range(min = 50.0, max = 300.0, message = "Height must be between 50 and 300 cm"))]
    pub height_cm: f64,
    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub current_weight_kg: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: FitnessGoal,
}

/// Protein/carbs/fat split in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_grams: i32,
    pub carbs_grams: i32,
    pub fat_grams: i32,
}

impl MacroTargets {
    /// Energy the split accounts for (4/4/9 kcal per gram)
    pub fn energy_kcal(&self) -> i32 {
        self.protein_grams * 4 + self.carbs_grams * 4 + self.fat_grams * 9
    }
}

/// Daily calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTargets {
    pub calories: i32,
    pub protein_grams: i32,
    pub carbs_grams: i32,
    pub fat_grams: i32,
}

impl DailyTargets {
    pub fn new(calories: i32, macros: MacroTargets) -> Self {
        Self {
            calories,
            protein_grams: macros.protein_grams,
            carbs_grams: macros.carbs_grams,
            fat_grams: macros.fat_grams,
        }
    }

    pub fn macros(&self) -> MacroTargets {
        MacroTargets {
            protein_grams: self.protein_grams,
            carbs_grams: self.carbs_grams,
            fat_grams: self.fat_grams,
        }
    }
}
