//! Daily calorie and macro target calculation
//!
//! Calories come from the Mifflin-St Jeor BMR scaled by an activity
//! multiplier, then shifted by a flat goal adjustment. Macros are split per
//! goal.
//!
//! # Macro split
//!
//! | goal          | protein  | fat                       | carbs                     |
//! |---------------|----------|---------------------------|---------------------------|
//! | fat loss      | 2.2 g/kg | 25% of kcal               | remainder                 |
//! | muscle gain   | 2.0 g/kg | remainder                 | 45% of kcal               |
//! | recomposition | 2.4 g/kg | 28% of kcal               | remainder                 |
//! | maintenance   | 1.6 g/kg | 30% of kcal               | 40% of kcal               |
//!
//! Muscle gain fixes carbs and derives fat; the other remainder goals fix
//! fat and derive carbs. Maintenance uses fixed percentages with no
//! remainder, so its split does not have to add up to the calorie target.
//!
//! Every value is rounded half-up on its own, and remainders are computed
//! from the already rounded grams.

use crate::profile::{DailyTargets, FitnessGoal, Gender, MacroTargets, UserProfile};
use crate::rounding::round_to_i32;
use serde::{Deserialize, Serialize};

const KCAL_PER_GRAM_PROTEIN: i32 = 4;
const KCAL_PER_GRAM_CARBS: i32 = 4;
const KCAL_PER_GRAM_FAT: i32 = 9;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.current_weight_kg + 6.25 * profile.height_cm
        - 5.0 * profile.age as f64;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × activity multiplier
pub fn calculate_tdee(profile: &UserProfile) -> f64 {
    calculate_bmr(profile) * profile.activity_level.multiplier()
}

/// Daily calorie target: TDEE plus the goal adjustment, rounded half-up
pub fn calculate_daily_calories(profile: &UserProfile) -> i32 {
    round_to_i32(calculate_tdee(profile) + profile.goal.calorie_adjustment())
}

/// Split a calorie total into protein, carbs and fat grams for a goal
pub fn calculate_macros(total_calories: i32, goal: FitnessGoal, weight_kg: f64) -> MacroTargets {
    let calories = total_calories as f64;

    match goal {
        FitnessGoal::FatLoss => fixed_fat_split(total_calories, weight_kg * 2.2, 0.25),
        FitnessGoal::Recomposition => fixed_fat_split(total_calories, weight_kg * 2.4, 0.28),
        FitnessGoal::MuscleGain => {
            let protein_grams = round_to_i32(weight_kg * 2.0);
            let carbs_grams = round_to_i32(calories * 0.45 / 4.0);
            let remaining = total_calories
                - protein_grams * KCAL_PER_GRAM_PROTEIN
                - carbs_grams * KCAL_PER_GRAM_CARBS;
            MacroTargets {
                protein_grams,
                carbs_grams,
                fat_grams: round_to_i32(remaining as f64 / KCAL_PER_GRAM_FAT as f64),
            }
        }
        FitnessGoal::Maintenance => MacroTargets {
            protein_grams: round_to_i32(weight_kg * 1.6),
            carbs_grams: round_to_i32(calories * 0.40 / 4.0),
            fat_grams: round_to_i32(calories * 0.30 / 9.0),
        },
    }
}

/// Protein by body weight, fat as a share of calories, carbs fill the rest
fn fixed_fat_split(total_calories: i32, protein_raw: f64, fat_share: f64) -> MacroTargets {
    let protein_grams = round_to_i32(protein_raw);
    let fat_grams = round_to_i32(total_calories as f64 * fat_share / 9.0);
    let remaining =
        total_calories - protein_grams * KCAL_PER_GRAM_PROTEIN - fat_grams * KCAL_PER_GRAM_FAT;
    MacroTargets {
        protein_grams,
        carbs_grams: round_to_i32(remaining as f64 / KCAL_PER_GRAM_CARBS as f64),
        fat_grams,
    }
}

/// Calories and macros for a profile
pub fn calculate_daily_targets(profile: &UserProfile) -> DailyTargets {
    let calories = calculate_daily_calories(profile);
    let macros = calculate_macros(calories, profile.goal, profile.current_weight_kg);
    DailyTargets::new(calories, macros)
}

/// Target calculation with its intermediate values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetBreakdown {
    /// Basal Metabolic Rate
    pub bmr: f64,
    /// Total Daily Energy Expenditure
    pub tdee: f64,
    /// Activity multiplier used
    pub activity_multiplier: f64,
    /// Flat kcal adjustment for the goal
    pub goal_adjustment: f64,
    pub targets: DailyTargets,
}

/// Calculate targets together with BMR/TDEE for display
pub fn calculate_target_breakdown(profile: &UserProfile) -> TargetBreakdown {
    TargetBreakdown {
        bmr: calculate_bmr(profile),
        tdee: calculate_tdee(profile),
        activity_multiplier: profile.activity_level.multiplier(),
        goal_adjustment: profile.goal.calorie_adjustment(),
        targets: calculate_daily_targets(profile),
    }
}
