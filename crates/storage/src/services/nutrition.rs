//! Energy budget arithmetic: BMR (Mifflin-St Jeor), TDEE, goal adjustment and
//! the protein/carbohydrate/fat split.
//!
//! BMR = 10 × weight_kg + 6.25 × height_cm − 5 × age + s, where s = +5 for men
//! and −161 for women. Values are not rounded until the macro split.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::PlanError;
use crate::models::{ActivityLevel, Gender, Goal};

/// Hard floor for any goal-adjusted calorie target
pub const MIN_DAILY_CALORIES: f64 = 1200.0;

const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
const CARBS_KCAL_PER_GRAM: f64 = 4.0;
const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Daily calorie target with its gram split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MacroBudget {
    pub target_calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
}

/// Share of total calories per macronutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroSplit {
    pub fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::LoseWeight => Self {
                protein: 0.40,
                carbs: 0.30,
                fat: 0.30,
            },
            Goal::GainMuscle => Self {
                protein: 0.30,
                carbs: 0.50,
                fat: 0.20,
            },
            Goal::Maintain => Self {
                protein: 0.30,
                carbs: 0.40,
                fat: 0.30,
            },
        }
    }
}

/// Round half to even, matching how the stored plans were always rounded.
pub(crate) fn round_to_i32(value: f64) -> i32 {
    value.round_ties_even() as i32
}

pub fn calculate_bmr(
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age: u32,
) -> Result<f64, PlanError> {
    if !(weight_kg > 0.0 && weight_kg.is_finite()) {
        return Err(PlanError::invalid(
            "Weight must be positive for BMR calculation",
        ));
    }
    if !(height_cm > 0.0 && height_cm.is_finite()) {
        return Err(PlanError::invalid(
            "Height must be positive for BMR calculation",
        ));
    }
    if age == 0 {
        return Err(PlanError::invalid("Age must be positive for BMR calculation"));
    }

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let bmr = match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };

    Ok(bmr)
}

pub fn calculate_tdee(bmr: f64, activity_multiplier: f64) -> Result<f64, PlanError> {
    if !(bmr > 0.0) || !(activity_multiplier > 0.0) {
        return Err(PlanError::invalid(
            "BMR and activity multiplier must be positive for TDEE calculation",
        ));
    }

    Ok(bmr * activity_multiplier)
}

/// TDEE for a given activity level
pub fn tdee_for_activity(bmr: f64, activity_level: ActivityLevel) -> Result<f64, PlanError> {
    calculate_tdee(bmr, activity_level.multiplier())
}

/// Applies the goal's calorie offset, never returning less than
/// [`MIN_DAILY_CALORIES`].
pub fn adjust_calories_for_goal(tdee: f64, goal: Goal) -> Result<f64, PlanError> {
    if !(tdee > 0.0) {
        return Err(PlanError::invalid("TDEE must be positive for goal adjustment"));
    }

    let adjustment = match goal {
        Goal::LoseWeight => -500.0,
        Goal::Maintain => 0.0,
        Goal::GainMuscle => 300.0,
    };

    Ok((tdee + adjustment).max(MIN_DAILY_CALORIES))
}

/// Splits `total_calories` into grams. Each macro is rounded on its own, so the
/// gram-derived calories may drift a few kcal from the target.
pub fn calculate_macronutrients(total_calories: f64, goal: Goal) -> Result<MacroBudget, PlanError> {
    if !(total_calories > 0.0 && total_calories.is_finite()) {
        return Err(PlanError::invalid(
            "Total calories must be positive for macronutrient calculation",
        ));
    }
    if total_calories.round_ties_even() > f64::from(i32::MAX) {
        return Err(PlanError::invalid(
            "Total calories are too large for a daily budget",
        ));
    }

    let split = MacroSplit::for_goal(goal);

    Ok(MacroBudget {
        target_calories: round_to_i32(total_calories),
        protein_g: round_to_i32(total_calories * split.protein / PROTEIN_KCAL_PER_GRAM),
        carbs_g: round_to_i32(total_calories * split.carbs / CARBS_KCAL_PER_GRAM),
        fat_g: round_to_i32(total_calories * split.fat / FAT_KCAL_PER_GRAM),
    })
}
