use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use super::meal_plan::{SampleMeal, generate_sample_daily_meals};
use super::nutrition::{
    MacroBudget, adjust_calories_for_goal, calculate_bmr, calculate_macronutrients,
    tdee_for_activity,
};
use super::workout_plan::{TrainingSchedule, WorkoutDayTemplate, generate_sample_workout_plan};
use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, BiometricProfile, Goal};
use crate::repository::plan::{PlanRepository, StoredPlanIds};

/// Training days used when the user has not stated a preference
pub const DEFAULT_WORKOUT_DAYS: i32 = 4;

/// Length of a generated plan, start date inclusive
pub const PLAN_DURATION_DAYS: i64 = 30;

pub const DAYS_IN_WEEK: i32 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietPlanDraft {
    pub budget: MacroBudget,
    pub daily_meals: Vec<SampleMeal>,
}

impl DietPlanDraft {
    /// The daily meals repeated for every day of the week (1 = Monday).
    pub fn weekly_meals(&self) -> impl Iterator<Item = (i32, &SampleMeal)> + '_ {
        (1..=DAYS_IN_WEEK).flat_map(move |day| self.daily_meals.iter().map(move |m| (day, m)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutPlanDraft {
    pub days_per_week: i32,
    pub description: String,
    pub days: Vec<WorkoutDayTemplate>,
}

/// Everything the calculator produces for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPlan {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: i32,
    pub macros: MacroBudget,
    pub diet_plan: DietPlanDraft,
    pub workout_plan: WorkoutPlanDraft,
}

fn workout_description(goal: Goal, activity_level: ActivityLevel) -> String {
    format!(
        "Workout plan to {} at a {} activity level.",
        goal.as_str().replace('_', " "),
        activity_level
    )
}

/// Runs the full calculator pipeline: BMR, TDEE, calorie target, macro split,
/// then the sample diet and workout templates.
pub fn generate_plan<R: Rng + ?Sized>(
    profile: &BiometricProfile,
    days_per_week: i32,
    rng: &mut R,
) -> std::result::Result<GeneratedPlan, PlanError> {
    let bmr = calculate_bmr(
        profile.gender,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
    )?;
    let tdee = tdee_for_activity(bmr, profile.activity_level)?;
    let target = adjust_calories_for_goal(tdee, profile.goal)?;
    let macros = calculate_macronutrients(target, profile.goal)?;

    let daily_meals = generate_sample_daily_meals(macros.target_calories, &macros);

    let schedule = TrainingSchedule::from_requested(days_per_week);
    let days = generate_sample_workout_plan(
        rng,
        profile.activity_level,
        profile.goal,
        days_per_week,
    );

    Ok(GeneratedPlan {
        bmr,
        tdee,
        target_calories: macros.target_calories,
        macros,
        diet_plan: DietPlanDraft {
            budget: macros,
            daily_meals,
        },
        workout_plan: WorkoutPlanDraft {
            days_per_week: schedule.days_per_week() as i32,
            description: workout_description(profile.goal, profile.activity_level),
            days,
        },
    })
}

/// Persists a generated plan as the user's new active diet and workout plan.
/// Prior active plans are superseded in the same transaction.
pub async fn store_plan(
    pool: &PgPool,
    user_id: Uuid,
    plan: &GeneratedPlan,
    start_date: NaiveDate,
) -> Result<StoredPlanIds> {
    let end_date = start_date + chrono::Duration::days(PLAN_DURATION_DAYS);
    let repo = PlanRepository::new(pool);

    let ids = repo
        .replace_active_plans(user_id, plan, start_date, end_date)
        .await?;

    tracing::info!(
        %user_id,
        diet_plan_id = %ids.diet_plan_id,
        workout_plan_id = %ids.workout_plan_id,
        "Stored new active diet and workout plans"
    );

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, ProfileParts};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn profile(goal: &str) -> BiometricProfile {
        BiometricProfile::from_parts(ProfileParts {
            gender: Some("male"),
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            age: Some(25),
            activity_level: Some("moderate"),
            goal: Some(goal),
        })
        .unwrap()
    }

    #[test]
    fn test_pipeline_for_weight_loss() {
        let plan = generate_plan(&profile("lose_weight"), 4, &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(plan.bmr, 1673.75);
        assert!((plan.tdee - 2594.3125).abs() < 1e-9);
        assert_eq!(plan.target_calories, 2094);
        assert_eq!(plan.macros.target_calories, 2094);
        // 2094.3125 * 0.4 / 4, * 0.3 / 4, * 0.3 / 9
        assert_eq!(plan.macros.protein_g, 209);
        assert_eq!(plan.macros.carbs_g, 157);
        assert_eq!(plan.macros.fat_g, 70);
        assert_eq!(plan.diet_plan.budget, plan.macros);
    }

    #[test]
    fn test_pipeline_shapes() {
        let plan = generate_plan(&profile("gain_muscle"), 5, &mut StdRng::seed_from_u64(2)).unwrap();

        assert_eq!(plan.diet_plan.daily_meals.len(), 5);
        assert_eq!(plan.diet_plan.weekly_meals().count(), 35);
        assert_eq!(plan.workout_plan.days_per_week, 5);
        assert_eq!(plan.workout_plan.days.len(), 5);
        assert_eq!(
            plan.workout_plan.description,
            "Workout plan to gain muscle at a moderate activity level."
        );
    }

    #[test]
    fn test_weekly_meals_cover_every_day() {
        let plan = generate_plan(&profile("maintain"), 4, &mut StdRng::seed_from_u64(3)).unwrap();
        let days: Vec<i32> = plan
            .diet_plan
            .weekly_meals()
            .filter(|(_, meal)| meal.meal_name == "Lunch")
            .map(|(day, _)| day)
            .collect();
        assert_eq!(days, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_coerced_day_count_is_reported() {
        let plan = generate_plan(&profile("maintain"), 6, &mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(plan.workout_plan.days_per_week, 4);
    }

    #[test]
    fn test_floor_applies_for_small_profiles() {
        let small = BiometricProfile {
            gender: Gender::Female,
            weight_kg: 40.0,
            height_cm: 140.0,
            age: 80,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::LoseWeight,
        };
        let plan = generate_plan(&small, 4, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(plan.target_calories, 1200);
    }

    #[test]
    fn test_absurd_weight_fails_instead_of_saturating() {
        let huge = BiometricProfile {
            weight_kg: 1e12,
            ..profile("maintain")
        };
        let err = generate_plan(&huge, 4, &mut StdRng::seed_from_u64(6)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput(_)));
    }

    #[test]
    fn test_numeric_outputs_are_deterministic() {
        let a = generate_plan(&profile("maintain"), 4, &mut StdRng::seed_from_u64(10)).unwrap();
        let b = generate_plan(&profile("maintain"), 4, &mut StdRng::seed_from_u64(20)).unwrap();
        assert_eq!(a.bmr, b.bmr);
        assert_eq!(a.tdee, b.tdee);
        assert_eq!(a.macros, b.macros);
        assert_eq!(a.diet_plan, b.diet_plan);
    }
}
