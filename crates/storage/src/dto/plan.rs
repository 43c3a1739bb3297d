use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{DietPlan, DietPlanMeal, ProfileParts};
use crate::repository::plan::{StoredPlanIds, WorkoutPlanWithDays};
use crate::services::nutrition::MacroBudget;

/// Ad-hoc calculator input. Fields are optional so incomplete submissions are
/// reported as missing rather than rejected by the JSON decoder.
///
/// Numeric ranges match [`UpsertProfileRequest`](super::profile::UpsertProfileRequest).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PreviewPlanRequest {
    pub gender: Option<String>,

    #[validate(range(
        exclusive_min = 0.0,
        max = 500.0,
        message = "Weight must be greater than 0 and at most 500 kg"
    ))]
    pub weight_kg: Option<f64>,

    #[validate(range(
        exclusive_min = 0.0,
        max = 300.0,
        message = "Height must be greater than 0 and at most 300 cm"
    ))]
    pub height_cm: Option<f64>,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: Option<i32>,

    pub activity_level: Option<String>,
    pub goal: Option<String>,

    /// 4 or 5; anything else falls back to 4
    pub days_per_week: Option<i32>,
}

impl PreviewPlanRequest {
    pub fn parts(&self) -> ProfileParts<'_> {
        ProfileParts {
            gender: self.gender.as_deref(),
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age: self.age,
            activity_level: self.activity_level.as_deref(),
            goal: self.goal.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratePlanResponse {
    pub message: String,
    pub diet_plan_id: Uuid,
    pub workout_plan_id: Uuid,
    /// Rounded to two decimals
    pub tdee: f64,
    pub target_calories: i32,
    pub macronutrients: MacroBudget,
}

impl GeneratePlanResponse {
    pub fn new(ids: StoredPlanIds, tdee: f64, macros: MacroBudget) -> Self {
        Self {
            message: "Diet and workout plans generated successfully".to_string(),
            diet_plan_id: ids.diet_plan_id,
            workout_plan_id: ids.workout_plan_id,
            tdee: (tdee * 100.0).round() / 100.0,
            target_calories: macros.target_calories,
            macronutrients: macros,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MealResponse {
    pub meal_name: String,
    pub description: String,
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
    pub suggested_time: String,
}

impl From<DietPlanMeal> for MealResponse {
    fn from(meal: DietPlanMeal) -> Self {
        Self {
            meal_name: meal.meal_name,
            description: meal.description,
            calories: meal.calories,
            protein_g: meal.protein_g,
            carbs_g: meal.carbs_g,
            fat_g: meal.fat_g,
            suggested_time: meal.suggested_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DietPlanResponse {
    pub diet_plan_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_calories: i32,
    pub daily_protein_g: i32,
    pub daily_carbs_g: i32,
    pub daily_fat_g: i32,
    pub created_at: NaiveDateTime,
    /// Meals keyed by ISO weekday (1 = Monday)
    pub meals_by_day: BTreeMap<i32, Vec<MealResponse>>,
}

impl DietPlanResponse {
    pub fn new(plan: DietPlan, meals: Vec<DietPlanMeal>) -> Self {
        let mut meals_by_day: BTreeMap<i32, Vec<MealResponse>> = BTreeMap::new();
        for meal in meals {
            meals_by_day
                .entry(meal.day_of_week)
                .or_default()
                .push(meal.into());
        }

        Self {
            diet_plan_id: plan.diet_plan_id,
            start_date: plan.start_date,
            end_date: plan.end_date,
            daily_calories: plan.daily_calories,
            daily_protein_g: plan.daily_protein_g,
            daily_carbs_g: plan.daily_carbs_g,
            daily_fat_g: plan.daily_fat_g,
            created_at: plan.created_at,
            meals_by_day,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutDayResponse {
    pub day_of_week: i32,
    pub focus: String,
    pub exercises: Vec<ExerciseResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutPlanResponse {
    pub workout_plan_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_per_week: i32,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub plan_days: Vec<WorkoutDayResponse>,
}

impl From<WorkoutPlanWithDays> for WorkoutPlanResponse {
    fn from(stored: WorkoutPlanWithDays) -> Self {
        let plan_days = stored
            .days
            .into_iter()
            .map(|(day, exercises)| WorkoutDayResponse {
                day_of_week: day.day_of_week,
                focus: day.focus,
                exercises: exercises
                    .into_iter()
                    .map(|e| ExerciseResponse {
                        exercise_name: e.exercise_name,
                        sets: e.sets,
                        reps: e.reps,
                    })
                    .collect(),
            })
            .collect();

        Self {
            workout_plan_id: stored.plan.workout_plan_id,
            start_date: stored.plan.start_date,
            end_date: stored.plan.end_date,
            days_per_week: stored.plan.days_per_week,
            description: stored.plan.description,
            created_at: stored.plan.created_at,
            plan_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diet_plan() -> DietPlan {
        DietPlan {
            diet_plan_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
            daily_calories: 2000,
            daily_protein_g: 150,
            daily_carbs_g: 200,
            daily_fat_g: 67,
            is_active: true,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    fn meal(diet_plan_id: Uuid, day_of_week: i32, meal_name: &str) -> DietPlanMeal {
        DietPlanMeal {
            meal_id: Uuid::new_v4(),
            diet_plan_id,
            day_of_week,
            meal_name: meal_name.to_string(),
            description: String::new(),
            calories: 500,
            protein_g: 38,
            carbs_g: 50,
            fat_g: 17,
            suggested_time: "08:00".to_string(),
        }
    }

    #[test]
    fn test_meals_are_grouped_by_day() {
        let plan = diet_plan();
        let id = plan.diet_plan_id;
        let meals = vec![
            meal(id, 1, "Breakfast"),
            meal(id, 1, "Lunch"),
            meal(id, 3, "Breakfast"),
        ];

        let response = DietPlanResponse::new(plan, meals);
        assert_eq!(response.meals_by_day.len(), 2);
        assert_eq!(response.meals_by_day[&1].len(), 2);
        assert_eq!(response.meals_by_day[&1][1].meal_name, "Lunch");
        assert_eq!(response.meals_by_day[&3].len(), 1);
    }

    #[test]
    fn test_generate_response_rounds_tdee() {
        let ids = StoredPlanIds {
            diet_plan_id: Uuid::new_v4(),
            workout_plan_id: Uuid::new_v4(),
        };
        let macros = MacroBudget {
            target_calories: 2094,
            protein_g: 209,
            carbs_g: 157,
            fat_g: 70,
        };

        let response = GeneratePlanResponse::new(ids, 2594.3125, macros);
        assert_eq!(response.tdee, 2594.31);
        assert_eq!(response.target_calories, 2094);
        assert_eq!(response.macronutrients, macros);
    }

    #[test]
    fn test_preview_request_ranges() {
        let request = PreviewPlanRequest {
            weight_kg: Some(1e12),
            height_cm: Some(0.0),
            age: Some(121),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("weight_kg"));
        assert!(fields.contains_key("height_cm"));
        assert!(fields.contains_key("age"));

        let partial = PreviewPlanRequest {
            weight_kg: Some(70.0),
            days_per_week: Some(9),
            ..Default::default()
        };
        assert!(partial.validate().is_ok());
    }

    #[test]
    fn test_preview_request_exposes_parts() {
        let request: PreviewPlanRequest =
            serde_json::from_str(r#"{"gender": "male", "age": 25}"#).unwrap();
        let parts = request.parts();
        assert_eq!(parts.gender, Some("male"));
        assert_eq!(parts.age, Some(25));
        assert!(parts.goal.is_none());
    }
}
