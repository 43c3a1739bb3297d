use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutPlan {
    pub workout_plan_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_per_week: i32,
    pub description: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutPlanDay {
    pub day_id: Uuid,
    pub workout_plan_id: Uuid,
    pub day_of_week: i32,
    pub focus: String,
}

/// Exercise row; `position` keeps the template order within a day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutExercise {
    pub exercise_id: Uuid,
    pub day_id: Uuid,
    pub position: i32,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: String,
}
