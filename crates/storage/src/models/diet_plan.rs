use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DietPlan {
    pub diet_plan_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_calories: i32,
    pub daily_protein_g: i32,
    pub daily_carbs_g: i32,
    pub daily_fat_g: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DietPlanMeal {
    pub meal_id: Uuid,
    pub diet_plan_id: Uuid,
    pub day_of_week: i32,
    pub meal_name: String,
    pub description: String,
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
    pub suggested_time: String,
}
