pub mod meal_plan;
pub mod nutrition;
pub mod plan_generation;
pub mod suggestions;
pub mod workout_plan;
