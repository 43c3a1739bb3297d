use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{current_diet_plan, current_workout_plan, generate_plans, preview_plan};

/// Calculator routes that need no stored user
pub fn routes() -> Router<Database> {
    Router::new().route("/plans/preview", post(preview_plan))
}

/// Routes mounted under `/users/:user_id`
pub fn user_routes() -> Router<Database> {
    Router::new()
        .route("/plans/generate", post(generate_plans))
        .route("/plans/diet/current", get(current_diet_plan))
        .route("/plans/workout/current", get(current_workout_plan))
}
