use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{food_suggestions, get_preferences, upsert_preferences, workout_suggestions};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/preferences", get(get_preferences).put(upsert_preferences))
        .route("/preferences/suggestions/food", get(food_suggestions))
        .route("/preferences/suggestions/workout", get(workout_suggestions))
}
