use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Free-text food and training preferences. List-like fields are stored
/// comma separated, exactly as the user typed them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserPreference {
    pub preference_id: Uuid,
    pub user_id: Uuid,
    pub liked_foods: Option<String>,
    pub disliked_foods: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub allergies: Option<String>,
    pub preferred_workout_types: Option<String>,
    pub workout_frequency_preference: Option<i32>,
    pub workout_time_preference: Option<String>,
    pub fitness_level_self_assessed: Option<String>,
    pub specific_goals_text: Option<String>,
    pub updated_at: NaiveDateTime,
}
