use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::UserPreference;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PreferencesResponse {
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
    /// `None` until the user saves preferences for the first time
    pub updated_at: Option<NaiveDateTime>,
}

impl PreferencesResponse {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }
}

impl From<UserPreference> for PreferencesResponse {
    fn from(p: UserPreference) -> Self {
        Self {
            user_id: p.user_id,
            liked_foods: p.liked_foods,
            disliked_foods: p.disliked_foods,
            dietary_restrictions: p.dietary_restrictions,
            allergies: p.allergies,
            preferred_workout_types: p.preferred_workout_types,
            workout_frequency_preference: p.workout_frequency_preference,
            workout_time_preference: p.workout_time_preference,
            fitness_level_self_assessed: p.fitness_level_self_assessed,
            specific_goals_text: p.specific_goals_text,
            updated_at: Some(p.updated_at),
        }
    }
}

/// Partial preferences update. List-like fields are comma separated free text.
/// Absent fields keep their stored value; an explicit `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertPreferencesRequest {
    #[validate(length(max = 1000))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub liked_foods: Option<Option<String>>,

    #[validate(length(max = 1000))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub disliked_foods: Option<Option<String>>,

    #[validate(length(max = 1000))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub dietary_restrictions: Option<Option<String>>,

    #[validate(length(max = 1000))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub allergies: Option<Option<String>>,

    #[validate(length(max = 1000))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub preferred_workout_types: Option<Option<String>>,

    #[validate(range(
        min = 1,
        max = 7,
        message = "Workout frequency must be between 1 and 7 days per week"
    ))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i32>)]
    pub workout_frequency_preference: Option<Option<i32>>,

    #[validate(length(max = 255))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub workout_time_preference: Option<Option<String>>,

    #[validate(length(max = 255))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub fitness_level_self_assessed: Option<Option<String>>,

    #[validate(length(max = 2000))]
    #[serde(default, deserialize_with = "super::nullable", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub specific_goals_text: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}
