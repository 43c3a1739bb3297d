use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::preferences::UpsertPreferencesRequest;
use crate::error::Result;
use crate::models::UserPreference;

const PREFERENCE_COLUMNS: &str = "preference_id, user_id, liked_foods, disliked_foods, \
     dietary_restrictions, allergies, preferred_workout_types, workout_frequency_preference, \
     workout_time_preference, fitness_level_self_assessed, specific_goals_text, updated_at";

pub struct PreferencesRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PreferencesRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Preferences are optional; `None` means the user never saved any.
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserPreference>> {
        let query =
            format!("SELECT {PREFERENCE_COLUMNS} FROM user_preferences WHERE user_id = $1");

        let preferences = sqlx::query_as::<_, UserPreference>(&query)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?;

        Ok(preferences)
    }

    /// Same merge rules as the profile upsert: absent fields are kept and
    /// explicit nulls clear the column.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        req: &UpsertPreferencesRequest,
    ) -> Result<UserPreference> {
        let query = format!(
            r#"
            INSERT INTO user_preferences (user_id, liked_foods, disliked_foods, dietary_restrictions,
                                          allergies, preferred_workout_types,
                                          workout_frequency_preference, workout_time_preference,
                                          fitness_level_self_assessed, specific_goals_text)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id) DO UPDATE SET
                liked_foods = CASE WHEN $11 THEN EXCLUDED.liked_foods ELSE user_preferences.liked_foods END,
                disliked_foods = CASE WHEN $12 THEN EXCLUDED.disliked_foods ELSE user_preferences.disliked_foods END,
                dietary_restrictions = CASE WHEN $13 THEN EXCLUDED.dietary_restrictions ELSE user_preferences.dietary_restrictions END,
                allergies = CASE WHEN $14 THEN EXCLUDED.allergies ELSE user_preferences.allergies END,
                preferred_workout_types = CASE WHEN $15 THEN EXCLUDED.preferred_workout_types ELSE user_preferences.preferred_workout_types END,
                workout_frequency_preference = CASE WHEN $16 THEN EXCLUDED.workout_frequency_preference ELSE user_preferences.workout_frequency_preference END,
                workout_time_preference = CASE WHEN $17 THEN EXCLUDED.workout_time_preference ELSE user_preferences.workout_time_preference END,
                fitness_level_self_assessed = CASE WHEN $18 THEN EXCLUDED.fitness_level_self_assessed ELSE user_preferences.fitness_level_self_assessed END,
                specific_goals_text = CASE WHEN $19 THEN EXCLUDED.specific_goals_text ELSE user_preferences.specific_goals_text END,
                updated_at = NOW()
            RETURNING {PREFERENCE_COLUMNS}
            "#
        );

        let preferences = sqlx::query_as::<_, UserPreference>(&query)
            .bind(user_id)
            .bind(req.liked_foods.as_ref().and_then(|v| v.as_deref()))
            .bind(req.disliked_foods.as_ref().and_then(|v| v.as_deref()))
            .bind(req.dietary_restrictions.as_ref().and_then(|v| v.as_deref()))
            .bind(req.allergies.as_ref().and_then(|v| v.as_deref()))
            .bind(req.preferred_workout_types.as_ref().and_then(|v| v.as_deref()))
            .bind(req.workout_frequency_preference.flatten())
            .bind(req.workout_time_preference.as_ref().and_then(|v| v.as_deref()))
            .bind(req.fitness_level_self_assessed.as_ref().and_then(|v| v.as_deref()))
            .bind(req.specific_goals_text.as_ref().and_then(|v| v.as_deref()))
            .bind(req.liked_foods.is_some())
            .bind(req.disliked_foods.is_some())
            .bind(req.dietary_restrictions.is_some())
            .bind(req.allergies.is_some())
            .bind(req.preferred_workout_types.is_some())
            .bind(req.workout_frequency_preference.is_some())
            .bind(req.workout_time_preference.is_some())
            .bind(req.fitness_level_self_assessed.is_some())
            .bind(req.specific_goals_text.is_some())
            .fetch_one(self.pool)
            .await?;

        Ok(preferences)
    }
}
