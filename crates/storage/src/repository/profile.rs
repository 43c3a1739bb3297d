use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::profile::UpsertProfileRequest;
use crate::error::{Result, StorageError};
use crate::models::UserProfile;

const PROFILE_COLUMNS: &str = "profile_id, user_id, full_name, age, gender, height_cm, weight_kg, \
     activity_level, goal, updated_at";

pub struct ProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<UserProfile> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE user_id = $1");

        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Creates the profile on first write. Later writes only touch the fields
    /// present in the request; a field sent as `null` is cleared.
    pub async fn upsert(&self, user_id: Uuid, req: &UpsertProfileRequest) -> Result<UserProfile> {
        let query = format!(
            r#"
            INSERT INTO user_profiles (user_id, full_name, age, gender, height_cm, weight_kg,
                                       activity_level, goal)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id) DO UPDATE SET
                full_name = CASE WHEN $9 THEN EXCLUDED.full_name ELSE user_profiles.full_name END,
                age = CASE WHEN $10 THEN EXCLUDED.age ELSE user_profiles.age END,
                gender = CASE WHEN $11 THEN EXCLUDED.gender ELSE user_profiles.gender END,
                height_cm = CASE WHEN $12 THEN EXCLUDED.height_cm ELSE user_profiles.height_cm END,
                weight_kg = CASE WHEN $13 THEN EXCLUDED.weight_kg ELSE user_profiles.weight_kg END,
                activity_level = CASE WHEN $14 THEN EXCLUDED.activity_level ELSE user_profiles.activity_level END,
                goal = CASE WHEN $15 THEN EXCLUDED.goal ELSE user_profiles.goal END,
                updated_at = NOW()
            RETURNING {PROFILE_COLUMNS}
            "#
        );

        let profile = sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(req.full_name.as_ref().and_then(|v| v.as_deref()))
            .bind(req.age.flatten())
            .bind(req.gender.as_ref().and_then(|v| v.as_deref()))
            .bind(req.height_cm.flatten())
            .bind(req.weight_kg.flatten())
            .bind(req.activity_level.as_ref().and_then(|v| v.as_deref()))
            .bind(req.goal.as_ref().and_then(|v| v.as_deref()))
            .bind(req.full_name.is_some())
            .bind(req.age.is_some())
            .bind(req.gender.is_some())
            .bind(req.height_cm.is_some())
            .bind(req.weight_kg.is_some())
            .bind(req.activity_level.is_some())
            .bind(req.goal.is_some())
            .fetch_one(self.pool)
            .await?;

        Ok(profile)
    }
}
