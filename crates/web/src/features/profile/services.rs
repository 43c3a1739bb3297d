use sqlx::PgPool;
use storage::{
    dto::profile::UpsertProfileRequest, error::Result, models::UserProfile,
    repository::ProfileRepository,
};
use uuid::Uuid;

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfile> {
    let repo = ProfileRepository::new(pool);
    repo.find_by_user(user_id).await
}

/// Stores enum fields in canonical form, then merges the update into the
/// existing profile
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    request: UpsertProfileRequest,
) -> Result<UserProfile> {
    let request = request.canonicalize()?;
    let repo = ProfileRepository::new(pool);
    repo.upsert(user_id, &request).await
}
