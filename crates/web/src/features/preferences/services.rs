use rand::Rng;
use sqlx::PgPool;
use storage::{
    dto::preferences::{PreferencesResponse, UpsertPreferencesRequest},
    error::Result,
    models::UserPreference,
    repository::PreferencesRepository,
    services::suggestions::{generate_food_suggestions, generate_workout_suggestions},
};
use uuid::Uuid;

/// Returns empty defaults when the user has not saved preferences yet
pub async fn get_preferences(pool: &PgPool, user_id: Uuid) -> Result<PreferencesResponse> {
    let repo = PreferencesRepository::new(pool);

    Ok(repo
        .find_by_user(user_id)
        .await?
        .map(PreferencesResponse::from)
        .unwrap_or_else(|| PreferencesResponse::empty(user_id)))
}

pub async fn upsert_preferences(
    pool: &PgPool,
    user_id: Uuid,
    request: &UpsertPreferencesRequest,
) -> Result<UserPreference> {
    let repo = PreferencesRepository::new(pool);
    repo.upsert(user_id, request).await
}

pub async fn food_suggestions<R: Rng + ?Sized>(
    pool: &PgPool,
    user_id: Uuid,
    rng: &mut R,
) -> Result<Vec<String>> {
    let preferences = PreferencesRepository::new(pool).find_by_user(user_id).await?;
    Ok(generate_food_suggestions(rng, preferences.as_ref()))
}

pub async fn workout_suggestions<R: Rng + ?Sized>(
    pool: &PgPool,
    user_id: Uuid,
    rng: &mut R,
) -> Result<Vec<String>> {
    let preferences = PreferencesRepository::new(pool).find_by_user(user_id).await?;
    Ok(generate_workout_suggestions(rng, preferences.as_ref()))
}
