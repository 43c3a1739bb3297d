use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::{
    Database,
    dto::preferences::{PreferencesResponse, SuggestionsResponse, UpsertPreferencesRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/preferences",
    params(
        ("user_id" = Uuid, Path, description = "User identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Saved preferences, or empty defaults", body = PreferencesResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "preferences"
)]
pub async fn get_preferences(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let preferences = services::get_preferences(db.pool(), user_id).await?;

    Ok(Json(preferences).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{user_id}/preferences",
    params(
        ("user_id" = Uuid, Path, description = "User identifier")
    ),
    request_body = UpsertPreferencesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Preferences saved", body = PreferencesResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "preferences"
)]
pub async fn upsert_preferences(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpsertPreferencesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let preferences = services::upsert_preferences(db.pool(), user_id, &req).await?;
    tracing::info!(%user_id, "Preferences updated");

    Ok(Json(PreferencesResponse::from(preferences)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/preferences/suggestions/food",
    params(
        ("user_id" = Uuid, Path, description = "User identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Up to two food suggestions", body = SuggestionsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "preferences"
)]
pub async fn food_suggestions(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let mut rng = StdRng::from_entropy();
    let suggestions = services::food_suggestions(db.pool(), user_id, &mut rng).await?;
    tracing::info!(%user_id, count = suggestions.len(), "Food suggestions generated");

    Ok(Json(SuggestionsResponse { suggestions }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/preferences/suggestions/workout",
    params(
        ("user_id" = Uuid, Path, description = "User identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Up to two workout suggestions", body = SuggestionsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "preferences"
)]
pub async fn workout_suggestions(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let mut rng = StdRng::from_entropy();
    let suggestions = services::workout_suggestions(db.pool(), user_id, &mut rng).await?;
    tracing::info!(%user_id, count = suggestions.len(), "Workout suggestions generated");

    Ok(Json(SuggestionsResponse { suggestions }).into_response())
}
