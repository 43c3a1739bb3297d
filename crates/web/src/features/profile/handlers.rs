use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::profile::{ProfileResponse, UpsertProfileRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/profile",
    params(
        ("user_id" = Uuid, Path, description = "User identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile found", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    ),
    tag = "profile"
)]
pub async fn get_profile(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let profile = services::get_profile(db.pool(), user_id).await?;

    Ok(Json(ProfileResponse::from(profile)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{user_id}/profile",
    params(
        ("user_id" = Uuid, Path, description = "User identifier")
    ),
    request_body = UpsertProfileRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile saved", body = ProfileResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "profile"
)]
pub async fn upsert_profile(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let profile = services::upsert_profile(db.pool(), user_id, req).await?;
    tracing::info!(%user_id, "Profile updated");

    Ok(Json(ProfileResponse::from(profile)).into_response())
}
