use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::{
    Database,
    dto::plan::{DietPlanResponse, GeneratePlanResponse, PreviewPlanRequest, WorkoutPlanResponse},
    services::plan_generation::GeneratedPlan,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/plans/preview",
    request_body = PreviewPlanRequest,
    responses(
        (status = 200, description = "Calculated plan, not stored", body = GeneratedPlan),
        (status = 400, description = "Missing or invalid profile data")
    ),
    tag = "plans"
)]
pub async fn preview_plan(Json(req): Json<PreviewPlanRequest>) -> Result<Response, WebError> {
    req.validate()?;

    let mut rng = StdRng::from_entropy();
    let plan = services::preview_plan(&req, &mut rng)?;

    Ok(Json(plan).into_response())
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/plans/generate",
    params(
        ("user_id" = Uuid, Path, description = "User identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Plans generated and activated", body = GeneratePlanResponse),
        (status = 400, description = "Profile incomplete or invalid"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Concurrent generation for the same user")
    ),
    tag = "plans"
)]
pub async fn generate_plans(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let mut rng = StdRng::from_entropy();
    let response = services::generate_for_user(db.pool(), user_id, &mut rng).await?;

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/plans/diet/current",
    params(
        ("user_id" = Uuid, Path, description = "User identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Active diet plan with meals by day", body = DietPlanResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No active diet plan")
    ),
    tag = "plans"
)]
pub async fn current_diet_plan(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let plan = services::current_diet_plan(db.pool(), user_id).await?;

    Ok(Json(plan).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/plans/workout/current",
    params(
        ("user_id" = Uuid, Path, description = "User identifier")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Active workout plan with its days", body = WorkoutPlanResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No active workout plan")
    ),
    tag = "plans"
)]
pub async fn current_workout_plan(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let plan = services::current_workout_plan(db.pool(), user_id).await?;

    Ok(Json(plan).into_response())
}
