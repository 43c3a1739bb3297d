use rand::Rng;
use sqlx::PgPool;
use storage::{
    dto::plan::{DietPlanResponse, GeneratePlanResponse, PreviewPlanRequest, WorkoutPlanResponse},
    error::{PlanError, Result, StorageError},
    models::{BiometricProfile, ProfileParts},
    repository::{PlanRepository, PreferencesRepository, ProfileRepository},
    services::plan_generation::{DEFAULT_WORKOUT_DAYS, GeneratedPlan, generate_plan, store_plan},
};
use uuid::Uuid;

/// Runs the calculator on submitted data without touching the database
pub fn preview_plan<R: Rng + ?Sized>(
    request: &PreviewPlanRequest,
    rng: &mut R,
) -> std::result::Result<GeneratedPlan, PlanError> {
    let profile = BiometricProfile::from_parts(request.parts())?;
    generate_plan(
        &profile,
        request.days_per_week.unwrap_or(DEFAULT_WORKOUT_DAYS),
        rng,
    )
}

/// Builds plans from the stored profile and preferences and makes them the
/// user's active plans
pub async fn generate_for_user<R: Rng + ?Sized>(
    pool: &PgPool,
    user_id: Uuid,
    rng: &mut R,
) -> Result<GeneratePlanResponse> {
    let profile = match ProfileRepository::new(pool).find_by_user(user_id).await {
        Ok(stored) => stored.to_biometrics()?,
        // No row at all: every field is missing
        Err(StorageError::NotFound) => BiometricProfile::from_parts(ProfileParts::default())?,
        Err(e) => return Err(e),
    };

    let days_per_week = PreferencesRepository::new(pool)
        .find_by_user(user_id)
        .await?
        .and_then(|p| p.workout_frequency_preference)
        .unwrap_or(DEFAULT_WORKOUT_DAYS);

    let plan = generate_plan(&profile, days_per_week, rng)?;
    let start_date = chrono::Utc::now().date_naive();
    let ids = store_plan(pool, user_id, &plan, start_date).await?;

    Ok(GeneratePlanResponse::new(ids, plan.tdee, plan.macros))
}

pub async fn current_diet_plan(pool: &PgPool, user_id: Uuid) -> Result<DietPlanResponse> {
    let repo = PlanRepository::new(pool);
    let plan = repo.find_active_diet_plan(user_id).await?;
    let meals = repo.list_diet_plan_meals(plan.diet_plan_id).await?;

    Ok(DietPlanResponse::new(plan, meals))
}

pub async fn current_workout_plan(pool: &PgPool, user_id: Uuid) -> Result<WorkoutPlanResponse> {
    let repo = PlanRepository::new(pool);
    let plan = repo.find_active_workout_plan(user_id).await?;

    Ok(WorkoutPlanResponse::from(plan))
}
