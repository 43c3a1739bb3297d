use anyhow::Context;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;

use config::Config;
use features::{health, plans, preferences, profile};
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        plans::handlers::preview_plan,
        plans::handlers::generate_plans,
        plans::handlers::current_diet_plan,
        plans::handlers::current_workout_plan,
        profile::handlers::get_profile,
        profile::handlers::upsert_profile,
        preferences::handlers::get_preferences,
        preferences::handlers::upsert_preferences,
        preferences::handlers::food_suggestions,
        preferences::handlers::workout_suggestions,
    ),
    components(
        schemas(
            health::HealthResponse,
            storage::dto::plan::PreviewPlanRequest,
            storage::dto::plan::GeneratePlanResponse,
            storage::dto::plan::DietPlanResponse,
            storage::dto::plan::MealResponse,
            storage::dto::plan::WorkoutPlanResponse,
            storage::dto::plan::WorkoutDayResponse,
            storage::dto::plan::ExerciseResponse,
            storage::dto::profile::UpsertProfileRequest,
            storage::dto::profile::ProfileResponse,
            storage::dto::preferences::UpsertPreferencesRequest,
            storage::dto::preferences::PreferencesResponse,
            storage::dto::preferences::SuggestionsResponse,
            storage::services::nutrition::MacroBudget,
            storage::services::meal_plan::SampleMeal,
            storage::services::workout_plan::WorkoutDayTemplate,
            storage::services::workout_plan::ExerciseTemplate,
            storage::services::plan_generation::GeneratedPlan,
            storage::services::plan_generation::DietPlanDraft,
            storage::services::plan_generation::WorkoutPlanDraft,
        )
    ),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "plans", description = "Plan calculator and generated plans"),
        (name = "profile", description = "Biometric profile endpoints"),
        (name = "preferences", description = "Food and training preferences"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting fitness plan API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("No API_KEYS configured; user routes will reject every request");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(db, api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
