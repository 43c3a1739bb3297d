use axum::{Router, middleware};
use storage::Database;

use crate::features::{health, plans, preferences, profile};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Assembles every feature router under `/api`. User-scoped routes sit behind
/// the API-key check; health and the stateless calculator preview do not.
pub fn create_router(db: Database, api_keys: ApiKeys) -> Router {
    let user_routes = Router::new()
        .merge(profile::routes::routes())
        .merge(preferences::routes::routes())
        .merge(plans::routes::user_routes())
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    let api = Router::new()
        .merge(health::routes())
        .merge(plans::routes::routes())
        .nest("/users/:user_id", user_routes);

    Router::new().nest("/api", api).with_state(db)
}
