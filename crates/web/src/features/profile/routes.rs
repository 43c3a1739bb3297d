use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_profile, upsert_profile};

pub fn routes() -> Router<Database> {
    Router::new().route("/profile", get(get_profile).put(upsert_profile))
}
