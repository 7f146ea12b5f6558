//! Admin API endpoints

pub mod usage;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create admin API router
pub fn create_admin_router() -> Router<AppState> {
    Router::new().route("/usage", get(usage::usage_report))
}
