pub mod debug;
pub mod plans;
pub mod venues;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/plans", post(plans::create_plan))
        .route("/plans/{id}", get(plans::get_plan).delete(plans::delete_plan))
        .route("/venues/nearby", get(venues::nearby_venues))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
