//! Route definitions for the Crop Insurance Calculator

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/crops", get(handlers::list_crops))
        .nest("/policies", policy_routes())
}

/// Premium quote and claim routes
fn policy_routes() -> Router<AppState> {
    Router::new()
        .route("/premium", post(handlers::quote_premium))
        .route("/claim", post(handlers::assess_claim))
}
