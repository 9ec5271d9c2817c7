//! Crop Insurance Calculator - HTTP API
//!
//! Quotes crop-insurance premiums and assesses yield-shortfall claims for
//! the farmer-facing form. The API is stateless: the client keeps the quoted
//! policy and submits it again with the observed yield.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
use services::PolicyService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub policies: PolicyService,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, error::AppError> {
        let currency = config
            .insurance
            .currency()
            .map_err(|e| error::AppError::Configuration(e.to_string()))?;

        Ok(Self {
            config: Arc::new(config),
            policies: PolicyService::new(currency),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Insurance Calculator API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
