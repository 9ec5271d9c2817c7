//! Premium and claim HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::extract::AppJson;
use crate::services::policy::{ClaimInput, PremiumQuoteInput};
use crate::AppState;

/// List insurable crops with their premium rates
pub async fn list_crops(State(state): State<AppState>) -> impl IntoResponse {
    let crops = state.policies.rate_table();
    (StatusCode::OK, Json(serde_json::json!({ "crops": crops })))
}

/// Quote a premium, creating a new policy
pub async fn quote_premium(
    State(state): State<AppState>,
    AppJson(input): AppJson<PremiumQuoteInput>,
) -> impl IntoResponse {
    match state.policies.quote_premium(input) {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Assess a claim for a previously quoted policy
pub async fn assess_claim(
    State(state): State<AppState>,
    AppJson(input): AppJson<ClaimInput>,
) -> impl IntoResponse {
    match state.policies.assess_claim(input) {
        Ok(settlement) => (StatusCode::OK, Json(settlement)).into_response(),
        Err(e) => e.into_response(),
    }
}
