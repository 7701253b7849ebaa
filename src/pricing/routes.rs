//! Pricing API route handlers

use axum::{extract::State, routing::{get, post}, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::policy::PricingPolicy;
use super::requests::RentalQuoteRequest;
use super::responses::RentalQuoteResponse;
use super::services::quote_rental;

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/policy", get(policy))
}

/// Quote a rental for the booking form or an admin recalculation
async fn quote(
    State(state): State<AppState>,
    Json(request): Json<RentalQuoteRequest>,
) -> Result<Json<RentalQuoteResponse>> {
    let quote = quote_rental(&request, &state.policy)?;
    Ok(Json(RentalQuoteResponse::from_breakdown(
        quote.duration_days,
        quote.breakdown,
    )))
}

/// Current pricing constants
async fn policy(State(state): State<AppState>) -> Json<PricingPolicy> {
    Json(state.policy.as_ref().clone())
}
