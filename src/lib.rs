//! MotoRent rental pricing.
//!
//! A pure price computation engine ([`pricing::compute_price`]) and the small
//! axum service the booking form and admin screens use to reach it.

pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use pricing::PricingPolicy;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub policy: Arc<PricingPolicy>,
}

impl AppState {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}
