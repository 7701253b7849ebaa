//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Request to quote a rental.
///
/// Amounts accept JSON numbers or strings. The day count comes from
/// `duration_days` when present, otherwise from `return_at`.
#[derive(Debug, Clone, Deserialize)]
pub struct RentalQuoteRequest {
    pub base_daily_rate: Decimal,
    #[serde(default)]
    pub product_discount_percent: Decimal,
    #[serde(default)]
    pub duration_days: Option<Decimal>,
    pub pickup_at: String,
    #[serde(default)]
    pub return_at: Option<String>,
    #[serde(default)]
    pub delivery_distance_km: Option<Decimal>,
    #[serde(default)]
    pub return_distance_km: Option<Decimal>,
}
