//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::errors::ValidationError;
use super::models::{LineItem, LongRentTier, PriceBreakdown};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Response for a rental quote
#[derive(Debug, Serialize)]
pub struct RentalQuoteResponse {
    pub duration_days: i64,
    pub base_daily_rate_after_discount: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub weekend_surcharge: MoneyResponse,
    pub long_rent_tier: Option<LongRentTier>,
    pub long_rent_discount: MoneyResponse,
    pub delivery_fee: MoneyResponse,
    pub pickup_fee: MoneyResponse,
    pub total: MoneyResponse,
    pub line_items: Vec<LineItem>,
}

impl RentalQuoteResponse {
    pub fn from_breakdown(duration_days: i64, breakdown: PriceBreakdown) -> Self {
        let currency = breakdown.currency.as_str();
        Self {
            duration_days,
            base_daily_rate_after_discount: MoneyResponse::new(
                breakdown.base_daily_rate_after_discount,
                currency,
            ),
            subtotal: MoneyResponse::new(breakdown.subtotal, currency),
            weekend_surcharge: MoneyResponse::new(breakdown.weekend_surcharge, currency),
            long_rent_tier: breakdown.long_rent_tier,
            long_rent_discount: MoneyResponse::new(breakdown.long_rent_discount_amount, currency),
            delivery_fee: MoneyResponse::new(breakdown.delivery_fee, currency),
            pickup_fee: MoneyResponse::new(breakdown.pickup_fee, currency),
            total: MoneyResponse::new(breakdown.total, currency),
            line_items: breakdown.line_items,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&ValidationError> for PricingErrorResponse {
    fn from(err: &ValidationError) -> Self {
        Self {
            error_type: "validation_error".to_string(),
            message: err.to_string(),
            details: Some(serde_json::json!({
                "field": err.field,
                "reason": err.reason,
            })),
        }
    }
}
