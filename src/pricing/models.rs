//! Value types consumed and produced by the pricing engine.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything needed to price one booking.
#[derive(Debug, Clone, PartialEq)]
pub struct RateInput {
    /// Listed daily price before any discount.
    pub base_daily_rate: Decimal,
    /// Vehicle-level discount, 0..=100.
    pub product_discount_percent: Decimal,
    pub duration_days: i64,
    /// Local wall-clock pickup time. Only its weekday is used.
    pub pickup_at: NaiveDateTime,
    /// Set when the vehicle is delivered instead of collected at the showroom.
    pub delivery_distance_km: Option<Decimal>,
    /// Set when the vehicle is picked up from the customer instead of returned.
    pub return_distance_km: Option<Decimal>,
}

/// Which long-rent tier was applied, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LongRentTier {
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    ProductDiscount,
    WeekendSurcharge,
    LongRentDiscount,
    DeliveryFee,
    PickupFee,
}

/// One applied adjustment. `amount` is signed: discounts are negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub kind: AdjustmentKind,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub description: String,
}

/// Itemized result of [`compute_price`](super::calculators::compute_price).
///
/// Every amount is a whole number of currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base_daily_rate_after_discount: Decimal,
    pub subtotal: Decimal,
    pub weekend_surcharge: Decimal,
    pub long_rent_tier: Option<LongRentTier>,
    /// Positive amount that was subtracted.
    pub long_rent_discount_amount: Decimal,
    pub delivery_fee: Decimal,
    pub pickup_fee: Decimal,
    pub total: Decimal,
    /// Adjustments in the order they were applied.
    pub line_items: Vec<LineItem>,
    pub currency: String,
}

impl PriceBreakdown {
    /// Human-readable descriptions of the applied adjustments, in order.
    pub fn descriptions(&self) -> Vec<&str> {
        self.line_items
            .iter()
            .map(|item| item.description.as_str())
            .collect()
    }

    pub fn has_adjustment(&self, kind: AdjustmentKind) -> bool {
        self.line_items.iter().any(|item| item.kind == kind)
    }
}
