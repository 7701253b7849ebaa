//! Deployment-tunable pricing constants.
//!
//! Two storefront deployments have historically used different surcharge and
//! per-kilometre values, so none of them are hard-coded in the calculators.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How fractional currency amounts are brought to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Halves round away from zero (2.5 -> 3).
    #[default]
    HalfUp,
    /// Banker's rounding (2.5 -> 2, 3.5 -> 4).
    HalfEven,
}

impl RoundingMode {
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half_up" | "half-up" => Ok(RoundingMode::HalfUp),
            "half_even" | "half-even" | "bankers" => Ok(RoundingMode::HalfEven),
            other => Err(PolicyError::UnknownRounding(other.to_string())),
        }
    }
}

/// Rejected policy values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("{0} must be between 0 and 100")]
    PercentOutOfRange(&'static str),

    #[error("{0} must be at least one day")]
    ZeroThreshold(&'static str),

    #[error("monthly threshold ({monthly} days) must exceed weekly threshold ({weekly} days)")]
    ThresholdOrder { weekly: i64, monthly: i64 },

    #[error("unknown rounding mode '{0}'")]
    UnknownRounding(String),
}

/// Surcharges, per-km rates and long-rent tiers used by
/// [`compute_price`](super::calculators::compute_price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    #[serde(with = "rust_decimal::serde::str")]
    pub weekend_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub delivery_per_km: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub return_per_km: Decimal,
    /// Flat amount added once when a delivery distance is billed.
    #[serde(with = "rust_decimal::serde::str")]
    pub delivery_base_fee: Decimal,
    /// Flat amount added once when a return distance is billed.
    #[serde(with = "rust_decimal::serde::str")]
    pub return_base_fee: Decimal,
    pub weekly_threshold_days: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub weekly_discount_percent: Decimal,
    pub monthly_threshold_days: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_discount_percent: Decimal,
    pub rounding: RoundingMode,
    pub currency: String,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            weekend_surcharge: dec!(15000),
            delivery_per_km: dec!(5000),
            return_per_km: dec!(5000),
            delivery_base_fee: Decimal::ZERO,
            return_base_fee: Decimal::ZERO,
            weekly_threshold_days: 7,
            weekly_discount_percent: dec!(10),
            monthly_threshold_days: 30,
            monthly_discount_percent: dec!(15),
            rounding: RoundingMode::HalfUp,
            currency: "VND".to_string(),
        }
    }
}

impl PricingPolicy {
    /// Check that every constant is usable by the calculators.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let amounts = [
            ("weekend_surcharge", self.weekend_surcharge),
            ("delivery_per_km", self.delivery_per_km),
            ("return_per_km", self.return_per_km),
            ("delivery_base_fee", self.delivery_base_fee),
            ("return_base_fee", self.return_base_fee),
        ];
        for (name, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(PolicyError::Negative(name));
            }
        }

        let percents = [
            ("weekly_discount_percent", self.weekly_discount_percent),
            ("monthly_discount_percent", self.monthly_discount_percent),
        ];
        for (name, pct) in percents {
            if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
                return Err(PolicyError::PercentOutOfRange(name));
            }
        }

        if self.weekly_threshold_days < 1 {
            return Err(PolicyError::ZeroThreshold("weekly_threshold_days"));
        }
        if self.monthly_threshold_days < 1 {
            return Err(PolicyError::ZeroThreshold("monthly_threshold_days"));
        }
        if self.monthly_threshold_days <= self.weekly_threshold_days {
            return Err(PolicyError::ThresholdOrder {
                weekly: self.weekly_threshold_days,
                monthly: self.monthly_threshold_days,
            });
        }

        Ok(())
    }
}
