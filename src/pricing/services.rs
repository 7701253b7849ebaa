//! Quote service: maps booking-form requests onto the pricing engine.

use rust_decimal::prelude::*;
use tracing::debug;

use super::calculators::compute_price;
use super::calendar::{parse_local_instant, rental_days};
use super::errors::{ValidationError, ValidationReason};
use super::models::{PriceBreakdown, RateInput};
use super::policy::PricingPolicy;
use super::requests::RentalQuoteRequest;

/// Result of quoting a rental request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalQuote {
    pub duration_days: i64,
    pub breakdown: PriceBreakdown,
}

fn whole_days(raw: Decimal) -> Result<i64, ValidationError> {
    if raw.fract() != Decimal::ZERO {
        return Err(ValidationError::new("duration_days", ValidationReason::NotAnInteger));
    }
    raw.to_i64()
        .ok_or_else(|| ValidationError::new("duration_days", ValidationReason::OutOfRange))
}

/// Build the engine input for a quote request.
///
/// An explicit `duration_days` wins over a day count derived from
/// `return_at`; at least one of them is required.
pub fn rate_input_from_request(request: &RentalQuoteRequest) -> Result<RateInput, ValidationError> {
    let pickup_at = parse_local_instant(&request.pickup_at, "pickup_at")?;

    let duration_days = match (request.duration_days, request.return_at.as_deref()) {
        (Some(days), _) => whole_days(days)?,
        (None, Some(raw)) => rental_days(pickup_at, parse_local_instant(raw, "return_at")?)?,
        (None, None) => {
            return Err(ValidationError::new("duration_days", ValidationReason::Missing));
        }
    };

    Ok(RateInput {
        base_daily_rate: request.base_daily_rate,
        product_discount_percent: request.product_discount_percent,
        duration_days,
        pickup_at,
        delivery_distance_km: request.delivery_distance_km,
        return_distance_km: request.return_distance_km,
    })
}

/// Quote a rental request against the given policy.
pub fn quote_rental(
    request: &RentalQuoteRequest,
    policy: &PricingPolicy,
) -> Result<RentalQuote, ValidationError> {
    let input = rate_input_from_request(request)?;
    let breakdown = compute_price(&input, policy)?;

    debug!(
        duration_days = input.duration_days,
        total = %breakdown.total,
        adjustments = breakdown.line_items.len(),
        "rental quoted"
    );

    Ok(RentalQuote {
        duration_days: input.duration_days,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(pickup_at: &str) -> RentalQuoteRequest {
        RentalQuoteRequest {
            base_daily_rate: dec!(50000),
            product_discount_percent: dec!(0),
            duration_days: None,
            pickup_at: pickup_at.to_string(),
            return_at: None,
            delivery_distance_km: None,
            return_distance_km: None,
        }
    }

    #[test]
    fn test_quote_with_explicit_duration() {
        let mut req = request("2024-06-03T09:00");
        req.duration_days = Some(dec!(7));
        let quote = quote_rental(&req, &PricingPolicy::default()).unwrap();
        assert_eq!(quote.duration_days, 7);
        assert_eq!(quote.breakdown.total, dec!(315000));
    }

    #[test]
    fn test_quote_derives_duration_from_return() {
        let mut req = request("2024-06-03T09:00");
        req.return_at = Some("2024-06-05T12:00".to_string());
        let quote = quote_rental(&req, &PricingPolicy::default()).unwrap();
        assert_eq!(quote.duration_days, 3);
        assert_eq!(quote.breakdown.total, dec!(150000));
    }

    #[test]
    fn test_explicit_duration_wins_over_return() {
        let mut req = request("2024-06-03T09:00");
        req.duration_days = Some(dec!(2));
        req.return_at = Some("2024-06-10T09:00".to_string());
        let quote = quote_rental(&req, &PricingPolicy::default()).unwrap();
        assert_eq!(quote.duration_days, 2);
    }

    #[test]
    fn test_weekend_uses_offset_local_day() {
        // Saturday 06:00 in Hanoi is Friday 23:00 UTC.
        let mut req = request("2024-06-08T06:00:00+07:00");
        req.duration_days = Some(dec!(1));
        let quote = quote_rental(&req, &PricingPolicy::default()).unwrap();
        assert_eq!(quote.breakdown.weekend_surcharge, dec!(15000));
    }

    #[test]
    fn test_fractional_duration_rejected() {
        let mut req = request("2024-06-03T09:00");
        req.duration_days = Some(dec!(2.5));
        let err = quote_rental(&req, &PricingPolicy::default()).unwrap_err();
        assert_eq!(err, ValidationError::new("duration_days", ValidationReason::NotAnInteger));
    }

    #[test]
    fn test_missing_duration_rejected() {
        let req = request("2024-06-03T09:00");
        let err = quote_rental(&req, &PricingPolicy::default()).unwrap_err();
        assert_eq!(err, ValidationError::new("duration_days", ValidationReason::Missing));
    }

    #[test]
    fn test_bad_timestamps_rejected() {
        let mut req = request("soon");
        req.duration_days = Some(dec!(1));
        let err = quote_rental(&req, &PricingPolicy::default()).unwrap_err();
        assert_eq!(err.field, "pickup_at");

        let mut req = request("2024-06-03T09:00");
        req.return_at = Some("2024-06-02T09:00".to_string());
        let err = quote_rental(&req, &PricingPolicy::default()).unwrap_err();
        assert_eq!(err.reason, ValidationReason::NotAfterPickup);
    }

    #[test]
    fn test_zero_duration_reaches_engine_validation() {
        let mut req = request("2024-06-03T09:00");
        req.duration_days = Some(dec!(0));
        let err = quote_rental(&req, &PricingPolicy::default()).unwrap_err();
        assert_eq!(err, ValidationError::new("duration_days", ValidationReason::OutOfRange));
    }
}
