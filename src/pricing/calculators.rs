//! Core rental price calculation.
//!
//! Pure functions for pricing math - no I/O, no logging.

use rust_decimal::Decimal;

use super::calendar::is_weekend;
use super::errors::{ValidationError, ValidationReason};
use super::models::{AdjustmentKind, LineItem, LongRentTier, PriceBreakdown, RateInput};
use super::policy::{PricingPolicy, RoundingMode};

/// Round to whole currency units using the given mode.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use motorent_pricing::pricing::{round_money, RoundingMode};
///
/// assert_eq!(round_money(dec!(2.5), RoundingMode::HalfUp), dec!(3));
/// assert_eq!(round_money(dec!(2.5), RoundingMode::HalfEven), dec!(2));
/// assert_eq!(round_money(dec!(1.49), RoundingMode::HalfUp), dec!(1));
/// ```
pub fn round_money(amount: Decimal, mode: RoundingMode) -> Decimal {
    amount.round_dp_with_strategy(0, mode.strategy()).normalize()
}

fn checked(value: Option<Decimal>, field: &'static str) -> Result<Decimal, ValidationError> {
    value.ok_or_else(|| ValidationError::new(field, ValidationReason::TooLarge))
}

fn validate(input: &RateInput) -> Result<(), ValidationError> {
    if input.duration_days < 1 {
        return Err(ValidationError::new("duration_days", ValidationReason::OutOfRange));
    }
    if input.base_daily_rate < Decimal::ZERO {
        return Err(ValidationError::new("base_daily_rate", ValidationReason::Negative));
    }
    let pct = input.product_discount_percent;
    if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
        return Err(ValidationError::new(
            "product_discount_percent",
            ValidationReason::OutOfRange,
        ));
    }

    let distances = [
        ("delivery_distance_km", input.delivery_distance_km),
        ("return_distance_km", input.return_distance_km),
    ];
    for (field, distance) in distances {
        if matches!(distance, Some(km) if km < Decimal::ZERO) {
            return Err(ValidationError::new(field, ValidationReason::Negative));
        }
    }

    Ok(())
}

/// Daily rate after the vehicle's own discount, rounded to whole units.
pub fn apply_product_discount(
    base_daily_rate: Decimal,
    discount_percent: Decimal,
    mode: RoundingMode,
) -> Result<Decimal, ValidationError> {
    if discount_percent.is_zero() {
        return Ok(round_money(base_daily_rate, mode));
    }

    let kept = checked(
        base_daily_rate.checked_mul(Decimal::ONE_HUNDRED - discount_percent),
        "base_daily_rate",
    )?;
    Ok(round_money(kept / Decimal::ONE_HUNDRED, mode))
}

/// Long-rent tier for a duration. The monthly tier takes precedence.
pub fn long_rent_tier(
    duration_days: i64,
    policy: &PricingPolicy,
) -> Option<(LongRentTier, Decimal)> {
    if duration_days >= policy.monthly_threshold_days {
        Some((LongRentTier::Monthly, policy.monthly_discount_percent))
    } else if duration_days >= policy.weekly_threshold_days {
        Some((LongRentTier::Weekly, policy.weekly_discount_percent))
    } else {
        None
    }
}

/// Fee for carrying the vehicle `distance_km` to or from the customer.
///
/// Distances bill by the started kilometre: 4.1 km bills as 5 km. Absent or
/// non-positive distances cost nothing. Returns the billed kilometres and fee.
pub fn distance_fee(
    distance_km: Option<Decimal>,
    per_km: Decimal,
    base_fee: Decimal,
    mode: RoundingMode,
    field: &'static str,
) -> Result<(Decimal, Decimal), ValidationError> {
    let km = match distance_km {
        Some(km) if km > Decimal::ZERO => km.ceil(),
        _ => return Ok((Decimal::ZERO, Decimal::ZERO)),
    };

    let per_km_total = checked(km.checked_mul(per_km), field)?;
    let fee = checked(per_km_total.checked_add(base_fee), field)?;
    Ok((km.normalize(), round_money(fee, mode)))
}

fn describe_distance(
    label: &str,
    km: Decimal,
    per_km: Decimal,
    base_fee: Decimal,
    fee: Decimal,
) -> String {
    if base_fee.is_zero() {
        format!("{} {} km x {} (+{})", label, km, per_km.normalize(), fee)
    } else {
        format!(
            "{} {} + {} km x {} (+{})",
            label,
            base_fee.normalize(),
            km,
            per_km.normalize(),
            fee
        )
    }
}

/// Compute the total rental cost and its itemized breakdown.
///
/// Adjustments are applied in a fixed order: product discount, weekend
/// surcharge, long-rent discount (on subtotal plus weekend surcharge), then
/// delivery and pickup distance fees. Each amount is rounded to whole units
/// before it feeds the next step, so identical input always yields an
/// identical breakdown.
///
/// The policy is checked as well: a policy that could drive the total below
/// zero is rejected rather than priced.
pub fn compute_price(
    input: &RateInput,
    policy: &PricingPolicy,
) -> Result<PriceBreakdown, ValidationError> {
    validate(input)?;
    policy.validate()?;

    let mode = policy.rounding;
    let days = Decimal::from(input.duration_days);
    let mut line_items = Vec::new();

    // Product discount
    let rate = apply_product_discount(input.base_daily_rate, input.product_discount_percent, mode)?;
    let per_day_reduction = round_money(rate - input.base_daily_rate, mode);
    if !input.product_discount_percent.is_zero() && !per_day_reduction.is_zero() {
        let amount = checked(per_day_reduction.checked_mul(days), "base_daily_rate")?;
        line_items.push(LineItem {
            kind: AdjustmentKind::ProductDiscount,
            amount,
            description: format!(
                "Product discount {}% ({} per day)",
                input.product_discount_percent.normalize(),
                per_day_reduction
            ),
        });
    }

    let subtotal = checked(rate.checked_mul(days), "duration_days")?;
    let mut running = subtotal;

    // Weekend surcharge, decided by the pickup day only
    let weekend_surcharge = if is_weekend(input.pickup_at) {
        round_money(policy.weekend_surcharge, mode)
    } else {
        Decimal::ZERO
    };
    if !weekend_surcharge.is_zero() {
        running = checked(running.checked_add(weekend_surcharge), "base_daily_rate")?;
        line_items.push(LineItem {
            kind: AdjustmentKind::WeekendSurcharge,
            amount: weekend_surcharge,
            description: format!("Weekend pickup surcharge (+{})", weekend_surcharge),
        });
    }

    // Long-rent discount
    let tier = long_rent_tier(input.duration_days, policy);
    let long_rent_discount_amount = match tier {
        Some((_, pct)) => {
            let scaled = checked(running.checked_mul(pct), "base_daily_rate")?;
            round_money(scaled / Decimal::ONE_HUNDRED, mode)
        }
        None => Decimal::ZERO,
    };
    if let Some((tier, pct)) = tier.filter(|_| !long_rent_discount_amount.is_zero()) {
        running -= long_rent_discount_amount;
        let threshold = match tier {
            LongRentTier::Weekly => policy.weekly_threshold_days,
            LongRentTier::Monthly => policy.monthly_threshold_days,
        };
        line_items.push(LineItem {
            kind: AdjustmentKind::LongRentDiscount,
            amount: -long_rent_discount_amount,
            description: format!(
                "Long-rent discount {}% for {}+ days (-{})",
                pct.normalize(),
                threshold,
                long_rent_discount_amount
            ),
        });
    }

    // Distance fees
    let (delivery_km, delivery_fee) = distance_fee(
        input.delivery_distance_km,
        policy.delivery_per_km,
        policy.delivery_base_fee,
        mode,
        "delivery_distance_km",
    )?;
    if !delivery_fee.is_zero() {
        running = checked(running.checked_add(delivery_fee), "delivery_distance_km")?;
        line_items.push(LineItem {
            kind: AdjustmentKind::DeliveryFee,
            amount: delivery_fee,
            description: describe_distance(
                "Delivery fee",
                delivery_km,
                policy.delivery_per_km,
                policy.delivery_base_fee,
                delivery_fee,
            ),
        });
    }

    let (pickup_km, pickup_fee) = distance_fee(
        input.return_distance_km,
        policy.return_per_km,
        policy.return_base_fee,
        mode,
        "return_distance_km",
    )?;
    if !pickup_fee.is_zero() {
        running = checked(running.checked_add(pickup_fee), "return_distance_km")?;
        line_items.push(LineItem {
            kind: AdjustmentKind::PickupFee,
            amount: pickup_fee,
            description: describe_distance(
                "Pickup fee",
                pickup_km,
                policy.return_per_km,
                policy.return_base_fee,
                pickup_fee,
            ),
        });
    }

    Ok(PriceBreakdown {
        base_daily_rate_after_discount: rate,
        subtotal: subtotal.normalize(),
        weekend_surcharge,
        long_rent_tier: tier.map(|(tier, _)| tier),
        long_rent_discount_amount,
        delivery_fee,
        pickup_fee,
        total: round_money(running, mode),
        line_items,
        currency: policy.currency.clone(),
    })
}
