//! Validation errors raised by the pricing engine.

use serde::Serialize;

use super::policy::PolicyError;

/// Why a pricing input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// Value lies outside its allowed range (e.g. a discount above 100%).
    OutOfRange,
    /// Value must not be negative.
    Negative,
    /// Day counts must be whole numbers.
    NotAnInteger,
    /// Required value was not supplied.
    Missing,
    /// Value could not be parsed.
    Malformed,
    /// Return instant is not after the pickup instant.
    NotAfterPickup,
    /// Amount overflowed decimal arithmetic.
    TooLarge,
}

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ValidationReason::OutOfRange => "out of range",
            ValidationReason::Negative => "must not be negative",
            ValidationReason::NotAnInteger => "must be a whole number",
            ValidationReason::Missing => "is required",
            ValidationReason::Malformed => "could not be parsed",
            ValidationReason::NotAfterPickup => "must be after the pickup time",
            ValidationReason::TooLarge => "is too large",
        };
        f.write_str(text)
    }
}

/// Input outside the engine's domain. Identical input always fails identically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

impl From<PolicyError> for ValidationError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::Negative(field) => Self::new(field, ValidationReason::Negative),
            PolicyError::PercentOutOfRange(field) | PolicyError::ZeroThreshold(field) => {
                Self::new(field, ValidationReason::OutOfRange)
            }
            PolicyError::ThresholdOrder { .. } => {
                Self::new("monthly_threshold_days", ValidationReason::OutOfRange)
            }
            PolicyError::UnknownRounding(_) => Self::new("rounding", ValidationReason::Malformed),
        }
    }
}
