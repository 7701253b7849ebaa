//! Runtime configuration read from the environment (and `.env` via dotenvy).
//!
//! Every pricing constant can be overridden with a `MOTORENT_*` variable;
//! unset variables keep the [`PricingPolicy::default`] values.

use std::str::FromStr;

use crate::pricing::{PolicyError, PricingPolicy};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },

    #[error("invalid pricing policy: {0}")]
    Policy(#[from] PolicyError),
}

/// Server and pricing configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub policy: PricingPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            policy: PricingPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut policy = defaults.policy;
        override_with(&read, "MOTORENT_WEEKEND_SURCHARGE", &mut policy.weekend_surcharge)?;
        override_with(&read, "MOTORENT_DELIVERY_PER_KM", &mut policy.delivery_per_km)?;
        override_with(&read, "MOTORENT_RETURN_PER_KM", &mut policy.return_per_km)?;
        override_with(&read, "MOTORENT_DELIVERY_BASE_FEE", &mut policy.delivery_base_fee)?;
        override_with(&read, "MOTORENT_RETURN_BASE_FEE", &mut policy.return_base_fee)?;
        override_with(&read, "MOTORENT_WEEKLY_THRESHOLD_DAYS", &mut policy.weekly_threshold_days)?;
        override_with(
            &read,
            "MOTORENT_WEEKLY_DISCOUNT_PERCENT",
            &mut policy.weekly_discount_percent,
        )?;
        override_with(
            &read,
            "MOTORENT_MONTHLY_THRESHOLD_DAYS",
            &mut policy.monthly_threshold_days,
        )?;
        override_with(
            &read,
            "MOTORENT_MONTHLY_DISCOUNT_PERCENT",
            &mut policy.monthly_discount_percent,
        )?;
        override_with(&read, "MOTORENT_ROUNDING", &mut policy.rounding)?;
        if let Some(currency) = read("MOTORENT_CURRENCY") {
            policy.currency = currency.trim().to_uppercase();
        }
        policy.validate()?;

        let mut config = Self {
            host: read("HOST").unwrap_or(defaults.host),
            port: defaults.port,
            policy,
        };
        override_with(&read, "PORT", &mut config.port)?;

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn override_with<T, R>(read: &R, key: &'static str, target: &mut T) -> Result<(), ConfigError>
where
    T: FromStr,
    R: Fn(&'static str) -> Option<String>,
{
    if let Some(raw) = read(key) {
        *target = raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw.clone(),
        })?;
    }
    Ok(())
}
