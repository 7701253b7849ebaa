//! Rental pricing engine.
//!
//! Computes rental totals from a vehicle's daily rate, its product discount,
//! the rental duration, the pickup day and optional delivery/return distances.
//! The calculators are pure; `routes` exposes them over HTTP/JSON.

pub mod calculators;
pub mod calendar;
pub mod errors;
pub mod models;
pub mod policy;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{compute_price, round_money};
pub use errors::{ValidationError, ValidationReason};
pub use models::{AdjustmentKind, LineItem, LongRentTier, PriceBreakdown, RateInput};
pub use policy::{PolicyError, PricingPolicy, RoundingMode};
pub use routes::router;
pub use services::{quote_rental, RentalQuote};
