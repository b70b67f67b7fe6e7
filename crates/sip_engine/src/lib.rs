//! # SIP Engine
//!
//! Rule-based recurring-investment recommendations derived from a user's
//! declared financial profile. Everything in here is pure: inputs are
//! borrowed, results are freshly built, nothing is logged above `debug`.
//!
//! Two independent recommendation strategies exist side by side:
//!
//! - [`suggest_sips`] matches a scheme catalog against the user's monthly
//!   investable amount (see [`monthly_investable_amount`]).
//! - [`flat_estimate`] ignores the catalog and derives one rounded amount
//!   straight from pocket money or salary.
//!
//! [`recommend`] picks one of them by [`RecommendationStrategy`].

pub mod affordability;
pub mod error;
pub mod flat;
pub mod matcher;
pub mod strategy;
pub mod validation;

pub use affordability::monthly_investable_amount;
pub use error::{EngineError, Result};
pub use flat::flat_estimate;
pub use matcher::{suggest_sips, InvestmentBand};
pub use strategy::{recommend, RecommendationStrategy};
pub use validation::{profile_from_record, validate_profile, validate_scheme};

/// Largest amount accepted from a profile. Whole numbers up to here are exact
/// in `f64` and every derived amount fits an `i64`.
pub const MAX_AMOUNT: f64 = 1e15;

/// Round half to even, the way the recommendation amounts have always been rounded.
pub(crate) fn round_amount(value: f64) -> f64 {
    value.round_ties_even()
}

/// Converts an already rounded amount, refusing anything past `MAX_AMOUNT`.
pub(crate) fn whole_amount(field: &str, value: f64) -> Result<i64> {
    if value.is_finite() && value.abs() <= MAX_AMOUNT {
        Ok(value as i64)
    } else {
        Err(EngineError::AmountOutOfRange {
            field: field.to_string(),
            amount: value,
        })
    }
}
