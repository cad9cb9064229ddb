//! Price parsing and formatting using decimal arithmetic.
//!
//! Menu cards carry display prices such as `"250 ₽"`. Parsing strips the
//! currency symbol and whitespace before reading the number, so totals are
//! always computed over [`Decimal`] values rather than raw strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a display price.
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The price text did not parse as a decimal number.
    #[error("malformed price: {raw:?}")]
    Malformed {
        /// The offending input, as displayed on the card.
        raw: String,
    },
    /// The price parsed but is negative.
    #[error("price cannot be negative: {raw:?}")]
    Negative {
        /// The offending input.
        raw: String,
    },
}

/// What to do with malformed price text.
///
/// Menu markup is not under this component's control, so a card can carry a
/// price that does not parse. `Coerce` keeps the historical behavior of
/// degrading to zero; `Reject` surfaces the problem to the caller instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePolicy {
    /// Malformed prices become `0`.
    #[default]
    Coerce,
    /// Malformed prices are an error.
    Reject,
}

/// Parse a display price like `"250 ₽"`, `"10.50"`, or `" 99 "`.
///
/// The ruble sign and all whitespace are stripped before parsing. Under
/// [`PricePolicy::Coerce`] any remaining garbage degrades to zero; under
/// [`PricePolicy::Reject`] it is returned as [`PriceError::Malformed`].
/// Negative prices are rejected under either policy.
///
/// # Errors
///
/// Returns [`PriceError`] for malformed input under `Reject`, and for
/// negative input under either policy.
pub fn parse_display_price(raw: &str, policy: PricePolicy) -> Result<Decimal, PriceError> {
    let cleaned: String = raw.chars().filter(|c| *c != '₽' && !c.is_whitespace()).collect();

    match cleaned.parse::<Decimal>() {
        Ok(amount) if amount.is_sign_negative() && !amount.is_zero() => Err(PriceError::Negative {
            raw: raw.to_owned(),
        }),
        Ok(amount) => Ok(amount),
        Err(_) => match policy {
            PricePolicy::Coerce => Ok(Decimal::ZERO),
            PricePolicy::Reject => Err(PriceError::Malformed {
                raw: raw.to_owned(),
            }),
        },
    }
}

/// Format an amount for display (e.g., `"21.00 ₽"`).
#[must_use]
pub fn format_rub(amount: Decimal) -> String {
    format!("{:.2} ₽", amount.round_dp(2))
}
