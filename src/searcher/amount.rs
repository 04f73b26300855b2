//! SOL to lamport conversion.
//!
//! The tip floor endpoint reports amounts in fractional SOL. They are
//! converted to lamports by scaling the decimal by 10^9 with arbitrary
//! precision arithmetic and truncating whatever lies below one lamport, so
//! values like `0.000001` come out as exactly `1000`.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode, Signed, ToPrimitive, Zero};
use thiserror::Error;

/// Number of decimal places between one SOL and one lamport.
pub const LAMPORTS_DECIMALS: u32 = 9;

pub const LAMPORTS_PER_SOL: u64 = 10u64.pow(LAMPORTS_DECIMALS);

/// `u64::MAX` has 20 decimal digits.
const MAX_LAMPORT_DIGITS: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("empty amount")]
    Empty,
    #[error("invalid decimal amount {0:?}")]
    Invalid(String),
    #[error("negative amount {0}")]
    Negative(String),
    #[error("amount {0} does not fit in u64 lamports")]
    Overflow(String),
}

/// Converts a decimal SOL amount such as `"0.000001"`, `"12"` or `"2.5e-6"`
/// into lamports, truncating towards zero.
pub fn sol_to_lamports(input: &str) -> Result<u64, AmountParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(AmountParseError::Empty);
    }
    let overflow = || AmountParseError::Overflow(text.to_string());

    let sol = parse_decimal(text)?;
    if sol.is_zero() {
        return Ok(0);
    }
    if sol.is_negative() {
        return Err(AmountParseError::Negative(text.to_string()));
    }

    // Integer digits of the lamport value, zero or less below one lamport.
    let (_, scale) = sol.as_bigint_and_exponent();
    let lamport_digits = (sol.digits() as i64)
        .saturating_sub(scale)
        .saturating_add(i64::from(LAMPORTS_DECIMALS));
    if lamport_digits <= 0 {
        return Ok(0);
    }
    if lamport_digits > MAX_LAMPORT_DIGITS {
        return Err(overflow());
    }

    (sol * BigDecimal::from(LAMPORTS_PER_SOL))
        .with_scale_round(0, RoundingMode::Down)
        .to_u64()
        .ok_or_else(overflow)
}

/// Parses `text` as a decimal. An exponent outside the `i64` range is
/// resolved here: a huge positive exponent overflows and a huge negative one
/// is zero.
fn parse_decimal(text: &str) -> Result<BigDecimal, AmountParseError> {
    let invalid = || AmountParseError::Invalid(text.to_string());

    if let Ok(value) = BigDecimal::from_str(text) {
        return Ok(value);
    }

    let (mantissa, exponent) = text.split_once(['e', 'E']).ok_or_else(invalid)?;
    let mantissa = BigDecimal::from_str(mantissa).map_err(|_| invalid())?;
    let (negative_exponent, exponent_digits) = match exponent.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, exponent.strip_prefix('+').unwrap_or(exponent)),
    };
    if exponent_digits.is_empty() || !exponent_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    if negative_exponent || mantissa.is_zero() {
        Ok(BigDecimal::zero())
    } else if mantissa.is_negative() {
        Err(AmountParseError::Negative(text.to_string()))
    } else {
        Err(AmountParseError::Overflow(text.to_string()))
    }
}
