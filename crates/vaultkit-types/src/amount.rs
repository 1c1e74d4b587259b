//! Exact decimal amount helpers.
//!
//! Chains disagree on decimal places (9 for STC, 6 for ALGO, 18 for most
//! EVM chains), so amounts travel as decimal strings and are shifted by
//! moving the decimal point, never by multiplying floats.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("invalid decimal amount: {0:?}")]
    Invalid(String),

    #[error("amount {0} has more precision than the asset allows")]
    Fractional(String),

    #[error("amount {0} is negative")]
    Negative(String),

    #[error("amount {0} does not fit into 128 bits")]
    Overflow(String),
}

/// Shift the decimal point of `value` by `places`.
///
/// Positive `places` multiplies by `10^places`, negative divides. The result
/// is the minimal fixed-point form: no exponent, no leading zeros in the
/// integer part, no trailing zeros in the fraction, and `"0"` for zero.
///
/// ```
/// use vaultkit_types::amount::shift_decimal;
/// assert_eq!(shift_decimal("1.5", 18).unwrap(), "1500000000000000000");
/// assert_eq!(shift_decimal("1500000000000000000", -18).unwrap(), "1.5");
/// ```
pub fn shift_decimal(value: &str, places: i32) -> Result<String, AmountError> {
    let trimmed = value.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return Err(AmountError::Invalid(value.to_string()));
    }

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);

    // Position of the decimal point inside `digits` after the shift.
    let mut point = int_part.len() as i64 + i64::from(places);
    if point < 0 {
        let pad = "0".repeat((-point) as usize);
        digits.insert_str(0, &pad);
        point = 0;
    }
    let point = point as usize;
    if point > digits.len() {
        let pad = point - digits.len();
        digits.extend(std::iter::repeat('0').take(pad));
    }

    let (whole, frac) = digits.split_at(point);
    let whole = whole.trim_start_matches('0');
    let frac = frac.trim_end_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };

    let mut out = if frac.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, frac)
    };
    if negative && out != "0" {
        out.insert(0, '-');
    }
    Ok(out)
}

/// Convert a display amount into atomic units for an asset with `decimals`.
///
/// Fails if the amount is negative or carries more precision than the asset.
pub fn to_atomic(value: &str, decimals: u32) -> Result<u128, AmountError> {
    let shifted = shift_decimal(value, decimals as i32)?;
    parse_atomic(&shifted)
}

/// Format atomic units as a display amount for an asset with `decimals`.
pub fn from_atomic(atomic: &str, decimals: u32) -> Result<String, AmountError> {
    shift_decimal(atomic, -(decimals as i32))
}

/// Parse a canonical non-negative integer string into `u128`.
pub fn parse_atomic(value: &str) -> Result<u128, AmountError> {
    let canonical = shift_decimal(value, 0)?;
    if canonical.starts_with('-') {
        return Err(AmountError::Negative(value.to_string()));
    }
    if canonical.contains('.') {
        return Err(AmountError::Fractional(value.to_string()));
    }
    canonical
        .parse::<u128>()
        .map_err(|_| AmountError::Overflow(value.to_string()))
}
