//! Decimal → base-20 conversion.
//!
//! Repeated division/modulo by 20 in exact integer arithmetic, digits
//! ordered most-significant first. The converter is a pure function: no
//! state, no side effects, freely callable from concurrent contexts.

use tracing::debug;

use crate::digit::{Digit, RADIX};
use crate::error::{ConvertError, ConvertResult};

/// Convert a non-negative decimal integer to its base-20 digit sequence.
///
/// The result is ordered most-significant first. Zero converts to exactly
/// `[0]`; positive numbers never carry a redundant leading zero, so the
/// sequence length is ⌊log20(n)⌋ + 1.
///
/// # Errors
///
/// [`ConvertError::Negative`] if `n < 0`.
pub fn to_base20(n: i64) -> ConvertResult<Vec<Digit>> {
    if n < 0 {
        return Err(ConvertError::Negative { value: n });
    }
    if n == 0 {
        return Ok(vec![Digit::ZERO]);
    }

    let radix = i64::from(RADIX);
    let mut digits = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        digits.push(Digit::from_rem((remaining % radix) as u8));
        remaining /= radix;
    }
    digits.reverse();

    debug!(decimal = n, places = digits.len(), "converted to base-20");
    Ok(digits)
}

/// Reconstruct the decimal value of a most-significant-first digit sequence.
///
/// Inverse of [`to_base20`]: Σ digit[i] × 20^(len−1−i). An empty slice
/// reconstructs to 0.
pub fn from_base20(digits: &[Digit]) -> u64 {
    digits.iter().fold(0u64, |acc, d| {
        acc * u64::from(RADIX) + u64::from(d.value())
    })
}

/// Parse a decimal integer from user input.
///
/// Non-integer input is rejected rather than truncated: anything other than
/// an optionally signed decimal integer literal (surrounding ASCII
/// whitespace allowed) fails. Negative values parse successfully and are
/// then rejected by [`to_base20`], so callers see the converter's own error
/// for them.
///
/// # Errors
///
/// [`ConvertError::NotInteger`] if `input` is not an integer literal.
pub fn parse_decimal(input: &str) -> ConvertResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ConvertError::NotInteger {
            input: trimmed.to_string(),
        })
}
