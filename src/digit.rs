//! Validated base-20 digit type.
//!
//! A [`Digit`] is the unit the converter produces and the glyph mapper
//! consumes: an integer in [0, 19], checked once at construction so every
//! downstream mapping is total.

use serde::Serialize;

use crate::glyph::{GlyphError, GlyphResult};

/// Number of distinct digits in the vigesimal system.
pub const RADIX: u8 = 20;

/// A single base-20 digit, guaranteed to be in [0, 19].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(transparent)]
pub struct Digit(u8);

impl Digit {
    /// The zero digit.
    pub const ZERO: Digit = Digit(0);

    /// The highest single digit (19).
    pub const MAX: Digit = Digit(19);

    /// Validate an integer as a base-20 digit.
    ///
    /// # Errors
    ///
    /// [`GlyphError::OutOfRange`] if `value` is outside [0, 19].
    pub fn new(value: i64) -> GlyphResult<Self> {
        if (0..i64::from(RADIX)).contains(&value) {
            Ok(Digit(value as u8))
        } else {
            Err(GlyphError::OutOfRange { value })
        }
    }

    /// Construct from a remainder already reduced mod 20.
    pub(crate) const fn from_rem(rem: u8) -> Self {
        debug_assert!(rem < RADIX);
        Digit(rem)
    }

    /// The digit's numeric value.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
