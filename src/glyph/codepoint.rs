//! Unicode-codepoint policy: the Mayan Numerals block.
//!
//! Unicode assigns U+1D2E0–U+1D2F3 to the twenty Maya numeral digits. The
//! block is contiguous and value-ordered, so mapping a digit is a single
//! code point offset; the catalog below adds English names and bar/dot
//! composition for legend and export output.

use std::sync::OnceLock;

use crate::digit::Digit;
use crate::glyph::GlyphResult;

/// First code point of the Mayan Numerals block (the zero glyph).
pub const BLOCK_START: u32 = 0x1D2E0;

/// Last code point of the block (the nineteen glyph).
pub const BLOCK_END: u32 = 0x1D2F3;

/// A catalog entry for one numeral glyph.
#[derive(Debug, Clone)]
pub struct NumeralGlyph {
    /// Digit value, 0–19.
    pub value: u8,
    /// Code point in the Mayan Numerals block.
    pub codepoint: char,
    /// English digit name.
    pub name: &'static str,
    /// Bar units in the drawn glyph (value 5 each).
    pub bars: u8,
    /// Dot units in the drawn glyph (value 1 each).
    pub dots: u8,
}

const NAMES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

static CATALOG: OnceLock<Vec<NumeralGlyph>> = OnceLock::new();

fn build_catalog() -> Vec<NumeralGlyph> {
    (0u8..20)
        .map(|value| NumeralGlyph {
            value,
            codepoint: block_char(value),
            name: NAMES[value as usize],
            bars: value / 5,
            dots: value % 5,
        })
        .collect()
}

/// Map a digit to its Mayan Numerals code point.
///
/// The block maps value-to-offset directly, so this is a single addition.
pub const fn codepoint(digit: Digit) -> char {
    block_char(digit.value())
}

const fn block_char(value: u8) -> char {
    match char::from_u32(BLOCK_START + value as u32) {
        Some(c) => c,
        // Unreachable for values 0–19; the block is fully assigned.
        None => char::REPLACEMENT_CHARACTER,
    }
}

/// Validating entry point: map any integer to its numeral code point.
///
/// # Errors
///
/// [`crate::glyph::GlyphError::OutOfRange`] if `value` is outside [0, 19].
pub fn codepoint_for(value: i64) -> GlyphResult<char> {
    Ok(codepoint(Digit::new(value)?))
}

/// Get all 20 numeral glyphs, ordered by value.
pub fn all_glyphs() -> &'static [NumeralGlyph] {
    CATALOG.get_or_init(build_catalog)
}

/// Look up the catalog entry for a digit.
pub fn lookup(digit: Digit) -> &'static NumeralGlyph {
    &all_glyphs()[digit.value() as usize]
}

/// Render a digit sequence as a line of code points, most significant first.
pub fn codepoint_string(digits: &[Digit]) -> String {
    digits.iter().map(|d| codepoint(*d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_20_glyphs() {
        assert_eq!(all_glyphs().len(), 20);
    }

    #[test]
    fn block_endpoints() {
        assert_eq!(codepoint(Digit::ZERO), '\u{1D2E0}');
        assert_eq!(codepoint(Digit::MAX), '\u{1D2F3}');
        assert_eq!(BLOCK_START + 19, BLOCK_END);
    }

    #[test]
    fn codepoints_are_contiguous_and_in_block() {
        for (offset, glyph) in all_glyphs().iter().enumerate() {
            let cp = glyph.codepoint as u32;
            assert_eq!(cp, BLOCK_START + offset as u32);
            assert!(
                (BLOCK_START..=BLOCK_END).contains(&cp),
                "glyph {} codepoint U+{:04X} out of block",
                glyph.value,
                cp,
            );
        }
    }

    #[test]
    fn names_match_values() {
        assert_eq!(lookup(Digit::ZERO).name, "zero");
        assert_eq!(lookup(Digit::new(13).unwrap()).name, "thirteen");
        assert_eq!(lookup(Digit::MAX).name, "nineteen");
    }

    #[test]
    fn composition_sums_to_value() {
        for glyph in all_glyphs() {
            assert_eq!(glyph.bars * 5 + glyph.dots, glyph.value);
            assert!(glyph.bars <= 3);
            assert!(glyph.dots <= 4);
        }
    }

    #[test]
    fn codepoint_for_validates_range() {
        assert!(codepoint_for(0).is_ok());
        assert!(codepoint_for(19).is_ok());
        assert!(codepoint_for(-1).is_err());
        assert!(codepoint_for(20).is_err());
    }

    #[test]
    fn codepoint_string_is_most_significant_first() {
        let digits = crate::convert::to_base20(365).unwrap();
        // 365 = [18, 5] → eighteen then five.
        assert_eq!(codepoint_string(&digits), "\u{1D2F2}\u{1D2E5}");
    }

    #[test]
    fn mapping_is_idempotent() {
        let d = Digit::new(11).unwrap();
        assert_eq!(codepoint(d), codepoint(d));
    }
}
