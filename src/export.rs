//! Export types for serializing conversions and the glyph catalog.
//!
//! These types provide human-readable, fully resolved representations of
//! a conversion (digit values, code points, pictogram decompositions)
//! suitable for JSON export.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert;
use crate::error::ConvertResult;
use crate::glyph::codepoint;
use crate::glyph::pictogram::Pictogram;

/// Exported conversion with every rendering of the digit sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionExport {
    /// Original decimal input.
    pub decimal: u64,
    /// Base-20 digit values, most significant first.
    pub digits: Vec<u8>,
    /// The number as a string of Mayan Numerals code points.
    pub glyphs: String,
    /// "U+1D2E0"-style code point labels, one per digit.
    pub codepoints: Vec<String>,
    /// Bar/dot decomposition per digit.
    pub pictograms: Vec<Pictogram>,
}

/// Exported catalog entry for one numeral glyph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitExport {
    /// Digit value, 0–19.
    pub value: u8,
    /// English digit name.
    pub name: String,
    /// "U+1D2E0"-style code point label.
    pub codepoint: String,
    /// The glyph itself.
    pub glyph: char,
    /// Bar units (value 5 each).
    pub bars: u8,
    /// Dot units (value 1 each).
    pub dots: u8,
}

/// Build the export form of a conversion.
///
/// # Errors
///
/// [`crate::error::ConvertError::Negative`] if `n < 0`.
pub fn export_conversion(n: i64) -> ConvertResult<ConversionExport> {
    let digits = convert::to_base20(n)?;
    debug!(decimal = n, places = digits.len(), "exporting conversion");

    Ok(ConversionExport {
        decimal: n as u64,
        digits: digits.iter().map(|d| d.value()).collect(),
        glyphs: codepoint::codepoint_string(&digits),
        codepoints: digits
            .iter()
            .map(|d| codepoint_label(codepoint::codepoint(*d)))
            .collect(),
        pictograms: digits.iter().map(|d| Pictogram::for_digit(*d)).collect(),
    })
}

/// Export all 20 catalog entries, ordered by value.
pub fn export_catalog() -> Vec<DigitExport> {
    codepoint::all_glyphs()
        .iter()
        .map(|entry| DigitExport {
            value: entry.value,
            name: entry.name.to_string(),
            codepoint: codepoint_label(entry.codepoint),
            glyph: entry.codepoint,
            bars: entry.bars,
            dots: entry.dots,
        })
        .collect()
}

/// Format a char as a "U+1D2E0"-style label.
fn codepoint_label(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit;

    #[test]
    fn conversion_export_resolves_every_view() {
        let export = export_conversion(365).unwrap();
        assert_eq!(export.decimal, 365);
        assert_eq!(export.digits, vec![18, 5]);
        assert_eq!(export.glyphs, "\u{1D2F2}\u{1D2E5}");
        assert_eq!(export.codepoints, vec!["U+1D2F2", "U+1D2E5"]);
        assert_eq!(export.pictograms.len(), 2);
        assert_eq!(export.pictograms[0], Pictogram { bars: 3, dots: 3 });
        assert_eq!(export.pictograms[1], Pictogram { bars: 1, dots: 0 });
    }

    #[test]
    fn conversion_export_rejects_negative() {
        assert!(export_conversion(-5).is_err());
    }

    #[test]
    fn conversion_export_roundtrips_through_json() {
        let export = export_conversion(8_000).unwrap();
        let json = serde_json::to_string(&export).unwrap();
        let back: ConversionExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.decimal, 8_000);
        assert_eq!(back.digits, vec![1, 0, 0, 0]);
    }

    #[test]
    fn catalog_export_has_20_entries() {
        let catalog = export_catalog();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog[0].codepoint, "U+1D2E0");
        assert_eq!(catalog[0].name, "zero");
        assert_eq!(catalog[19].codepoint, "U+1D2F3");
        assert_eq!(catalog[19].bars, 3);
        assert_eq!(catalog[19].dots, 4);
    }

    #[test]
    fn codepoint_labels_use_unicode_notation() {
        let d = Digit::new(0).unwrap();
        assert_eq!(codepoint_label(codepoint::codepoint(d)), "U+1D2E0");
    }
}
