//! # uinal
//!
//! A Maya vigesimal numeral engine: exact base-20 conversion and glyph
//! rendering for the twenty digits of the ancient Maya positional system.
//!
//! ## Architecture
//!
//! - **Converter** (`convert`): decimal → most-significant-first digit
//!   sequence, exact integer arithmetic throughout
//! - **Digit type** (`digit`): validated 0–19 digit, the unit both halves
//!   of the engine speak
//! - **Glyph mapping** (`glyph`): Mayan Numerals code points
//!   (U+1D2E0–U+1D2F3) and composed dot/bar pictograms
//! - **Rendering** (`glyph::render`): ANSI terminal output with
//!   TTY-detected color
//! - **Export** (`export`): JSON-friendly views of conversions and the
//!   glyph catalog
//!
//! ## Library usage
//!
//! ```
//! use uinal::convert;
//! use uinal::glyph::codepoint;
//!
//! let digits = convert::to_base20(365).unwrap();
//! assert_eq!(digits.len(), 2); // 18 × 20 + 5
//! assert_eq!(codepoint::codepoint_string(&digits), "\u{1D2F2}\u{1D2E5}");
//! ```

pub mod convert;
pub mod digit;
pub mod error;
pub mod export;
pub mod glyph;
