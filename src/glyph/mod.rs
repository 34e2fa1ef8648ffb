//! Glyph mapping for base-20 digits.
//!
//! Maya numerals have two equally valid visual encodings, and this module
//! supports both as alternative rendering policies:
//!
//! ## Components
//!
//! - [`codepoint`] — the Mayan Numerals Unicode block (U+1D2E0–U+1D2F3),
//!   one code point per digit, plus the 20-entry glyph catalog
//! - [`pictogram`] — composed dot/bar pictograms (dot = 1, bar = 5,
//!   shell sign for zero)
//! - [`render`] — ANSI terminal renderer with color coding

pub mod codepoint;
pub mod pictogram;
pub mod render;

pub use codepoint::{NumeralGlyph, codepoint_for};
pub use pictogram::{Pictogram, pictogram_for};
pub use render::{GlyphPolicy, RenderConfig};

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur during glyph operations.
#[derive(Debug, Error, Diagnostic)]
pub enum GlyphError {
    #[error("Maya digit must be between 0 and 19, got {value}")]
    #[diagnostic(
        code(uinal::glyph::out_of_range),
        help(
            "A single vigesimal place holds 0–19. Run the converter first \
             if you have a larger number."
        )
    )]
    OutOfRange { value: i64 },
}

/// Result type for glyph operations.
pub type GlyphResult<T> = Result<T, GlyphError>;
