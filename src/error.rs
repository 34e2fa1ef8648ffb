//! Rich diagnostic error types for the uinal engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text so users know exactly what
//! went wrong and how to fix it. All failures are local validation errors:
//! a failing call returns an error for that one invocation and nothing else.

use miette::Diagnostic;
use thiserror::Error;

use crate::glyph::GlyphError;

/// Top-level error type for the uinal engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum UinalError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Glyph(#[from] GlyphError),
}

/// Errors from the base-20 converter.
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error("negative numbers unsupported: {value}")]
    #[diagnostic(
        code(uinal::convert::negative),
        help(
            "The Maya positional system has no sign notation. \
             Convert the absolute value and present the sign separately \
             if you need it."
        )
    )]
    Negative { value: i64 },

    #[error("not a decimal integer: '{input}'")]
    #[diagnostic(
        code(uinal::convert::not_integer),
        help(
            "Provide a plain base-10 integer such as 365. Fractional, \
             exponential, and non-numeric input is rejected rather than \
             silently truncated."
        )
    )]
    NotInteger { input: String },
}

/// Result type for converter operations.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Convenience alias for functions returning uinal results.
pub type UinalResult<T> = std::result::Result<T, UinalError>;
