//! ANSI terminal renderer for Maya numerals.
//!
//! Provides color-coded output for terminal display, with automatic
//! TTY detection and configurable policy/layout options. With color
//! disabled the output is plain text, byte for byte.

use crate::digit::Digit;
use crate::glyph::codepoint;
use crate::glyph::pictogram::{self, Pictogram};

// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Which glyph policy to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphPolicy {
    /// One Mayan Numerals code point per digit (U+1D2E0–U+1D2F3).
    #[default]
    Codepoint,
    /// Composed dot/bar pictograms.
    Pictogram,
}

/// Configuration for terminal rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Enable ANSI color codes.
    pub color: bool,
    /// Glyph policy.
    pub policy: GlyphPolicy,
    /// Stack digits vertically (most significant on top) vs a single line.
    pub stacked: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: atty_detect(),
            policy: GlyphPolicy::default(),
            stacked: true,
        }
    }
}

/// Render a digit sequence for terminal display.
///
/// Stacked output places the most significant digit at the top, one glyph
/// (or pictogram block) per position; inline output is a single line.
pub fn render_number(digits: &[Digit], config: &RenderConfig) -> String {
    if digits.is_empty() {
        return String::new();
    }

    match (config.policy, config.stacked) {
        (GlyphPolicy::Codepoint, false) => {
            paint(&codepoint::codepoint_string(digits), YELLOW, config)
        }
        (GlyphPolicy::Codepoint, true) => digits
            .iter()
            .map(|d| paint(&codepoint::codepoint(*d).to_string(), YELLOW, config))
            .collect::<Vec<_>>()
            .join("\n"),
        (GlyphPolicy::Pictogram, false) => digits
            .iter()
            .map(|d| paint(&Pictogram::for_digit(*d).inline(), YELLOW, config))
            .collect::<Vec<_>>()
            .join("  "),
        (GlyphPolicy::Pictogram, true) => digits
            .iter()
            .map(|d| pictogram_block(*d, config))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// Render a single digit under the configured policy.
pub fn render_digit(digit: Digit, config: &RenderConfig) -> String {
    match config.policy {
        GlyphPolicy::Codepoint => {
            paint(&codepoint::codepoint(digit).to_string(), YELLOW, config)
        }
        GlyphPolicy::Pictogram => pictogram_block(digit, config),
    }
}

/// Print the full 20-glyph reference table.
pub fn render_codex(config: &RenderConfig) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{}Vigesimal Codex — the twenty Maya digits{}",
        if config.color { BOLD } else { "" },
        if config.color { RESET } else { "" },
    ));
    lines.push(String::new());

    for entry in codepoint::all_glyphs() {
        let glyph = paint(&entry.codepoint.to_string(), YELLOW, config);
        let name = paint(entry.name, CYAN, config);
        let composition = paint(&composition(entry), DIM, config);
        lines.push(format!(
            "  {glyph}  {:>2}  {name:<width$} {composition}",
            entry.value,
            width = name_column_width(config),
        ));
    }

    lines.join("\n")
}

// -----------------------------------------------------------------------
// Internal helpers
// -----------------------------------------------------------------------

/// Render one digit as a colored pictogram block: dot row cyan, bar rows
/// yellow, the zero shell dim.
fn pictogram_block(digit: Digit, config: &RenderConfig) -> String {
    Pictogram::for_digit(digit)
        .rows()
        .into_iter()
        .map(|row| {
            if row.contains(pictogram::ZERO_SIGN) {
                paint(&row, DIM, config)
            } else if row.contains(pictogram::BAR) {
                paint(&row, YELLOW, config)
            } else {
                paint(&row, CYAN, config)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Describe a catalog entry's bar/dot makeup.
fn composition(entry: &codepoint::NumeralGlyph) -> String {
    if entry.value == 0 {
        return "shell sign".to_string();
    }

    let mut parts = Vec::new();
    if entry.bars > 0 {
        parts.push(format!(
            "{} bar{}",
            entry.bars,
            if entry.bars == 1 { "" } else { "s" }
        ));
    }
    if entry.dots > 0 {
        parts.push(format!(
            "{} dot{}",
            entry.dots,
            if entry.dots == 1 { "" } else { "s" }
        ));
    }
    parts.join(", ")
}

/// Column width for the name field. Colored names carry invisible escape
/// bytes, so the pad width has to grow by their length to keep alignment.
fn name_column_width(config: &RenderConfig) -> usize {
    const NAME_WIDTH: usize = 9; // "seventeen"
    if config.color {
        NAME_WIDTH + CYAN.len() + RESET.len()
    } else {
        NAME_WIDTH
    }
}

/// Wrap a string in an ANSI color code when color is enabled.
fn paint(s: &str, color_code: &str, config: &RenderConfig) -> String {
    if config.color {
        format!("{color_code}{s}{RESET}")
    } else {
        s.to_string()
    }
}

/// Detect whether stdout is a TTY.
fn atty_detect() -> bool {
    // Simple heuristic: check if the TERM env var is set.
    std::env::var("TERM").is_ok()
}
