//! Composed-pictogram policy: dot and bar primitives.
//!
//! A digit is drawn from two primitives: the dot (value 1) and the bar
//! (value 5). Zero has its own sign, a stylized shell. Stacked glyphs put
//! the dot row above the bar rows, as the codices do.

use serde::{Deserialize, Serialize};

use crate::digit::Digit;
use crate::glyph::GlyphResult;

/// Dot primitive (value 1).
pub const DOT: char = '\u{25CF}'; // ●

/// Bar primitive (value 5); one bar is drawn as a full row of these.
pub const BAR: char = '\u{25AC}'; // ▬

/// The zero sign (shell) for plain-text output.
pub const ZERO_SIGN: char = '\u{2205}'; // ∅

/// Width of a rendered glyph row: four spaced dots.
const ROW_WIDTH: usize = 7;

/// A digit decomposed into bar and dot units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pictogram {
    /// Number of bars (value 5 each), 0–3.
    pub bars: u8,
    /// Number of dots (value 1 each), 0–4.
    pub dots: u8,
}

impl Pictogram {
    /// Decompose a digit: `d / 5` bars and `d % 5` dots.
    pub const fn for_digit(digit: Digit) -> Self {
        Pictogram {
            bars: digit.value() / 5,
            dots: digit.value() % 5,
        }
    }

    /// Total value represented (bars × 5 + dots).
    pub const fn value(self) -> u8 {
        self.bars * 5 + self.dots
    }

    /// Whether this is the zero pictogram (drawn as the shell sign).
    pub const fn is_zero(self) -> bool {
        self.bars == 0 && self.dots == 0
    }

    /// Stacked text rows: the dot row on top, then one row per bar.
    ///
    /// Rows are centered to a fixed width so a column of digits lines up.
    pub fn rows(self) -> Vec<String> {
        if self.is_zero() {
            return vec![center(&ZERO_SIGN.to_string())];
        }

        let mut rows = Vec::new();
        if self.dots > 0 {
            let dots = vec![DOT.to_string(); self.dots as usize].join(" ");
            rows.push(center(&dots));
        }
        for _ in 0..self.bars {
            rows.push(String::from(BAR).repeat(ROW_WIDTH));
        }
        rows
    }

    /// Single-line form, bars before dots: 13 → `▬▬●●●`, 0 → `∅`.
    pub fn inline(self) -> String {
        if self.is_zero() {
            return ZERO_SIGN.to_string();
        }

        let mut out = String::new();
        for _ in 0..self.bars {
            out.push(BAR);
        }
        for _ in 0..self.dots {
            out.push(DOT);
        }
        out
    }
}

/// Validating entry point: decompose any integer value.
///
/// # Errors
///
/// [`crate::glyph::GlyphError::OutOfRange`] if `value` is outside [0, 19].
pub fn pictogram_for(value: i64) -> GlyphResult<Pictogram> {
    Ok(Pictogram::for_digit(Digit::new(value)?))
}

/// Center a row to the fixed glyph width by left-padding.
fn center(row: &str) -> String {
    let len = row.chars().count();
    if len >= ROW_WIDTH {
        return row.to_string();
    }
    let pad = (ROW_WIDTH - len) / 2;
    format!("{}{row}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pic(value: i64) -> Pictogram {
        pictogram_for(value).unwrap()
    }

    #[test]
    fn decomposition_per_digit() {
        assert_eq!(pic(0), Pictogram { bars: 0, dots: 0 });
        assert_eq!(pic(1), Pictogram { bars: 0, dots: 1 });
        assert_eq!(pic(4), Pictogram { bars: 0, dots: 4 });
        assert_eq!(pic(5), Pictogram { bars: 1, dots: 0 });
        assert_eq!(pic(6), Pictogram { bars: 1, dots: 1 });
        assert_eq!(pic(13), Pictogram { bars: 2, dots: 3 });
        assert_eq!(pic(19), Pictogram { bars: 3, dots: 4 });
    }

    #[test]
    fn value_roundtrips_for_all_digits() {
        for v in 0..20u8 {
            assert_eq!(pic(i64::from(v)).value(), v);
        }
    }

    #[test]
    fn out_of_range_fails() {
        assert!(pictogram_for(-1).is_err());
        assert!(pictogram_for(20).is_err());
    }

    #[test]
    fn zero_renders_as_shell_sign() {
        let rows = pic(0).rows();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains(ZERO_SIGN));
        assert_eq!(pic(0).inline(), ZERO_SIGN.to_string());
    }

    #[test]
    fn dots_stack_above_bars() {
        // 13 = 2 bars + 3 dots: one dot row on top, two bar rows below.
        let rows = pic(13).rows();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains(DOT));
        assert!(!rows[0].contains(BAR));
        assert!(rows[1].contains(BAR));
        assert!(rows[2].contains(BAR));
    }

    #[test]
    fn bar_only_digits_have_no_dot_row() {
        let rows = pic(15).rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| !r.contains(DOT)));
    }

    #[test]
    fn rows_share_a_fixed_width() {
        for v in 0..20 {
            for row in pic(v).rows() {
                assert!(
                    row.chars().count() <= ROW_WIDTH,
                    "row too wide for digit {v}: {row:?}"
                );
            }
        }
        // A full dot row and a bar row line up exactly.
        assert_eq!(pic(4).rows()[0].chars().count(), ROW_WIDTH);
        assert_eq!(pic(5).rows()[0].chars().count(), ROW_WIDTH);
    }

    #[test]
    fn inline_emits_bars_then_dots() {
        assert_eq!(pic(13).inline(), "▬▬●●●");
        assert_eq!(pic(5).inline(), "▬");
        assert_eq!(pic(4).inline(), "●●●●");
    }
}
