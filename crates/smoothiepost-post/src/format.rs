//! Line formatting for Smoothieware G-code.
//!
//! Axis words are a space, the uppercase letter, and the value fixed to
//! four decimals. Feed and dwell values use the shortest decimal form that
//! round-trips (`F100`, `F12.5`).

use smoothiepost_core::Axis;

/// Decimal places used for axis words
pub const AXIS_PRECISION: usize = 4;

/// Format one axis word, e.g. `" X12.3450"`
pub fn format_axis_word(axis: Axis, value: f64) -> String {
    format!(" {}{:.prec$}", axis.letter(), value, prec = AXIS_PRECISION)
}

/// Format a feed word, e.g. `" F100"`
pub fn format_feed_word(rate: f64) -> String {
    format!(" F{}", rate)
}

/// Format a comment line body
pub fn format_comment(text: &str) -> String {
    format!(";{}", text)
}

/// Render a complete output line, with an optional `N<number> ` prefix
pub fn render_line(number: Option<u32>, line: &str) -> String {
    match number {
        Some(n) => format!("N{} {}\n", n, line),
        None => format!("{}\n", line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_word() {
        assert_eq!(format_axis_word(Axis::X, 12.345), " X12.3450");
        assert_eq!(format_axis_word(Axis::Z, -2.0), " Z-2.0000");
        assert_eq!(format_axis_word(Axis::I, 0.0), " I0.0000");
        assert_eq!(format_axis_word(Axis::W, 1.23456), " W1.2346");
    }

    #[test]
    fn test_feed_word() {
        assert_eq!(format_feed_word(100.0), " F100");
        assert_eq!(format_feed_word(12.5), " F12.5");
    }

    #[test]
    fn test_render_line() {
        assert_eq!(render_line(None, "G21"), "G21\n");
        assert_eq!(render_line(Some(10), "G21"), "N10 G21\n");
        assert_eq!(render_line(None, &format_comment("hello")), ";hello\n");
    }
}
