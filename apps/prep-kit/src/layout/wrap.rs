//! Greedy word wrapping against measured glyph widths.

use crate::layout::font_metrics::FontMetricTable;

/// Tabs are drawn as this many spaces; the standard fonts have no tab glyph.
const TAB_WIDTH: usize = 4;

/// Wraps one source line (no newlines) into display lines no wider than `max_width`.
///
/// Words are split on single spaces, so runs of spaces inside a line survive
/// while leading spaces collapse. A segment is extended with `" " + word` only
/// if the measured result still fits; otherwise the segment is flushed and the
/// word starts a new one. A single word wider than `max_width` occupies its
/// own line rather than being split. Never returns an empty line.
pub fn wrap_line(
    line: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width: f32,
) -> Vec<String> {
    let expanded = expand_tabs(line);
    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in expanded.split(' ') {
        let trial = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if metrics.measure_str(&trial, size_pt) <= max_width {
            current = trial;
        } else {
            if !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

fn expand_tabs(line: &str) -> String {
    if line.contains('\t') {
        line.replace('\t', &" ".repeat(TAB_WIDTH))
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{get_metrics, FontFace};

    const SIZE: f32 = 11.0;
    const WIDTH: f32 = 468.0;

    fn metrics() -> &'static FontMetricTable {
        get_metrics(FontFace::Helvetica)
    }

    #[test]
    fn test_short_line_is_unchanged() {
        let lines = wrap_line("Question: Tell me about yourself.", metrics(), SIZE, WIDTH);
        assert_eq!(lines, vec!["Question: Tell me about yourself."]);
    }

    #[test]
    fn test_long_line_wraps_within_width() {
        let text = "Answer: I led the migration of a monolithic billing service to an \
                    event-driven architecture, coordinating four teams, defining the \
                    rollout plan, and reducing invoice latency from hours to seconds \
                    while keeping the error budget intact throughout the quarter.";
        assert!(metrics().measure_str(text, SIZE) > WIDTH);

        let lines = wrap_line(text, metrics(), SIZE, WIDTH);
        assert!(lines.len() >= 2, "expected a wrap, got {lines:?}");
        for line in &lines {
            assert!(!line.is_empty());
            let w = metrics().measure_str(line, SIZE);
            assert!(w <= WIDTH, "line '{line}' is {w}pt wide");
        }
    }

    #[test]
    fn test_wrapping_preserves_every_word_in_order() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu ".repeat(6);
        let lines = wrap_line(text.trim_end(), metrics(), SIZE, WIDTH);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.trim_end());
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let long_word = "x".repeat(120);
        let text = format!("before {long_word} after");
        let lines = wrap_line(&text, metrics(), SIZE, WIDTH);
        assert_eq!(lines, vec!["before".to_string(), long_word, "after".to_string()]);
    }

    #[test]
    fn test_leading_spaces_collapse_inner_spaces_survive() {
        let lines = wrap_line("   indented  twice", metrics(), SIZE, WIDTH);
        assert_eq!(lines, vec!["indented  twice"]);
    }

    #[test]
    fn test_tabs_expand_to_spaces() {
        let lines = wrap_line("a\tb", metrics(), SIZE, WIDTH);
        assert_eq!(lines, vec!["a    b"]);
    }

    #[test]
    fn test_uses_measured_widths_not_character_counts() {
        // Same character count, very different widths.
        let narrow = "il ".repeat(60);
        let wide = "WM ".repeat(60);
        let narrow_lines = wrap_line(narrow.trim_end(), metrics(), SIZE, WIDTH);
        let wide_lines = wrap_line(wide.trim_end(), metrics(), SIZE, WIDTH);
        assert!(narrow_lines.len() < wide_lines.len());
    }

    /// Width of the drawn glyphs, computed from AFM widths independent of the table.
    fn drawn_width(line: &str) -> f32 {
        let units: u32 = line
            .chars()
            .map(|c| match c {
                'a' | 'b' | 'd' => 556,
                'c' => 500,
                ' ' => 278,
                '\u{2014}' | '\u{2026}' => 1000,
                '\u{2022}' => 350,
                other => panic!("unexpected glyph {other:?}"),
            })
            .sum();
        units as f32 * SIZE / 1000.0
    }

    #[test]
    fn test_typographic_punctuation_stays_within_width() {
        let text = "a\u{2014}b\u{2014}c\u{2014}d \u{2022} a\u{2026} ".repeat(40);
        let lines = wrap_line(text.trim_end(), metrics(), SIZE, WIDTH);
        assert!(lines.len() >= 2, "expected a wrap, got {lines:?}");
        for line in &lines {
            let drawn = drawn_width(line);
            assert!(drawn <= WIDTH, "drawn line is {drawn}pt wide, usable is {WIDTH}pt");
            assert!((drawn - metrics().measure_str(line, SIZE)).abs() < 1e-3);
        }
    }
}
