//! Shared rendering utilities.
//!
//! Components write into a frame buffer (`String`) rather than stdout; the
//! renderer prints the finished frame in one call. All widths are measured in
//! characters, not bytes.
//!
//! # Example
//!
//! ```rust
//! use bookpilot::ui::helpers::push_highlighted;
//! use bookpilot::ui::Theme;
//!
//! let mut out = String::new();
//! push_highlighted(&mut out, "Dune", &[(0, 2)], &Theme::default(), false);
//! assert!(out.contains("Du") && out.ends_with("ne"));
//! ```

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Width of `text` in characters.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Appends `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices, start inclusive and end
/// exclusive, sorted and non-overlapping. When `is_selected` is set, the
/// selection colors win and no highlighting is applied.
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Appends spaces until a line of `used` characters reaches `cols`.
pub fn pad_line(out: &mut String, used: usize, cols: usize) {
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
}

/// Cuts `text` to at most `max` characters, marking the cut with `...`.
#[must_use]
pub fn fit(text: &str, max: usize) -> String {
    if char_width(text) <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlighted_text_keeps_all_characters() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Düne Messiah", &[(0, 4), (5, 6)], &theme, false);

        let stripped: String = strip_ansi(&out);
        assert_eq!(stripped, "Düne Messiah");
        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn out_of_range_highlights_are_clamped() {
        let mut out = String::new();
        push_highlighted(&mut out, "abc", &[(1, 10), (20, 30)], &Theme::default(), false);
        assert_eq!(strip_ansi(&out), "abc");
    }

    #[test]
    fn selected_rows_skip_highlighting() {
        let mut out = String::new();
        push_highlighted(&mut out, "abc", &[(0, 1)], &Theme::default(), true);
        assert_eq!(out, "abc");
    }

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("héllo wörld", 8), "héllo...");
        assert_eq!(fit("short", 8), "short");
    }

    fn strip_ansi(text: &str) -> String {
        let mut result = String::new();
        let mut in_escape = false;
        for c in text.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm' | 'H') => in_escape = false,
                (true, _) => {}
                (false, c) => result.push(c),
            }
        }
        result
    }
}
