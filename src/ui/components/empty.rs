//! Empty list message renderer.
//!
//! Shown in place of rows when a list has nothing to display: a message in
//! the empty-state color, followed by a dimmed hint when there is room.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders `empty` into the first rows of a list area of `capacity` rows.
///
/// Returns the number of rows used.
pub fn render_empty_state(
    out: &mut String,
    row: usize,
    capacity: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) -> usize {
    if capacity == 0 {
        return 0;
    }

    position_cursor(out, row, 1);
    out.push_str("  ");
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&fit(&empty.message, cols.saturating_sub(2)));
    out.push_str(Theme::reset());

    if capacity < 2 {
        return 1;
    }

    position_cursor(out, row + 1, 1);
    out.push_str("  ");
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&fit(&empty.subtitle, cols.saturating_sub(2)));
    out.push_str(Theme::reset());
    2
}
