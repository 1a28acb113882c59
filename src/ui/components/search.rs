//! Search bar and status line renderers.
//!
//! The search bar is a three-line box around the query. Its border uses the
//! search color while editing and the plain border color otherwise; a block
//! cursor trails the query while editing.

use crate::ui::helpers::{char_width, fit, pad_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, StatusKind, StatusLine};

const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search box starting at `row`. Returns the next available row.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_editing {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&border);
    out.push('┌');
    out.push_str(&"─".repeat(inner_width));
    out.push('┐');
    out.push_str(Theme::reset());

    let cursor = if search.is_editing { "█" } else { "" };
    let label = " Search books: ";
    let query = fit(&search.query, inner_width.saturating_sub(char_width(label) + 1));
    let used = char_width(label) + char_width(&query) + char_width(cursor);

    position_cursor(out, row + 1, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(label);
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&query);
    out.push_str(cursor);
    pad_line(out, used, inner_width);
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&border);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    row + 3
}

/// Renders the status line (or a blank line) at `row`.
pub fn render_status(out: &mut String, row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    let Some(status) = status else {
        return row + 1;
    };

    let color = match status.kind {
        StatusKind::Loading => &theme.colors.text_dim,
        StatusKind::Error => &theme.colors.error_fg,
        StatusKind::Info => &theme.colors.text_normal,
    };
    out.push_str("  ");
    out.push_str(&Theme::fg(color));
    out.push_str(&fit(&status.text, cols.saturating_sub(2)));
    out.push_str(Theme::reset());
    row + 1
}
