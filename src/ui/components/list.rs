//! Book list renderer, used for both favorites and search results.
//!
//! Each row shows a favorite marker, the title (query matches highlighted),
//! and the dimmed author line:
//!
//! ```text
//! ★ Dune                                          Frank Herbert
//!   Dune Messiah                                  Unknown author(s)
//! ```

use super::empty::render_empty_state;
use crate::ui::helpers::{self, char_width, fit, pad_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListSection};

const TITLE_COLUMN: usize = 48;
const MARKER_WIDTH: usize = 2;

/// Renders a titled list occupying `1 + section.capacity` rows.
///
/// Returns the next available row.
pub fn render_list_section(
    out: &mut String,
    row: usize,
    section: &ListSection,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    if section.is_focused {
        out.push_str(&Theme::fg(&theme.colors.search_bar_border));
        out.push('▸');
    } else {
        out.push_str(&Theme::fg(&theme.colors.header_fg));
        out.push(' ');
    }
    out.push_str(&section.title);
    out.push_str(Theme::reset());

    let first = row + 1;
    if let Some(empty) = &section.empty_state {
        render_empty_state(out, first, section.capacity, empty, theme, cols);
    } else {
        for (offset, item) in section.items.iter().take(section.capacity).enumerate() {
            render_item(out, first + offset, item, theme, cols);
        }
    }

    first + section.capacity
}

fn render_item(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) {
    position_cursor(out, row, 1);

    if item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    }

    if item.is_favorite {
        if !item.is_selected {
            out.push_str(&Theme::fg(&theme.colors.favorite_fg));
        }
        out.push_str("★ ");
    } else {
        out.push_str("  ");
    }

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    helpers::push_highlighted(out, &item.title, &item.highlight_ranges, theme, item.is_selected);

    let title_len = char_width(&item.title);
    out.push_str(&" ".repeat(TITLE_COLUMN.saturating_sub(title_len + MARKER_WIDTH).max(1)));
    let used = (title_len + MARKER_WIDTH).max(TITLE_COLUMN - 1) + 1;

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    let authors = fit(&item.authors, cols.saturating_sub(used));
    let authors_len = char_width(&authors);
    out.push_str(&authors);
    pad_line(out, used + authors_len, cols);

    out.push_str(Theme::reset());
}
