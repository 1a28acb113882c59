//! Header component: centered title with a dimmed subtitle underneath.

use crate::ui::helpers::{char_width, fit, pad_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the two header lines starting at `row`.
///
/// Returns the next available row.
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = fit(&header.title, cols);
    let title_len = char_width(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&" ".repeat(padding));
    out.push_str(&title);
    pad_line(out, padding + title_len, cols);
    out.push_str(Theme::reset());

    let subtitle = fit(&header.subtitle, cols);
    let sub_padding = cols.saturating_sub(char_width(&subtitle)) / 2;
    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(sub_padding));
    out.push_str(&subtitle);
    out.push_str(Theme::reset());

    row + 2
}
