//! Detail lines for the book under the cursor.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BookDetails;

/// Rows reserved for details, whether or not a book is selected.
pub const DETAILS_ROWS: usize = 3;

/// Renders up to [`DETAILS_ROWS`] detail lines at `row`.
pub fn render_details(out: &mut String, row: usize, details: Option<&BookDetails>, theme: &Theme, cols: usize) -> usize {
    if let Some(details) = details {
        for (offset, line) in details.lines.iter().take(DETAILS_ROWS).enumerate() {
            position_cursor(out, row + offset, 1);
            out.push_str("  ");
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&fit(line, cols.saturating_sub(2)));
            out.push_str(Theme::reset());
        }
    }
    row + DETAILS_ROWS
}
