//! Composable UI component renderers.
//!
//! Each component writes one part of the screen into the frame buffer and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title and subtitle
//! - [`list`]: Favorites and results lists
//! - [`search`]: Query box and status line
//! - [`details`]: Selected book details
//! - [`assistant`]: Assistant title, greeting, and briefing revision
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Empty list message
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header - 2 lines]
//! [Border]
//! [Favorites title + rows]
//! [Border]
//! [Search Bar - 3 lines]
//! [Status]
//! [Results title + rows]
//! [Details - 3 lines]
//! [Border]
//! [Assistant bar]
//! [Border]
//! [Footer]
//! ```

mod assistant;
mod details;
mod empty;
mod footer;
mod header;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use assistant::render_assistant_bar;
use details::render_details;
use footer::render_footer;
use header::render_header;
use list::render_list_section;
use search::{render_search_bar, render_status};

/// Renders a horizontal border line at `row`. Returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the whole screen into a new frame buffer.
#[must_use]
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    let border = &theme.colors.border;
    let mut row = 2;

    row = render_header(&mut out, row, &vm.header, theme, cols);
    row = render_border(&mut out, row, border, cols);
    row = render_list_section(&mut out, row, &vm.favorites, theme, cols);
    row = render_border(&mut out, row, border, cols);
    row = render_search_bar(&mut out, row, &vm.search_bar, theme, cols);
    row = render_status(&mut out, row, vm.status.as_ref(), theme, cols);
    row = render_list_section(&mut out, row, &vm.results, theme, cols);
    row = render_details(&mut out, row, vm.details.as_ref(), theme, cols);
    row = render_border(&mut out, row, border, cols);
    row = render_assistant_bar(&mut out, row, &vm.assistant, theme, cols);
    row = render_border(&mut out, row, border, cols);
    render_footer(&mut out, row, &vm.footer, theme, cols);

    out
}
