//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) and
//! consumed by the renderer. They contain no business logic, only
//! display-ready data: truncated strings, selection flags, highlight ranges.
//!
//! # Example
//!
//! ```rust
//! use bookpilot::app::AppState;
//!
//! let state = AppState::default();
//! let vm = state.compute_viewmodel(30, 100);
//! assert!(vm.results.items.is_empty());
//! assert!(vm.favorites.empty_state.is_some());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Favorites list, shown above the search bar.
    pub favorites: ListSection,

    pub search_bar: SearchBarInfo,

    /// Loading, error, or summary line under the search bar.
    pub status: Option<StatusLine>,

    /// Search results list.
    pub results: ListSection,

    /// Details of the book under the cursor, if any.
    pub details: Option<BookDetails>,

    pub assistant: AssistantPanel,

    pub footer: FooterInfo,
}

/// A titled, windowed list of books.
#[derive(Debug, Clone)]
pub struct ListSection {
    /// Section title including count (e.g., " Search Results (10) ").
    pub title: String,

    /// Whether this section owns the selection cursor.
    pub is_focused: bool,

    /// Visible slice of the list.
    pub items: Vec<DisplayItem>,

    /// Number of rows reserved for this section.
    pub capacity: usize,

    /// Message shown instead of rows when the list is empty.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single book row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,

    /// Author line ("A, B" or "Unknown author(s)").
    pub authors: String,

    pub is_selected: bool,

    /// Whether the book is in the favorites.
    pub is_favorite: bool,

    /// Character ranges of the title matching the submitted query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Empty list message.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No favorite books yet.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search input box state.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query buffer.
    pub query: String,

    /// Whether keystrokes currently edit the query.
    pub is_editing: bool,
}

/// Kind of status line, selecting its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

/// Detail lines for the selected book.
#[derive(Debug, Clone)]
pub struct BookDetails {
    pub lines: Vec<String>,
}

/// Assistant label bar.
#[derive(Debug, Clone)]
pub struct AssistantPanel {
    pub title: String,
    pub greeting: String,

    /// Instructions revision, so the user can see the briefing update.
    pub revision: u64,
}
