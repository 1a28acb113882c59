//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin session: the query
//! buffer, the search controller, the favorites store, the assistant bridge,
//! and the cursor. The three collections are private; every method that
//! changes results or favorites ends by refreshing the assistant bridge, so
//! the instructions can never lag behind what is on screen.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot into a
//! [`UIViewModel`]: it splits the available rows between favorites and
//! results, windows each list around its cursor, and computes query highlight
//! ranges for result titles.
//!
//! # Example
//!
//! ```rust
//! use bookpilot::app::AppState;
//! use bookpilot::domain::BookItem;
//!
//! let mut state = AppState::default();
//! state.toggle_favorite(&BookItem::new("1", "Dune"));
//! assert!(state.assistant().instructions().contains("\"Dune\""));
//! ```

use super::favorites::Favorites;
use super::modes::{InputMode, Pane};
use super::search::{SearchPhase, SearchState};
use crate::assistant::{AssistantBridge, AssistantConfig, AssistantLabels};
use crate::catalog::{CatalogClient, SearchOutcome, SearchRequest};
use crate::domain::{BookItem, CatalogError};
use crate::ui::helpers::fit;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AssistantPanel, BookDetails, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ListSection,
    SearchBarInfo, StatusKind, StatusLine, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::collections::BTreeSet;

/// Rows used by everything except list rows: blank line, header (2), borders
/// (4), two section titles, search bar (3), status, details (3), assistant bar,
/// and footer.
const CHROME_ROWS: usize = 18;

/// Widest title shown before truncation.
const TITLE_MAX_CHARS: usize = 45;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query text being edited. Submitted with [`AppState::submit_search`].
    pub query: String,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// List owning the selection cursor.
    pub focus: Pane,

    /// Cursor within the results list.
    pub results_index: usize,

    /// Cursor within the favorites list.
    pub favorites_index: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// One-shot message shown in the status line (cleared on the next key).
    pub notice: Option<String>,

    web_access: bool,
    search: SearchState,
    favorites: Favorites,
    assistant: AssistantBridge,
    catalog: CatalogClient,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), CatalogClient::default(), AssistantLabels::default())
    }
}

impl AppState {
    /// Creates an empty session.
    ///
    /// # Parameters
    ///
    /// * `theme` - Color scheme for UI rendering
    /// * `catalog` - Endpoint settings for search requests
    /// * `labels` - Assistant title and greeting
    #[must_use]
    pub fn new(theme: Theme, catalog: CatalogClient, labels: AssistantLabels) -> Self {
        Self {
            query: String::new(),
            input_mode: InputMode::Normal,
            focus: Pane::Results,
            results_index: 0,
            favorites_index: 0,
            theme,
            notice: None,
            web_access: true,
            search: SearchState::default(),
            favorites: Favorites::default(),
            assistant: AssistantBridge::new(labels),
            catalog,
        }
    }

    #[must_use]
    pub const fn search(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    #[must_use]
    pub const fn assistant(&self) -> &AssistantBridge {
        &self.assistant
    }

    /// Configuration to hand to the assistant widget right now.
    #[must_use]
    pub fn assistant_config(&self) -> AssistantConfig {
        self.assistant.config()
    }

    #[must_use]
    pub fn is_favorited(&self, book_id: &str) -> bool {
        self.favorites.contains(book_id)
    }

    /// Submits the query buffer.
    ///
    /// Returns the request to issue, or `None` if the query is blank (in which
    /// case nothing changes).
    pub fn submit_search(&mut self) -> Option<SearchRequest> {
        let ticket = self.search.begin(&self.query)?;
        self.results_index = 0;
        self.sync_assistant();
        Some(self.catalog.build_request(&ticket))
    }

    /// Whether catalog requests can be sent. Assumed until the host says otherwise.
    #[must_use]
    pub const fn web_access(&self) -> bool {
        self.web_access
    }

    /// Records the host's answer to the web access request.
    ///
    /// A denial fails the search in flight, since its response will never
    /// arrive.
    pub fn set_web_access(&mut self, granted: bool) {
        self.web_access = granted;
        if !granted && self.search.is_loading() {
            let request_id = self.search.generation();
            self.complete_search(request_id, SearchOutcome::Failed(CatalogError::PermissionDenied));
        }
    }

    /// Applies a catalog response. Returns `false` for stale responses.
    pub fn complete_search(&mut self, request_id: u64, outcome: SearchOutcome) -> bool {
        if !self.search.complete(request_id, outcome) {
            return false;
        }
        self.results_index = 0;
        self.sync_assistant();
        true
    }

    /// Toggles `book` in the favorites. Returns the new membership.
    pub fn toggle_favorite(&mut self, book: &BookItem) -> bool {
        let favorited = self.favorites.toggle(book);
        self.clamp_selection();
        self.sync_assistant();
        favorited
    }

    /// Toggles the book under the cursor. Returns `None` if nothing is selected.
    pub fn toggle_selected_favorite(&mut self) -> Option<bool> {
        let book = self.selected_book()?.clone();
        Some(self.toggle_favorite(&book))
    }

    /// Book under the cursor in the focused pane.
    #[must_use]
    pub fn selected_book(&self) -> Option<&BookItem> {
        match self.focus {
            Pane::Results => self.search.results().get(self.results_index),
            Pane::Favorites => self.favorites.as_slice().get(self.favorites_index),
        }
    }

    /// Moves the cursor down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }
        let index = self.focused_index_mut();
        *index = (*index + 1) % len;
    }

    /// Moves the cursor up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            return;
        }
        let index = self.focused_index_mut();
        *index = if *index == 0 { len - 1 } else { *index - 1 };
    }

    /// Moves the cursor to the other list.
    pub fn switch_pane(&mut self) {
        self.focus = self.focus.toggled();
        self.clamp_selection();
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Pane::Results => self.search.results().len(),
            Pane::Favorites => self.favorites.len(),
        }
    }

    fn focused_index_mut(&mut self) -> &mut usize {
        match self.focus {
            Pane::Results => &mut self.results_index,
            Pane::Favorites => &mut self.favorites_index,
        }
    }

    fn clamp_selection(&mut self) {
        self.results_index = self.results_index.min(self.search.results().len().saturating_sub(1));
        self.favorites_index = self.favorites_index.min(self.favorites.len().saturating_sub(1));
    }

    fn sync_assistant(&mut self) {
        self.assistant
            .refresh(self.search.results(), self.favorites.as_slice());
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let title_width = TITLE_MAX_CHARS.min(cols.saturating_sub(4)).max(8);
        let available = rows.saturating_sub(CHROME_ROWS).max(2);
        let favorites_capacity = self.favorites.len().clamp(1, (available / 3).max(1));
        let results_capacity = available.saturating_sub(favorites_capacity).max(1);

        let matcher = if self.search.query().is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        UIViewModel {
            header: HeaderInfo {
                title: " Book Explorer ".to_string(),
                subtitle: "Search for books & manage favorites. Ask the assistant about them!"
                    .to_string(),
            },
            favorites: self.compute_favorites_section(favorites_capacity, title_width),
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                is_editing: self.input_mode == InputMode::Editing,
            },
            status: self.compute_status(),
            results: self.compute_results_section(results_capacity, title_width, matcher.as_ref()),
            details: self.compute_details(),
            assistant: AssistantPanel {
                title: self.assistant.labels().title.clone(),
                greeting: self.assistant.labels().initial.clone(),
                revision: self.assistant.revision(),
            },
            footer: self.compute_footer(),
        }
    }

    fn compute_favorites_section(&self, capacity: usize, title_width: usize) -> ListSection {
        let books = self.favorites.as_slice();
        let is_focused = self.focus == Pane::Favorites;
        let empty_state = books.is_empty().then(|| EmptyState {
            message: "No favorite books yet.".to_string(),
            subtitle: "Try adding some from the search results below!".to_string(),
        });

        ListSection {
            title: format!(" My Favorites ({}) ", books.len()),
            is_focused,
            items: self.window_items(books, self.favorites_index, capacity, title_width, is_focused, None),
            capacity,
            empty_state,
        }
    }

    fn compute_results_section(
        &self,
        capacity: usize,
        title_width: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> ListSection {
        let books = self.search.results();
        let is_focused = self.focus == Pane::Results;
        let empty_state = match self.search.phase() {
            SearchPhase::Idle => Some(EmptyState {
                message: "No search yet.".to_string(),
                subtitle: "Press / and enter a title or author.".to_string(),
            }),
            _ => None,
        };

        ListSection {
            title: format!(" Search Results ({}) ", books.len()),
            is_focused,
            items: self.window_items(books, self.results_index, capacity, title_width, is_focused, matcher),
            capacity,
            empty_state,
        }
    }

    /// Builds display rows for the visible window of `books`.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Center the window around the selected index
    /// 2. Shift it back if it would run past the end
    fn window_items(
        &self,
        books: &[BookItem],
        selected: usize,
        capacity: usize,
        title_width: usize,
        is_focused: bool,
        matcher: Option<&SkimMatcherV2>,
    ) -> Vec<DisplayItem> {
        if books.is_empty() {
            return vec![];
        }

        let mut start = selected.saturating_sub(capacity / 2);
        let end = (start + capacity).min(books.len());
        if end - start < capacity && books.len() >= capacity {
            start = end.saturating_sub(capacity);
        }

        books[start..end]
            .iter()
            .enumerate()
            .map(|(offset, book)| {
                let title = fit(&book.title, title_width);
                let visible_len = title.chars().count();
                let highlight_ranges = matcher
                    .map(|m| self.compute_highlight_ranges(&book.title, m))
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|&(s, _)| s < visible_len)
                    .map(|(s, e)| (s, e.min(visible_len)))
                    .collect();

                DisplayItem {
                    title,
                    authors: book.author_line(),
                    is_selected: is_focused && start + offset == selected,
                    is_favorite: self.favorites.contains(&book.id),
                    highlight_ranges,
                }
            })
            .collect()
    }

    /// Computes character ranges of `text` matching the submitted query.
    ///
    /// Each whitespace-separated query token is fuzzy-matched on its own; the
    /// matched indices are merged and coalesced into contiguous ranges.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let indices: BTreeSet<usize> = self
            .search
            .query()
            .split_whitespace()
            .filter_map(|token| matcher.fuzzy_indices(text, token))
            .flat_map(|(_score, indices)| indices)
            .collect();

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_status(&self) -> Option<StatusLine> {
        if let Some(notice) = &self.notice {
            return Some(StatusLine {
                text: notice.clone(),
                kind: StatusKind::Info,
            });
        }

        match self.search.phase() {
            SearchPhase::Idle => None,
            SearchPhase::Loading => Some(StatusLine {
                text: "Searching books...".to_string(),
                kind: StatusKind::Loading,
            }),
            SearchPhase::Failed(message) => Some(StatusLine {
                text: message.clone(),
                kind: StatusKind::Error,
            }),
            SearchPhase::Ready => {
                let count = self.search.results().len();
                let ago = self.search.completed_ago().unwrap_or_default();
                Some(StatusLine {
                    text: format!("{count} results for \"{}\" ({ago})", self.search.query()),
                    kind: StatusKind::Info,
                })
            }
        }
    }

    fn compute_details(&self) -> Option<BookDetails> {
        let book = self.selected_book()?;
        let mut lines = vec![format!("Authors: {}", book.author_line())];
        lines.push(
            book.description_preview()
                .unwrap_or_else(|| "No description.".to_string()),
        );
        if let Some(thumbnail) = &book.thumbnail {
            lines.push(format!("Cover: {thumbnail}"));
        }
        Some(BookDetails { lines })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.focus) {
            (InputMode::Editing, _) => {
                "Enter: search  Esc: stop editing  Ctrl+n/p: navigate  Type to edit query"
            }
            (InputMode::Normal, Pane::Results) => {
                "j/k: navigate  Tab: favorites  /: search  f: toggle favorite  a: assistant  q: hide"
            }
            (InputMode::Normal, Pane::Favorites) => {
                "j/k: navigate  Tab: results  /: search  f: remove favorite  a: assistant  q: hide"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str) -> BookItem {
        BookItem::new(id, title).with_authors(["Someone"])
    }

    fn state_with_results(books: Vec<BookItem>) -> AppState {
        let mut state = AppState::default();
        state.query = "dune".to_string();
        let request = state.submit_search().unwrap();
        assert!(state.complete_search(request.id, SearchOutcome::Found(books)));
        state
    }

    #[test]
    fn favoriting_keeps_book_in_results() {
        let mut state = state_with_results(vec![book("1", "Dune"), book("2", "Dune Messiah")]);
        assert_eq!(state.toggle_selected_favorite(), Some(true));
        assert_eq!(state.search().results().len(), 2);
        assert!(state.is_favorited("1"));
    }

    #[test]
    fn denied_web_access_fails_search_in_flight() {
        let mut state = AppState::default();
        state.query = "dune".to_string();
        let request = state.submit_search().unwrap();

        state.set_web_access(false);
        assert!(!state.web_access());
        assert!(!state.search().is_loading());
        assert_eq!(state.search().error(), Some(crate::app::SEARCH_FAILED_MESSAGE));
        assert!(!state.complete_search(request.id, SearchOutcome::Empty));
    }

    #[test]
    fn new_search_keeps_favorites() {
        let mut state = state_with_results(vec![book("1", "Dune")]);
        state.toggle_selected_favorite();
        state.query = "foundation".to_string();
        state.submit_search().unwrap();
        assert!(state.search().results().is_empty());
        assert_eq!(state.favorites().len(), 1);
    }

    #[test]
    fn every_mutation_refreshes_instructions() {
        let mut state = AppState::default();
        assert_eq!(state.assistant().revision(), 0);

        state.query = "dune".to_string();
        let request = state.submit_search().unwrap();
        // results were already empty, so the summary is unchanged
        assert_eq!(state.assistant().revision(), 0);

        state.complete_search(request.id, SearchOutcome::Found(vec![book("1", "Dune")]));
        assert_eq!(state.assistant().revision(), 1);
        assert!(state.assistant_config().instructions.contains("Current search results:"));

        state.toggle_selected_favorite();
        assert_eq!(state.assistant().revision(), 2);
        assert!(state.assistant_config().instructions.contains("User's favorites:"));
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut state = state_with_results(vec![book("1", "A"), book("2", "B"), book("3", "C")]);
        state.move_selection_up();
        assert_eq!(state.results_index, 2);
        state.move_selection_down();
        assert_eq!(state.results_index, 0);

        state.toggle_selected_favorite();
        state.switch_pane();
        assert_eq!(state.selected_book().map(|b| b.id.as_str()), Some("1"));
        state.toggle_selected_favorite();
        assert_eq!(state.favorites_index, 0);
        assert!(state.selected_book().is_none());
    }

    #[test]
    fn viewmodel_windows_results_around_cursor() {
        let books: Vec<BookItem> = (0..50).map(|i| book(&i.to_string(), &format!("Book {i}"))).collect();
        let mut state = state_with_results(books);
        state.results_index = 40;

        let vm = state.compute_viewmodel(30, 100);
        let capacity = vm.results.capacity;
        assert_eq!(vm.results.items.len(), capacity);
        let selected: Vec<&DisplayItem> = vm.results.items.iter().filter(|i| i.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "Book 40");
    }

    #[test]
    fn viewmodel_marks_favorites_and_highlights_query() {
        let mut state = state_with_results(vec![book("1", "Dune"), book("2", "Foundation")]);
        state.toggle_selected_favorite();

        let vm = state.compute_viewmodel(30, 100);
        assert!(vm.results.items[0].is_favorite);
        assert!(!vm.results.items[1].is_favorite);
        assert_eq!(vm.results.items[0].highlight_ranges, vec![(0, 4)]);
        assert_eq!(vm.favorites.items.len(), 1);
        assert!(vm.favorites.empty_state.is_none());
    }

    #[test]
    fn viewmodel_status_follows_phase() {
        let mut state = AppState::default();
        assert!(state.compute_viewmodel(30, 100).status.is_none());

        state.query = "dune".to_string();
        let request = state.submit_search().unwrap();
        let status = state.compute_viewmodel(30, 100).status.unwrap();
        assert_eq!(status.kind, StatusKind::Loading);

        state.complete_search(request.id, SearchOutcome::Empty);
        let status = state.compute_viewmodel(30, 100).status.unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "No results found");
    }
}
