//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from [`AppState`], then let
//! the components draw it into a frame that is printed in one go.
//!
//! # Example
//!
//! ```rust
//! use bookpilot::app::AppState;
//! use bookpilot::ui::renderer::frame;
//!
//! let state = AppState::default();
//! let screen = frame(&state, 24, 80);
//! assert!(screen.contains("My Favorites (0)"));
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", frame(state, rows, cols));
}

/// Builds the ANSI frame for `state` without printing it.
#[must_use]
pub fn frame(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_frame(&viewmodel, &state.theme, cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SearchOutcome;
    use crate::domain::BookItem;

    #[test]
    fn frame_shows_results_favorites_and_assistant() {
        let mut state = AppState::default();
        state.query = "dune".to_string();
        let request = state.submit_search().unwrap();
        state.complete_search(
            request.id,
            SearchOutcome::Found(vec![BookItem::new("1", "Dune").with_authors(["Frank Herbert"])]),
        );
        state.toggle_selected_favorite();

        let screen = frame(&state, 30, 100);
        assert!(screen.contains("Search Results (1)"));
        assert!(screen.contains("My Favorites (1)"));
        assert!(screen.contains("★ "));
        assert!(screen.contains("Frank Herbert"));
        assert!(screen.contains("Book Assistant"));
        assert!(screen.contains("briefing #2"));
    }

    #[test]
    fn frame_shows_error_message() {
        let mut state = AppState::default();
        state.query = "zzzz".to_string();
        let request = state.submit_search().unwrap();
        state.complete_search(request.id, SearchOutcome::Empty);

        let screen = frame(&state, 30, 100);
        assert!(screen.contains("No results found"));
        assert!(screen.contains(&crate::ui::Theme::fg(&state.theme.colors.error_fg)));
    }

    #[test]
    fn tiny_terminals_do_not_panic() {
        let state = AppState::default();
        let _ = frame(&state, 1, 1);
        let _ = frame(&state, 0, 0);
    }
}
