//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and catalog responses, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `SwitchPane`
//! - **Query editing**: `EditQuery`, `Char`, `Backspace`, `SubmitQuery`, `Escape`
//! - **Commands**: `ToggleFavorite`, `OpenAssistant`, `CloseFocus`
//! - **System**: `SearchCompleted`, `AssistantFailed`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use bookpilot::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::default();
//! handle_event(&mut state, &Event::EditQuery)?;
//! for c in "dune".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::SubmitQuery)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchCatalog(_)]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::catalog::{decode_response, SearchOutcome};
use crate::domain::CatalogError;
use crate::domain::error::Result;

/// Events triggered by user input or plugin runtime callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Moves the cursor between results and favorites.
    SwitchPane,
    /// Starts editing the query.
    EditQuery,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Submits the query to the catalog.
    SubmitQuery,
    /// Stops editing the query, keeping its text.
    Escape,
    /// Adds or removes the selected book from the favorites.
    ToggleFavorite,
    /// Shows the assistant with the current briefing.
    OpenAssistant,
    /// Hides the plugin UI.
    CloseFocus,

    /// Reports a catalog HTTP response.
    SearchCompleted {
        /// Id carried in the request context.
        request_id: u64,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Reports that the assistant widget could not be shown.
    AssistantFailed {
        /// Error message describing the failure.
        error: String,
    },

    /// Reports the outcome of the permission request.
    PermissionsResult {
        granted: bool,
    },
}

impl Event {
    const fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Self::SearchCompleted { .. } | Self::AssistantFailed { .. } | Self::PermissionsResult { .. }
        )
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A render flag and the actions to execute in sequence. The action list may
/// be empty if the event requires no side effects.
///
/// # Errors
///
/// Returns errors from state mutation methods.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let had_notice = event.is_user_input() && state.notice.take().is_some();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::SwitchPane => {
            state.switch_pane();
            tracing::debug!(focus = ?state.focus, "switched pane");
            Ok((true, vec![]))
        }
        Event::EditQuery => {
            state.input_mode = InputMode::Editing;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Editing {
                return Ok((had_notice, vec![]));
            }
            state.query.push(*c);
            tracing::trace!(query = %state.query, char = %c, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Editing {
                return Ok((had_notice, vec![]));
            }
            state.query.pop();
            Ok((true, vec![]))
        }
        Event::SubmitQuery => {
            let Some(request) = state.submit_search() else {
                tracing::debug!("blank query, nothing to submit");
                return Ok((had_notice, vec![]));
            };

            state.input_mode = InputMode::Normal;
            state.focus = super::modes::Pane::Results;

            if !state.web_access() {
                tracing::warn!(request_id = request.id, "web access denied, search not sent");
                state.complete_search(request.id, SearchOutcome::Failed(CatalogError::PermissionDenied));
                return Ok((true, vec![]));
            }

            tracing::info!(request_id = request.id, query = %state.search().query(), "search submitted");
            Ok((true, vec![Action::FetchCatalog(request)]))
        }
        Event::Escape => {
            if state.input_mode == InputMode::Normal {
                return Ok((had_notice, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ToggleFavorite => match state.toggle_selected_favorite() {
            Some(favorited) => {
                tracing::debug!(favorited, total = state.favorites().len(), "favorite toggled");
                Ok((true, vec![]))
            }
            None => {
                tracing::debug!("no book selected");
                Ok((had_notice, vec![]))
            }
        },
        Event::OpenAssistant => {
            tracing::debug!(revision = state.assistant().revision(), "opening assistant");
            Ok((had_notice, vec![Action::OpenAssistant(state.assistant_config())]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchCompleted { request_id, status, body } => {
            let outcome = decode_response(*status, body);
            if state.complete_search(*request_id, outcome) {
                tracing::debug!(
                    request_id,
                    status,
                    results = state.search().results().len(),
                    "search completed"
                );
                Ok((true, vec![]))
            } else {
                tracing::debug!(request_id, current = state.search().generation(), "discarding stale response");
                Ok((false, vec![]))
            }
        }
        Event::AssistantFailed { error } => {
            tracing::warn!(error = %error, "assistant unavailable");
            state.notice = Some(format!("Assistant unavailable: {error}"));
            Ok((true, vec![]))
        }
        Event::PermissionsResult { granted } => {
            state.set_web_access(*granted);
            if *granted {
                return Ok((false, vec![]));
            }
            state.notice =
                Some("Permissions denied: searching and the assistant are disabled.".to_string());
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Pane;

    const DUNE_BODY: &str = r#"{"items":[
        {"id":"a","volumeInfo":{"title":"Dune","authors":["Frank Herbert"]}},
        {"id":"b","volumeInfo":{"title":"Dune Messiah"}}
    ]}"#;

    fn type_query(state: &mut AppState, query: &str) {
        handle_event(state, &Event::EditQuery).unwrap();
        for c in query.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn submit(state: &mut AppState) -> u64 {
        let (_, actions) = handle_event(state, &Event::SubmitQuery).unwrap();
        match actions.as_slice() {
            [Action::FetchCatalog(request)] => request.id,
            other => panic!("expected a fetch, got {other:?}"),
        }
    }

    fn respond(state: &mut AppState, request_id: u64, status: u16, body: &str) -> bool {
        let event = Event::SearchCompleted {
            request_id,
            status,
            body: body.as_bytes().to_vec(),
        };
        handle_event(state, &event).unwrap().0
    }

    #[test]
    fn chars_are_ignored_outside_editing() {
        let mut state = AppState::default();
        let (render, _) = handle_event(&mut state, &Event::Char('j')).unwrap();
        assert!(!render);
        assert!(state.query.is_empty());
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut state = AppState::default();
        type_query(&mut state, "   ");
        let (_, actions) = handle_event(&mut state, &Event::SubmitQuery).unwrap();
        assert!(actions.is_empty());
        assert!(!state.search().is_loading());
        assert_eq!(state.input_mode, InputMode::Editing);
    }

    #[test]
    fn blank_submit_keeps_previous_error() {
        let mut state = AppState::default();
        type_query(&mut state, "dune");
        let id = submit(&mut state);
        respond(&mut state, id, 500, "boom");

        type_query(&mut state, "");
        state.query = "  ".to_string();
        let (_, actions) = handle_event(&mut state, &Event::SubmitQuery).unwrap();
        assert!(actions.is_empty());
        assert!(!state.search().is_loading());
        assert_eq!(state.search().error(), Some("An error occurred while searching for books."));
        assert_eq!(state.search().generation(), id);
    }

    #[test]
    fn blank_submit_keeps_previous_results() {
        let mut state = AppState::default();
        type_query(&mut state, "dune");
        let id = submit(&mut state);
        respond(&mut state, id, 200, DUNE_BODY);
        let before = state.search().results().to_vec();

        type_query(&mut state, "");
        state.query.clear();
        let (_, actions) = handle_event(&mut state, &Event::SubmitQuery).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.search().results(), before.as_slice());
        assert_eq!(state.search().error(), None);
        assert!(!state.search().is_loading());
    }

    #[test]
    fn search_after_permission_denial_fails_without_fetching() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(state.notice.is_some());

        type_query(&mut state, "dune");
        let (render, actions) = handle_event(&mut state, &Event::SubmitQuery).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.search().is_loading());
        assert_eq!(state.search().error(), Some("An error occurred while searching for books."));
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn late_grant_allows_fetching_again() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        type_query(&mut state, "dune");
        submit(&mut state);
        assert!(state.search().is_loading());
    }

    #[test]
    fn submit_then_response_populates_results() {
        let mut state = AppState::default();
        type_query(&mut state, "dune");
        let id = submit(&mut state);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search().is_loading());

        assert!(respond(&mut state, id, 200, DUNE_BODY));
        let titles: Vec<&str> = state.search().results().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Dune Messiah"]);
        assert!(state.assistant().instructions().contains("\"Dune Messiah\" by Unknown author(s)"));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = AppState::default();
        type_query(&mut state, "dune");
        let first = submit(&mut state);
        type_query(&mut state, " messiah");
        let second = submit(&mut state);

        assert!(!respond(&mut state, first, 200, DUNE_BODY));
        assert!(state.search().is_loading());
        assert!(respond(&mut state, second, 500, "boom"));
        assert_eq!(state.search().error(), Some("An error occurred while searching for books."));
    }

    #[test]
    fn toggle_favorite_from_both_panes() {
        let mut state = AppState::default();
        type_query(&mut state, "dune");
        let id = submit(&mut state);
        respond(&mut state, id, 200, DUNE_BODY);

        handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert!(state.is_favorited("a"));

        handle_event(&mut state, &Event::SwitchPane).unwrap();
        assert_eq!(state.focus, Pane::Favorites);
        handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert!(state.favorites().is_empty());
        assert_eq!(state.search().results().len(), 2);
    }

    #[test]
    fn open_assistant_carries_current_briefing() {
        let mut state = AppState::default();
        let (_, actions) = handle_event(&mut state, &Event::OpenAssistant).unwrap();
        match actions.as_slice() {
            [Action::OpenAssistant(config)] => {
                assert!(config.instructions.contains("No current search results."));
                assert_eq!(config.labels.title, "Book Assistant");
            }
            other => panic!("expected assistant action, got {other:?}"),
        }
    }

    #[test]
    fn notice_clears_on_next_key() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::AssistantFailed { error: "no command".to_string() }).unwrap();
        assert!(state.notice.is_some());

        let (render, _) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(render);
        assert!(state.notice.is_none());
    }

    #[test]
    fn escape_leaves_editing_and_keeps_query() {
        let mut state = AppState::default();
        type_query(&mut state, "du");
        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query, "d");
    }
}
