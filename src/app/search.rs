//! Search controller state.
//!
//! [`SearchState`] owns the results list and the four mutually exclusive
//! display phases (idle, loading, failed, ready). Each submitted search bumps a
//! generation counter; only a response carrying the latest generation may
//! change state, so a slow response can never overwrite a newer search.

use crate::catalog::{SearchOutcome, SearchTicket};
use crate::domain::BookItem;

/// Shown when the catalog answers successfully with no items.
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// Shown for any transport, status, or decoding failure.
pub const SEARCH_FAILED_MESSAGE: &str = "An error occurred while searching for books.";

/// Display phase of the search area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No search has been submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last search produced a user-facing message instead of results.
    Failed(String),
    /// Results are populated.
    Ready,
}

/// Search query, results, and request bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    results: Vec<BookItem>,
    phase: SearchPhase,
    generation: u64,
    completed_at: Option<i64>,
}

impl SearchState {
    /// Starts a new search for `raw_query`.
    ///
    /// Returns `None` and leaves state untouched when the trimmed query is
    /// empty. Otherwise clears results and error, enters the loading phase,
    /// and returns the ticket identifying this search.
    pub fn begin(&mut self, raw_query: &str) -> Option<SearchTicket> {
        let query = raw_query.trim();
        if query.is_empty() {
            tracing::debug!("ignoring blank search submission");
            return None;
        }

        self.generation += 1;
        self.query = query.to_string();
        self.results.clear();
        self.phase = SearchPhase::Loading;

        tracing::debug!(request_id = self.generation, query = %self.query, "search started");

        Some(SearchTicket {
            id: self.generation,
            query: self.query.clone(),
        })
    }

    /// Applies the outcome of request `request_id`.
    ///
    /// Returns `false` if the response is stale (a newer search started since)
    /// or no search is in flight; state is not touched in that case.
    pub fn complete(&mut self, request_id: u64, outcome: SearchOutcome) -> bool {
        if request_id != self.generation || self.phase != SearchPhase::Loading {
            tracing::debug!(
                request_id,
                current = self.generation,
                "discarding stale search response"
            );
            return false;
        }

        match outcome {
            SearchOutcome::Found(books) => {
                tracing::debug!(count = books.len(), query = %self.query, "search results received");
                self.results = books;
                self.phase = SearchPhase::Ready;
            }
            SearchOutcome::Empty => {
                tracing::debug!(query = %self.query, "search returned no items");
                self.results.clear();
                self.phase = SearchPhase::Failed(NO_RESULTS_MESSAGE.to_string());
            }
            SearchOutcome::Failed(error) => {
                tracing::warn!(error = %error, query = %self.query, "error searching books");
                self.results.clear();
                self.phase = SearchPhase::Failed(SEARCH_FAILED_MESSAGE.to_string());
            }
        }

        self.completed_at = Some(chrono::Utc::now().timestamp());
        true
    }

    /// Last submitted (trimmed) query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current results in API response order.
    #[must_use]
    pub fn results(&self) -> &[BookItem] {
        &self.results
    }

    #[must_use]
    pub const fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// User-facing message of the last search, if it failed or found nothing.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Id of the most recently started search.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns a human-readable string describing when the last search finished.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Otherwise: "Xh ago"
    #[must_use]
    pub fn completed_ago(&self) -> Option<String> {
        const SECONDS_PER_MINUTE: i64 = 60;
        const SECONDS_PER_HOUR: i64 = 3600;

        let diff = chrono::Utc::now().timestamp() - self.completed_at?;
        Some(if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogError;

    fn dune() -> BookItem {
        BookItem::new("1", "Dune").with_authors(["Frank Herbert"])
    }

    #[test]
    fn blank_query_is_a_no_op() {
        let mut search = SearchState::default();
        assert!(search.begin("   \t").is_none());
        assert_eq!(search.phase(), &SearchPhase::Idle);
        assert_eq!(search.generation(), 0);
        assert!(search.query().is_empty());
    }

    #[test]
    fn begin_sets_loading_and_trims() {
        let mut search = SearchState::default();
        let ticket = search.begin("  dune ").unwrap();
        assert_eq!(ticket, SearchTicket { id: 1, query: "dune".to_string() });
        assert!(search.is_loading());
        assert_eq!(search.error(), None);
    }

    #[test]
    fn begin_discards_previous_results() {
        let mut search = SearchState::default();
        let ticket = search.begin("dune").unwrap();
        search.complete(ticket.id, SearchOutcome::Found(vec![dune()]));
        assert_eq!(search.results().len(), 1);

        search.begin("foundation").unwrap();
        assert!(search.results().is_empty());
    }

    #[test]
    fn found_replaces_results_and_clears_loading() {
        let mut search = SearchState::default();
        let ticket = search.begin("dune").unwrap();
        assert!(search.complete(ticket.id, SearchOutcome::Found(vec![dune()])));
        assert_eq!(search.phase(), &SearchPhase::Ready);
        assert_eq!(search.results(), &[dune()]);
        assert_eq!(search.completed_ago().as_deref(), Some("just now"));
    }

    #[test]
    fn empty_outcome_reports_no_results() {
        let mut search = SearchState::default();
        let ticket = search.begin("zzzz").unwrap();
        search.complete(ticket.id, SearchOutcome::Empty);
        assert!(!search.is_loading());
        assert_eq!(search.error(), Some(NO_RESULTS_MESSAGE));
        assert!(search.results().is_empty());
    }

    #[test]
    fn failure_reports_generic_message() {
        let mut search = SearchState::default();
        let ticket = search.begin("dune").unwrap();
        let failure = CatalogError::Status { status: 503, detail: "unavailable".to_string() };
        search.complete(ticket.id, SearchOutcome::Failed(failure));
        assert!(!search.is_loading());
        assert_eq!(search.error(), Some(SEARCH_FAILED_MESSAGE));
        assert!(search.results().is_empty());
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut search = SearchState::default();
        let first = search.begin("dune").unwrap();
        let second = search.begin("foundation").unwrap();

        assert!(!search.complete(first.id, SearchOutcome::Found(vec![dune()])));
        assert!(search.is_loading());
        assert!(search.results().is_empty());

        assert!(search.complete(second.id, SearchOutcome::Empty));
        assert_eq!(search.error(), Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn duplicate_response_is_ignored() {
        let mut search = SearchState::default();
        let ticket = search.begin("dune").unwrap();
        assert!(search.complete(ticket.id, SearchOutcome::Found(vec![dune()])));
        assert!(!search.complete(ticket.id, SearchOutcome::Empty));
        assert_eq!(search.results().len(), 1);
    }
}
