//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls Zellij directly. It mutates [`AppState`] and
//! returns actions; the plugin shim performs them. This keeps the whole
//! application layer testable without a Zellij host.
//!
//! [`AppState`]: crate::app::AppState
//!
//! # Example
//!
//! ```rust
//! use bookpilot::app::Action;
//! use bookpilot::catalog::{CatalogClient, SearchTicket};
//!
//! let ticket = SearchTicket { id: 1, query: "dune".to_string() };
//! let action = Action::FetchCatalog(CatalogClient::default().build_request(&ticket));
//! # let _ = action;
//! ```

use crate::assistant::AssistantConfig;
use crate::catalog::SearchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues a catalog GET request.
    ///
    /// The response is expected back as [`Event::SearchCompleted`] carrying the
    /// same request id.
    ///
    /// [`Event::SearchCompleted`]: crate::app::Event::SearchCompleted
    FetchCatalog(SearchRequest),

    /// Shows the assistant widget with the given configuration.
    OpenAssistant(AssistantConfig),
}
