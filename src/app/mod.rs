//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! catalog/assistant/domain layers. It implements the event-driven loop that
//! powers the interactive UI.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Catalog Responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`favorites`]: Ordered, duplicate-free favorites store
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and pane focus types
//! - [`search`]: Search controller with stale-response rejection
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use bookpilot::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(render && actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod favorites;
pub mod handler;
pub mod modes;
pub mod search;
pub mod state;

pub use actions::Action;
pub use favorites::Favorites;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Pane};
pub use search::{SearchPhase, SearchState, NO_RESULTS_MESSAGE, SEARCH_FAILED_MESSAGE};
pub use state::AppState;
