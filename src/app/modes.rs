//! Input mode and pane focus types.
//!
//! The application operates in one of two input modes:
//! - **Normal**: navigation and commands
//! - **Editing**: typing into the search query
//!
//! Independently, one of the two lists has the selection cursor:
//! - **Results**: the latest search results
//! - **Favorites**: the user's favorites
//!
//! # Example
//!
//! ```rust
//! use bookpilot::app::{InputMode, Pane};
//!
//! let mode = InputMode::Editing;
//! assert_eq!(Pane::Results.toggled(), Pane::Favorites);
//! # let _ = mode;
//! ```

/// Current input handling mode.
///
/// Determines whether characters edit the query or trigger commands, and which
/// footer hints are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), Tab (switch pane), / (edit query),
    /// f/Space/Enter (toggle favorite), a (assistant), q/Esc (hide).
    Normal,

    /// Query editing mode.
    ///
    /// Accepts characters and backspace; Enter submits, Esc returns to Normal.
    Editing,
}

/// List that currently owns the selection cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Results,
    Favorites,
}

impl Pane {
    /// Returns the other pane.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Results => Self::Favorites,
            Self::Favorites => Self::Results,
        }
    }
}
