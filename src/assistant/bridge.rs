//! Assistant bridge: keeps the assistant's instructions in step with the session.
//!
//! The bridge owns the label pair and the latest instructions string. The
//! application state calls [`AssistantBridge::refresh`] after every mutation of
//! the results or favorites, so the configuration handed to the widget is never
//! older than the state being rendered.

use super::summary::summarize;
use crate::domain::{BookItem, Result};

/// Default assistant title.
pub const DEFAULT_TITLE: &str = "Book Assistant";

/// Default greeting shown before the first exchange.
pub const DEFAULT_GREETING: &str = "Ask about your favorite or new books!";

/// Static label pair shown by the assistant widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantLabels {
    pub title: String,
    pub initial: String,
}

impl Default for AssistantLabels {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            initial: DEFAULT_GREETING.to_string(),
        }
    }
}

impl AssistantLabels {
    /// Title and greeting as one line, used to name the assistant's pane.
    #[must_use]
    pub fn pane_name(&self) -> String {
        if self.initial.is_empty() {
            return self.title.clone();
        }
        format!("{}: {}", self.title, self.initial)
    }
}

/// Everything the widget needs, passed by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub instructions: String,
    pub labels: AssistantLabels,
}

/// Boundary to the embeddable assistant.
///
/// The widget's conversation, network traffic, and rendering are its own
/// business. It only ever receives a configuration, and is asked to show
/// itself.
pub trait AssistantWidget {
    /// Receives the current configuration. Called on every render.
    fn configure(&mut self, config: AssistantConfig);

    /// Shows the assistant with the most recent configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget cannot be shown (e.g. nothing to launch).
    fn open(&mut self) -> Result<()>;
}

/// Wraps the session summary in the assistant's standing instructions.
#[must_use]
pub fn compose_instructions(summary: &str) -> String {
    format!(
        "You are assisting the user in discovering and managing books.\n\
         The user can search for new books, toggle favorites, etc.\n\
         Here's the current session data:\n\
         ---\n\
         {summary}\n\
         ---\n\
         If the user references these books or authors, provide helpful info.\n\
         If a book isn't in the summary, rely on general knowledge."
    )
}

/// Holds the labels and the instructions derived from the latest state.
#[derive(Debug, Clone)]
pub struct AssistantBridge {
    labels: AssistantLabels,
    instructions: String,
    revision: u64,
}

impl Default for AssistantBridge {
    fn default() -> Self {
        Self::new(AssistantLabels::default())
    }
}

impl AssistantBridge {
    /// Creates a bridge whose instructions describe an empty session.
    #[must_use]
    pub fn new(labels: AssistantLabels) -> Self {
        Self {
            labels,
            instructions: compose_instructions(&summarize(&[], &[])),
            revision: 0,
        }
    }

    /// Regenerates the instructions from the given collections.
    ///
    /// The revision advances only when the text actually changed.
    pub fn refresh(&mut self, results: &[BookItem], favorites: &[BookItem]) {
        let instructions = compose_instructions(&summarize(results, favorites));
        if instructions != self.instructions {
            self.instructions = instructions;
            self.revision += 1;
            tracing::debug!(
                revision = self.revision,
                results = results.len(),
                favorites = favorites.len(),
                "assistant instructions regenerated"
            );
        }
    }

    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    #[must_use]
    pub const fn labels(&self) -> &AssistantLabels {
        &self.labels
    }

    /// Number of times the instructions have changed.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of the configuration for the widget.
    #[must_use]
    pub fn config(&self) -> AssistantConfig {
        AssistantConfig {
            instructions: self.instructions.clone(),
            labels: self.labels.clone(),
        }
    }
}
