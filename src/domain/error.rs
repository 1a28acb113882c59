//! Error types for the Bookpilot plugin.
//!
//! This module defines the centralized error type [`BookpilotError`], the
//! catalog-specific [`CatalogError`], and a [`Result`] alias. All errors are
//! implemented using the `thiserror` crate.
//!
//! Catalog errors never reach the user verbatim: the search controller logs
//! them and shows a single generic message instead.

use thiserror::Error;

/// Failure while talking to the book catalog.
///
/// Every variant collapses into the same user-facing "search failed" outcome;
/// the variant only matters for diagnostics.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog answered with a non-2xx status.
    ///
    /// Zellij also reports transport failures this way, so a refused
    /// connection and a server error are indistinguishable here.
    #[error("catalog request failed with status {status}: {detail}")]
    Status {
        /// HTTP status code returned by the host.
        status: u16,
        /// Leading part of the response body, for logs.
        detail: String,
    },

    /// The host refused web access, so no request was sent.
    #[error("web access permission was denied")]
    PermissionDenied,

    /// The response body was not the expected JSON shape.
    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The main error type for Bookpilot operations.
///
/// # Examples
///
/// ```
/// use bookpilot::domain::BookpilotError;
///
/// fn open_assistant(command: &[String]) -> Result<(), BookpilotError> {
///     if command.is_empty() {
///         return Err(BookpilotError::Assistant("no assistant_command configured".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(open_assistant(&[]).is_err());
/// ```
#[derive(Debug, Error)]
pub enum BookpilotError {
    /// Catalog search failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations such as reading a
    /// custom theme file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The assistant widget could not be shown.
    #[error("Assistant error: {0}")]
    Assistant(String),
}

/// A specialized `Result` type for Bookpilot operations.
pub type Result<T> = std::result::Result<T, BookpilotError>;
