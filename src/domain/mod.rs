//! Domain layer for the Bookpilot plugin.
//!
//! Core types independent of Zellij APIs and rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Catalog entry model
//!
//! # Examples
//!
//! ```
//! use bookpilot::domain::{BookItem, Result};
//!
//! fn first_result() -> Result<BookItem> {
//!     Ok(BookItem::new("zyTCAlFPjgYC", "The Google Story"))
//! }
//! # first_result().unwrap();
//! ```

pub mod book;
pub mod error;

pub use book::{BookItem, UNKNOWN_AUTHORS};
pub use error::{BookpilotError, CatalogError, Result};
