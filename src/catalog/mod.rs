//! Book catalog protocol: request construction and response decoding.
//!
//! Catalog searches are asynchronous host calls. The application layer emits a
//! [`SearchRequest`] inside an action, the plugin shim issues it with Zellij's
//! `web_request`, and the response returns as an event that is decoded with
//! [`decode_response`].
//!
//! - `request`: URL building and request-id context tagging
//! - `response`: Wire types and outcome classification

pub mod request;
pub mod response;

pub use request::{CatalogClient, SearchRequest, SearchTicket, DEFAULT_ENDPOINT, REQUEST_ID_KEY};
pub use response::{decode_response, SearchOutcome};
