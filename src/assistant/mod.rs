//! Assistant integration: session summary and widget bridge.
//!
//! ```text
//! results + favorites → summarize → compose_instructions → AssistantBridge
//!                                                              │ config()
//!                                                              ▼
//!                                                      dyn AssistantWidget
//! ```
//!
//! - [`summary`]: Pure formatter for the session summary
//! - [`bridge`]: Instructions, labels, and the widget trait

pub mod bridge;
pub mod summary;

pub use bridge::{
    compose_instructions, AssistantBridge, AssistantConfig, AssistantLabels, AssistantWidget,
    DEFAULT_GREETING, DEFAULT_TITLE,
};
pub use summary::{describe, summarize};
