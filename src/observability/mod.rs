//! Tracing with OpenTelemetry spans exported to a local OTLP JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → OtlpFileExporter → RotatingFile
//! ```
//!
//! Traces land in `~/.local/share/zellij/bookpilot/bookpilot-otlp.json`, one
//! OTLP document per line. The file rotates at 10MB, keeping three backups.
//!
//! The filter comes from the `trace_level` plugin option and defaults to
//! `info`. Any `EnvFilter` directive works, e.g. `bookpilot=debug`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: `SpanExporter` writing OTLP JSON
//! - [`rotation`]: Size-based rotating line writer

mod exporter;
mod init;
mod rotation;

pub use init::{init_tracing, trace_filter, DEFAULT_TRACE_LEVEL, TRACE_FILE_NAME};
pub use rotation::RotatingFile;
