//! Subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "bookpilot-otlp.json";

const SERVICE_NAME: &str = "Bookpilot";

/// Builds the span filter for `config`.
///
/// An unparseable directive falls back to [`DEFAULT_TRACE_LEVEL`].
///
/// ```rust
/// use bookpilot::observability::trace_filter;
/// use bookpilot::Config;
///
/// let config = Config { trace_level: Some("debug".to_string()), ..Default::default() };
/// assert_eq!(trace_filter(&config).to_string(), "debug");
/// ```
#[must_use]
pub fn trace_filter(config: &Config) -> EnvFilter {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL))
}

/// Installs the global subscriber.
///
/// Creates the data directory if needed. If that fails, or a subscriber is
/// already installed, tracing stays off; the plugin works the same either way.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(trace_filter(config))
        .with(otel_layer)
        .try_init();
}
