//! Tracing initialization and subscriber setup.
//!
//! Connects `tracing` macros to the file exporter:
//!
//! ```text
//! tracing spans → EnvFilter → tracing-opentelemetry → FileSpanExporter → reelmark-otlp.json
//! ```

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "reelmark-otlp.json";

/// Installs the global tracing subscriber with file-based OTLP export.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level`, defaulting to `info`. Traces are appended to
/// `<data_dir>/reelmark-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created or a
/// subscriber is already installed, this returns without doing anything.
///
/// # Example
///
/// ```rust
/// use reelmark::observability::init_tracing;
/// use reelmark::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     data_dir: dir.path().to_path_buf(),
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "Reelmark"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let trace_file = config.data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer(tracer::SCOPE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
