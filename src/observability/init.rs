//! Subscriber setup: `tracing` spans → OpenTelemetry → rotating OTLP file.

use super::{tracer, SCOPE_NAME, SERVICE_NAME, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Location of the live trace file inside the plugin sandbox.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    crate::infrastructure::get_data_dir().join(TRACE_FILE_NAME)
}

/// Installs the global subscriber.
///
/// The filter comes from `config.trace_level`, falling back to
/// [`DEFAULT_TRACE_LEVEL`] when unset or unparsable. Tracing is optional:
/// when the data directory cannot be created nothing is installed, and a
/// second call leaves the first subscriber in place.
///
/// ```rust,no_run
/// use authorgrid::observability::init_tracing;
/// use authorgrid::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("authorgrid=debug".to_string()),
///     ..Config::default()
/// });
/// tracing::debug!("tracing is active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = config
        .trace_level
        .as_deref()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        KeyValue::new("authorgrid.endpoint", config.endpoint.clone()),
    ]);

    let provider = tracer::create_tracer_provider(trace_file_path(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_the_data_dir() {
        let path = trace_file_path();
        assert!(path.ends_with("authorgrid/authorgrid-otlp.json"));
        assert!(path.starts_with("/host"));
    }
}
