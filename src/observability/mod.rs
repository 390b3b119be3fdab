//! OpenTelemetry tracing exported to a local OTLP JSON file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → FileSpanExporter → authorgrid-otlp.json
//! ```
//!
//! The file lives in the plugin data directory
//! (`~/.local/share/zellij/authorgrid/` on the host), holds one OTLP
//! `resourceSpans` document per line, and rotates at 10 MiB keeping three
//! backups. Verbosity follows the `trace_level` configuration key
//! (an `EnvFilter` directive, `"info"` by default).
//!
//! Event handling, store updates and rendering open spans (`handle_event`,
//! `apply_filter`, `render`), so slow filtering shows up as span timings.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, trace_file_path, DEFAULT_TRACE_LEVEL};

/// `service.name` resource attribute.
pub const SERVICE_NAME: &str = "authorgrid";

/// Instrumentation scope recorded on every exported batch.
pub const SCOPE_NAME: &str = "authorgrid";

/// Name of the live trace file.
pub const TRACE_FILE_NAME: &str = "authorgrid-otlp.json";
