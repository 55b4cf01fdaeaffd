//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans from `tracing` macros are exported in OTLP JSON format to a local
//! file for offline analysis, so no collector has to run next to the CLI.
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `<data_dir>/reelmark-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//! - **Cross-Task Traces**: Fetch tasks re-attach the context captured when
//!   the request was issued (see [`crate::worker::TraceContext`])
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the configuration file
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `tracer`: Custom OpenTelemetry tracer provider with file export
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
