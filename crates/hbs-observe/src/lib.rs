//! Observability setup for the Human Builder System: structured logging via
//! `tracing` with optional OpenTelemetry span export.

pub mod tracing_setup;
