//! Standard-environment integrations.

/// `tracing`-backed undeliverable sink.
mod tracing_undeliverable_sink;

pub use tracing_undeliverable_sink::TracingUndeliverableSink;
