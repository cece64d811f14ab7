//! `tracing`-backed undeliverable sink for standard environments.

extern crate std;

#[cfg(test)]
mod tests;

use tracing::{Level, event};

use crate::core::{RailError, UndeliverableSink};

/// Undeliverable sink that forwards late terminal errors to the `tracing`
/// crate.
pub struct TracingUndeliverableSink;

impl TracingUndeliverableSink {
  /// Default target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = "railfold::undeliverable";
}

impl UndeliverableSink for TracingUndeliverableSink {
  fn accept(&self, error: &RailError) {
    event!(target: TracingUndeliverableSink::DEFAULT_TARGET, Level::WARN, "{}", error);
  }
}
