use crate::core::RailError;

/// Process-wide destination for terminal signals that may not legally reach
/// an already-terminated downstream.
pub trait UndeliverableSink: Send + Sync {
  /// Accepts one undeliverable error.
  fn accept(&self, error: &RailError);
}
