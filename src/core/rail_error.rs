//! Rail error definitions.


use alloc::string::String;

/// Errors carried by rail terminal events.
///
/// The type is `Clone` because configuration errors are broadcast to every
/// rail of a parallel subscription.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RailError {
  /// Subscriber count does not match the source parallelism.
  #[error("subscriber count {actual} does not match parallelism {expected}")]
  ParallelismMismatch {
    /// Parallelism degree reported by the source.
    expected: usize,
    /// Number of subscribers supplied to `subscribe`.
    actual:   usize,
  },
  /// Seed factory failed to produce an accumulator.
  #[error("seed factory failed: {0}")]
  Seed(String),
  /// Reducer failed to combine an element into the accumulator.
  #[error("reducer failed: {0}")]
  Reducer(String),
  /// Upstream rail failed.
  #[error("rail failed: {0}")]
  Failed(String),
}
