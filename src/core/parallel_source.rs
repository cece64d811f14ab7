use alloc::sync::Arc;

use crate::core::RailSubscriber;

/// Source decomposed into independent concurrent rails.
///
/// Rails share no mutable state; each one independently follows the
/// request/emit backpressure protocol of [`RailSubscriber`].
pub trait ParallelSource<T>: Send + Sync {
  /// Returns the parallelism degree of the source.
  fn parallelism(&self) -> usize;

  /// Subscribes one downstream subscriber per rail in a single call.
  ///
  /// The slice length must equal [`parallelism`](Self::parallelism);
  /// implementations reject a mismatching array on every supplied subscriber
  /// without committing to any rail.
  fn subscribe(&self, subscribers: &[Arc<dyn RailSubscriber<T>>]);
}
