use alloc::sync::Arc;

use crate::core::{RailError, RailSubscription};

/// Consumer side of a single rail.
///
/// Within one rail the protocol serializes `on_next`, `on_error` and
/// `on_complete`; `on_subscribe` is delivered exactly once before any of
/// them, and at most one terminal event follows the element sequence.
pub trait RailSubscriber<T>: Send + Sync {
  /// Accepts the upstream subscription for this rail.
  fn on_subscribe(&self, subscription: Arc<dyn RailSubscription>);

  /// Delivers the next element.
  fn on_next(&self, value: T);

  /// Delivers the terminal error.
  fn on_error(&self, error: RailError);

  /// Signals successful completion of the rail.
  fn on_complete(&self);
}
