use crate::core::Demand;

/// Upstream handle controlling a single rail subscription.
///
/// `request` and `cancel` may arrive on any thread, including concurrently
/// with an in-flight terminal event on the delivering thread; implementations
/// must tolerate calls after termination.
pub trait RailSubscription: Send + Sync {
  /// Adds downstream demand for the rail.
  fn request(&self, demand: Demand);

  /// Cancels the rail; idempotent.
  fn cancel(&self);
}
