use alloc::sync::Arc;

use crate::core::{Demand, RailError, RailSubscriber, RailSubscription};

#[cfg(test)]
mod tests;

/// Inert subscription handed to subscribers that are rejected before any
/// upstream commitment exists.
pub struct RejectedSubscription;

impl RejectedSubscription {
  /// Completes the subscriber lifecycle with a single error and no elements.
  pub fn reject<T>(subscriber: &Arc<dyn RailSubscriber<T>>, error: RailError) {
    subscriber.on_subscribe(Arc::new(Self));
    subscriber.on_error(error);
  }
}

impl RailSubscription for RejectedSubscription {
  fn request(&self, _demand: Demand) {}

  fn cancel(&self) {}
}
