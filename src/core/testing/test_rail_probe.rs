use alloc::{sync::Arc, vec::Vec};

use portable_atomic::{AtomicUsize, Ordering};
use spin::Mutex as SpinMutex;

use crate::core::{Demand, RailError, RailSubscriber, RailSubscription};

/// Recording downstream subscriber with manual demand control.
///
/// The probe never requests on its own, so tests can observe demand-gated
/// emission explicitly.
pub struct TestRailProbe<T> {
  subscription: SpinMutex<Option<Arc<dyn RailSubscription>>>,
  values:       SpinMutex<Vec<T>>,
  errors:       SpinMutex<Vec<RailError>>,
  completions:  AtomicUsize,
  subscribes:   AtomicUsize,
}

impl<T> TestRailProbe<T> {
  /// Creates a probe with no recorded events.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      subscription: SpinMutex::new(None),
      values:       SpinMutex::new(Vec::new()),
      errors:       SpinMutex::new(Vec::new()),
      completions:  AtomicUsize::new(0),
      subscribes:   AtomicUsize::new(0),
    }
  }

  /// Requests demand on the recorded subscription.
  pub fn request(&self, demand: Demand) {
    let subscription = self.subscription.lock().clone();
    if let Some(subscription) = subscription {
      subscription.request(demand);
    }
  }

  /// Cancels the recorded subscription.
  pub fn cancel(&self) {
    let subscription = self.subscription.lock().clone();
    if let Some(subscription) = subscription {
      subscription.cancel();
    }
  }

  /// Returns the values received so far.
  #[must_use]
  pub fn values(&self) -> Vec<T>
  where
    T: Clone, {
    self.values.lock().clone()
  }

  /// Returns the errors received so far.
  #[must_use]
  pub fn errors(&self) -> Vec<RailError> {
    self.errors.lock().clone()
  }

  /// Returns `true` once `on_complete` has been observed.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.completion_count() > 0
  }

  /// Number of `on_complete` calls observed.
  #[must_use]
  pub fn completion_count(&self) -> usize {
    self.completions.load(Ordering::Acquire)
  }

  /// Number of `on_subscribe` calls observed.
  #[must_use]
  pub fn subscribe_count(&self) -> usize {
    self.subscribes.load(Ordering::Acquire)
  }
}

impl<T> Default for TestRailProbe<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> RailSubscriber<T> for TestRailProbe<T>
where
  T: Send,
{
  fn on_subscribe(&self, subscription: Arc<dyn RailSubscription>) {
    self.subscribes.fetch_add(1, Ordering::AcqRel);
    *self.subscription.lock() = Some(subscription);
  }

  fn on_next(&self, value: T) {
    self.values.lock().push(value);
  }

  fn on_error(&self, error: RailError) {
    self.errors.lock().push(error);
  }

  fn on_complete(&self) {
    self.completions.fetch_add(1, Ordering::AcqRel);
  }
}
