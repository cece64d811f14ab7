use portable_atomic::{AtomicBool, AtomicUsize, Ordering};
use spin::Mutex as SpinMutex;

use crate::core::{Demand, RailSubscription};

/// Recording upstream subscription handle.
pub struct TestRailSubscription {
  demand:    SpinMutex<Option<Demand>>,
  requests:  AtomicUsize,
  cancelled: AtomicBool,
}

impl TestRailSubscription {
  /// Creates a handle with no recorded calls.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      demand:    SpinMutex::new(None),
      requests:  AtomicUsize::new(0),
      cancelled: AtomicBool::new(false),
    }
  }

  /// Returns the most recently requested demand.
  #[must_use]
  pub fn demand(&self) -> Option<Demand> {
    *self.demand.lock()
  }

  /// Number of `request` calls observed.
  #[must_use]
  pub fn request_count(&self) -> usize {
    self.requests.load(Ordering::Acquire)
  }

  /// Returns `true` once `cancel` has been observed.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::Acquire)
  }
}

impl Default for TestRailSubscription {
  fn default() -> Self {
    Self::new()
  }
}

impl RailSubscription for TestRailSubscription {
  fn request(&self, demand: Demand) {
    *self.demand.lock() = Some(demand);
    self.requests.fetch_add(1, Ordering::AcqRel);
  }

  fn cancel(&self) {
    self.cancelled.store(true, Ordering::Release);
  }
}
