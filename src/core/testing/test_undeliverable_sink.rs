use alloc::vec::Vec;

use spin::Mutex as SpinMutex;

use crate::core::{RailError, UndeliverableSink};

/// Collecting sink for undeliverable-channel assertions.
pub struct TestUndeliverableSink {
  errors: SpinMutex<Vec<RailError>>,
}

impl TestUndeliverableSink {
  /// Creates an empty sink.
  #[must_use]
  pub const fn new() -> Self {
    Self { errors: SpinMutex::new(Vec::new()) }
  }

  /// Returns the errors accepted so far.
  #[must_use]
  pub fn errors(&self) -> Vec<RailError> {
    self.errors.lock().clone()
  }
}

impl Default for TestUndeliverableSink {
  fn default() -> Self {
    Self::new()
  }
}

impl UndeliverableSink for TestUndeliverableSink {
  fn accept(&self, error: &RailError) {
    self.errors.lock().push(error.clone());
  }
}
