use alloc::sync::Arc;

use spin::Mutex as SpinMutex;

use crate::core::{RailError, UndeliverableSink};


/// Shared handle routing undeliverable errors to an injected sink.
///
/// The channel is constructed explicitly, cloned into every rail of an
/// operator and shut down explicitly. After shutdown, or when disabled,
/// published errors are dropped.
#[derive(Clone)]
pub struct UndeliverableChannel {
  state: Arc<SpinMutex<ChannelState>>,
}

impl UndeliverableChannel {
  /// Creates an open channel backed by the provided sink.
  #[must_use]
  pub fn new(sink: Arc<dyn UndeliverableSink>) -> Self {
    Self { state: Arc::new(SpinMutex::new(ChannelState::Open(sink))) }
  }

  /// Creates a channel that drops everything published to it.
  #[must_use]
  pub fn disabled() -> Self {
    Self { state: Arc::new(SpinMutex::new(ChannelState::Closed)) }
  }

  /// Publishes an error that could not be delivered downstream.
  pub fn publish(&self, error: &RailError) {
    let guard = self.state.lock();
    if let ChannelState::Open(sink) = &*guard {
      sink.accept(error);
    }
  }

  /// Detaches the sink; later publishes are dropped.
  pub fn shutdown(&self) {
    *self.state.lock() = ChannelState::Closed;
  }

  /// Returns `true` while a sink is attached.
  #[must_use]
  pub fn is_open(&self) -> bool {
    matches!(&*self.state.lock(), ChannelState::Open(_))
  }
}

enum ChannelState {
  Open(Arc<dyn UndeliverableSink>),
  Closed,
}
