use alloc::sync::Arc;

use portable_atomic::{AtomicU8, Ordering};
use spin::Mutex as SpinMutex;

use crate::core::{Demand, RailSubscriber};


const EMPTY: u8 = 0;
const VALUE_READY: u8 = 1;
const REQUESTED: u8 = 2;
const EMITTED: u8 = 3;
const CANCELLED: u8 = 4;

/// Holds at most one pending result and emits it exactly once.
///
/// Emission fires when the second of {value available, demand received}
/// arrives, delivering the value and a completion signal in the same logical
/// step; never completion alone, never more than one value. The gate is a
/// compare-and-set state machine, so a `cancel` racing a concurrently
/// arriving completion wins deterministically: exactly one transition into
/// the emitted state ever succeeds, and a cancellation that lands first
/// suppresses the buffered value forever.
pub struct DeferredScalar<R> {
  state:      AtomicU8,
  slot:       SpinMutex<Option<R>>,
  downstream: Arc<dyn RailSubscriber<R>>,
}

impl<R> DeferredScalar<R> {
  /// Creates an empty primitive bound to the downstream subscriber.
  #[must_use]
  pub fn new(downstream: Arc<dyn RailSubscriber<R>>) -> Self {
    Self { state: AtomicU8::new(EMPTY), slot: SpinMutex::new(None), downstream }
  }

  /// Returns the downstream subscriber this primitive feeds.
  #[must_use]
  pub fn downstream(&self) -> &Arc<dyn RailSubscriber<R>> {
    &self.downstream
  }

  /// Records downstream demand; fires if the value is already buffered.
  pub fn request(&self, demand: Demand) {
    if !demand.has_demand() {
      return;
    }
    loop {
      match self.state.load(Ordering::Acquire) {
        | EMPTY => {
          if self.transition(EMPTY, REQUESTED) {
            return;
          }
        },
        | VALUE_READY => {
          if self.transition(VALUE_READY, EMITTED) {
            self.emit();
            return;
          }
        },
        | _ => return,
      }
    }
  }

  /// Supplies the single result; fires if demand has already arrived.
  pub fn complete(&self, value: R) {
    *self.slot.lock() = Some(value);
    loop {
      match self.state.load(Ordering::Acquire) {
        | EMPTY => {
          if self.transition(EMPTY, VALUE_READY) {
            return;
          }
        },
        | REQUESTED => {
          if self.transition(REQUESTED, EMITTED) {
            self.emit();
            return;
          }
        },
        | _ => {
          self.slot.lock().take();
          return;
        },
      }
    }
  }

  /// Permanently suppresses emission unless it has already fired.
  pub fn cancel(&self) {
    loop {
      match self.state.load(Ordering::Acquire) {
        | EMITTED | CANCELLED => return,
        | current => {
          if self.transition(current, CANCELLED) {
            self.slot.lock().take();
            return;
          }
        },
      }
    }
  }

  /// Returns `true` once the value and completion have been delivered.
  #[must_use]
  pub fn is_emitted(&self) -> bool {
    self.state.load(Ordering::Acquire) == EMITTED
  }

  fn transition(&self, from: u8, to: u8) -> bool {
    self.state.compare_exchange(from, to, Ordering::AcqRel, Ordering::Acquire).is_ok()
  }

  fn emit(&self) {
    // 値の取り出しはロック外でダウンストリームへ渡す
    let value = self.slot.lock().take();
    if let Some(value) = value {
      self.downstream.on_next(value);
      self.downstream.on_complete();
    }
  }
}
