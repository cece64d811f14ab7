use alloc::sync::Arc;

use portable_atomic::{AtomicBool, Ordering};
use spin::Mutex as SpinMutex;

use crate::core::{
  Demand, DeferredScalar, RailError, RailSubscriber, RailSubscription, Reducer, UndeliverableChannel,
};

#[cfg(test)]
mod tests;

/// Per-rail reduce state machine.
///
/// Wraps one downstream subscriber, folds the rail's elements into the
/// seeded accumulator in delivery order and hands the final value to a
/// [`DeferredScalar`] gated by downstream demand. The machine requests
/// unbounded demand as soon as it is subscribed, since the entire rail must
/// be observed to fold it.
///
/// At most one terminal event ever reaches the downstream. The guard is a
/// single atomic flag rather than a mutex, so a `cancel` arriving on another
/// thread never blocks the delivering thread; a terminal signal that loses
/// the race is routed to the rail's [`UndeliverableChannel`].
pub struct ReduceRail<T, R> {
  shared:     Arc<RailShared<R>>,
  reducer:    Reducer<T, R>,
  subscribed: AtomicBool,
}

impl<T, R> ReduceRail<T, R> {
  /// Creates a rail machine around the downstream subscriber with a freshly
  /// seeded accumulator.
  #[must_use]
  pub fn new(
    downstream: Arc<dyn RailSubscriber<R>>,
    seed: R,
    reducer: Reducer<T, R>,
    channel: UndeliverableChannel,
  ) -> Self {
    Self {
      shared: Arc::new(RailShared {
        deferred: DeferredScalar::new(downstream),
        accumulator: SpinMutex::new(Some(seed)),
        upstream: SpinMutex::new(None),
        done: AtomicBool::new(false),
        channel,
      }),
      reducer,
      subscribed: AtomicBool::new(false),
    }
  }
}

impl<T, R> RailSubscriber<T> for ReduceRail<T, R>
where
  T: Send + Sync + 'static,
  R: Send + Sync + 'static,
{
  fn on_subscribe(&self, subscription: Arc<dyn RailSubscription>) {
    if self.subscribed.swap(true, Ordering::AcqRel) {
      subscription.cancel();
      return;
    }
    *self.shared.upstream.lock() = Some(subscription.clone());

    let downstream_handle: Arc<dyn RailSubscription> = self.shared.clone();
    self.shared.deferred.downstream().on_subscribe(downstream_handle);

    // The downstream may have cancelled synchronously during on_subscribe.
    if self.shared.done.load(Ordering::Acquire) {
      subscription.cancel();
      return;
    }
    subscription.request(Demand::Unbounded);
  }

  fn on_next(&self, value: T) {
    if self.shared.done.load(Ordering::Acquire) {
      return;
    }
    let mut slot = self.shared.accumulator.lock();
    let Some(accumulator) = slot.take() else {
      return;
    };
    match (self.reducer)(accumulator, value) {
      | Ok(next) => {
        *slot = Some(next);
      },
      | Err(error) => {
        drop(slot);
        self.shared.cancel_upstream();
        self.shared.terminate_with(error);
      },
    }
  }

  fn on_error(&self, error: RailError) {
    self.shared.terminate_with(error);
  }

  fn on_complete(&self) {
    if self.shared.done.swap(true, Ordering::AcqRel) {
      return;
    }
    let accumulator = self.shared.accumulator.lock().take();
    if let Some(value) = accumulator {
      self.shared.deferred.complete(value);
    }
  }
}

/// State shared between the upstream-facing machine and the subscription
/// handle exposed to the downstream.
struct RailShared<R> {
  deferred:    DeferredScalar<R>,
  accumulator: SpinMutex<Option<R>>,
  upstream:    SpinMutex<Option<Arc<dyn RailSubscription>>>,
  done:        AtomicBool,
  channel:     UndeliverableChannel,
}

impl<R> RailShared<R> {
  fn cancel_upstream(&self) {
    let upstream = self.upstream.lock().take();
    if let Some(subscription) = upstream {
      subscription.cancel();
    }
  }

  fn terminate_with(&self, error: RailError) {
    if self.done.swap(true, Ordering::AcqRel) {
      // A terminal event already reached the downstream; redelivery would
      // violate the at-most-one-terminal contract.
      self.channel.publish(&error);
      return;
    }
    self.accumulator.lock().take();
    self.deferred.downstream().on_error(error);
  }
}

impl<R> RailSubscription for RailShared<R>
where
  R: Send + Sync + 'static,
{
  fn request(&self, demand: Demand) {
    self.deferred.request(demand);
  }

  fn cancel(&self) {
    self.done.store(true, Ordering::Release);
    self.deferred.cancel();
    self.accumulator.lock().take();
    self.cancel_upstream();
  }
}
