use alloc::{sync::Arc, vec::Vec};

use crate::core::{
  ParallelSource, RailError, RailSubscriber, ReduceRail, Reducer, RejectedSubscription, SeedFactory,
  UndeliverableChannel,
};


/// Reduces each rail of a parallel source to a single value.
///
/// Rail `i` of the resulting source emits the left-fold of the reducer over
/// rail `i`'s elements, starting from a fresh seed, then completes. All
/// validation and seeding happens before any upstream commitment: a
/// subscriber-count mismatch or a failing seed factory rejects every supplied
/// subscriber and the upstream `subscribe` is never called.
pub struct ParallelReduce<T, R> {
  source:       Arc<dyn ParallelSource<T>>,
  seed_factory: SeedFactory<R>,
  reducer:      Reducer<T, R>,
  channel:      UndeliverableChannel,
}

impl<T, R> ParallelReduce<T, R> {
  /// Creates the operator with a disabled undeliverable channel.
  #[must_use]
  pub fn new(source: Arc<dyn ParallelSource<T>>, seed_factory: SeedFactory<R>, reducer: Reducer<T, R>) -> Self {
    Self { source, seed_factory, reducer, channel: UndeliverableChannel::disabled() }
  }

  /// Routes late terminal signals of every rail to the provided channel.
  #[must_use]
  pub fn with_undeliverable_channel(mut self, channel: UndeliverableChannel) -> Self {
    self.channel = channel;
    self
  }
}

impl<T, R> ParallelSource<R> for ParallelReduce<T, R>
where
  T: Send + Sync + 'static,
  R: Send + Sync + 'static,
{
  fn parallelism(&self) -> usize {
    self.source.parallelism()
  }

  fn subscribe(&self, subscribers: &[Arc<dyn RailSubscriber<R>>]) {
    let expected = self.source.parallelism();
    if subscribers.len() != expected {
      let error = RailError::ParallelismMismatch { expected, actual: subscribers.len() };
      reject_all(subscribers, &error);
      return;
    }

    let mut rails: Vec<Arc<dyn RailSubscriber<T>>> = Vec::with_capacity(expected);
    for subscriber in subscribers {
      let seed = match (self.seed_factory)() {
        | Ok(seed) => seed,
        | Err(error) => {
          reject_all(subscribers, &error);
          return;
        },
      };
      rails.push(Arc::new(ReduceRail::new(
        subscriber.clone(),
        seed,
        self.reducer.clone(),
        self.channel.clone(),
      )));
    }

    self.source.subscribe(&rails);
  }
}

fn reject_all<T>(subscribers: &[Arc<dyn RailSubscriber<T>>], error: &RailError) {
  for subscriber in subscribers {
    RejectedSubscription::reject(subscriber, error.clone());
  }
}
