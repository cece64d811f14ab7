use alloc::sync::Arc;

use crate::core::{ParallelReduce, ParallelSource, Reducer, SeedFactory};


/// Combinator sugar for [`ParallelSource`] values.
pub trait ParallelSourceExt<T>: ParallelSource<T> + Sized + 'static
where
  T: Send + Sync + 'static,
{
  /// Folds every rail into a single value from a fresh per-rail seed.
  fn reduce_with<R>(self, seed_factory: SeedFactory<R>, reducer: Reducer<T, R>) -> ParallelReduce<T, R>
  where
    R: Send + Sync + 'static, {
    ParallelReduce::new(Arc::new(self), seed_factory, reducer)
  }
}

impl<T, S> ParallelSourceExt<T> for S
where
  T: Send + Sync + 'static,
  S: ParallelSource<T> + Sized + 'static,
{
}
