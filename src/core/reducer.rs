use alloc::sync::Arc;

use crate::core::RailError;

/// Produces one fresh accumulator per rail.
///
/// Invoked exactly once per rail, in rail order, on every subscription; the
/// produced value is never shared across rails.
pub type SeedFactory<R> = Arc<dyn Fn() -> Result<R, RailError> + Send + Sync>;

/// Folds one element into a rail accumulator.
pub type Reducer<T, R> = Arc<dyn Fn(R, T) -> Result<R, RailError> + Send + Sync>;
