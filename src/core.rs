//! Rail contracts and the parallel reduce operator.

/// Demand model types.
mod demand;
/// Deferred single-value emission primitive.
mod deferred_scalar;
/// Parallel reduce operator.
mod parallel_reduce;
/// Parallel fan-out contract.
mod parallel_source;
/// Combinator extensions for parallel sources.
mod parallel_source_ext;
/// Rail error definitions.
mod rail_error;
/// Rail consumer contract.
mod rail_subscriber;
/// Rail producer handle contract.
mod rail_subscription;
/// Per-rail reduce state machine.
mod reduce_rail;
/// Fold function aliases.
mod reducer;
/// Pre-commitment rejection subscription.
mod rejected_subscription;
/// Undeliverable error channel.
mod undeliverable_channel;
/// Undeliverable error sink contract.
mod undeliverable_sink;

/// Test doubles for rail contract verification.
pub mod testing;

pub use demand::Demand;
pub use deferred_scalar::DeferredScalar;
pub use parallel_reduce::ParallelReduce;
pub use parallel_source::ParallelSource;
pub use parallel_source_ext::ParallelSourceExt;
pub use rail_error::RailError;
pub use rail_subscriber::RailSubscriber;
pub use rail_subscription::RailSubscription;
pub use reduce_rail::ReduceRail;
pub use reducer::{Reducer, SeedFactory};
pub use rejected_subscription::RejectedSubscription;
pub use undeliverable_channel::UndeliverableChannel;
pub use undeliverable_sink::UndeliverableSink;
