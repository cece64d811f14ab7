use alloc::{string::ToString, sync::Arc, vec};

use crate::core::{
  Demand, RailError, RailSubscriber, ReduceRail, Reducer, UndeliverableChannel,
  testing::{TestRailProbe, TestRailSubscription, TestUndeliverableSink},
};

fn sum() -> Reducer<u32, u32> {
  Arc::new(|accumulator, value| Ok(accumulator + value))
}

fn rail(probe: &Arc<TestRailProbe<u32>>, reducer: Reducer<u32, u32>) -> ReduceRail<u32, u32> {
  ReduceRail::new(probe.clone(), 0, reducer, UndeliverableChannel::disabled())
}

#[test]
fn requests_unbounded_demand_on_subscribe() {
  let probe = Arc::new(TestRailProbe::new());
  let machine = rail(&probe, sum());
  let subscription = Arc::new(TestRailSubscription::new());

  machine.on_subscribe(subscription.clone());

  assert_eq!(probe.subscribe_count(), 1);
  assert_eq!(subscription.demand(), Some(Demand::Unbounded));
  assert!(!subscription.is_cancelled());
}

#[test]
fn duplicate_subscribe_cancels_the_redundant_subscription() {
  let probe = Arc::new(TestRailProbe::new());
  let machine = rail(&probe, sum());
  let first = Arc::new(TestRailSubscription::new());
  let second = Arc::new(TestRailSubscription::new());

  machine.on_subscribe(first.clone());
  machine.on_subscribe(second.clone());

  assert_eq!(probe.subscribe_count(), 1);
  assert!(!first.is_cancelled());
  assert!(second.is_cancelled());
}

#[test]
fn folds_in_delivery_order_and_defers_emission() {
  let probe = Arc::new(TestRailProbe::new());
  let machine = rail(&probe, sum());
  machine.on_subscribe(Arc::new(TestRailSubscription::new()));

  machine.on_next(1);
  machine.on_next(2);
  machine.on_next(3);
  machine.on_complete();
  assert!(probe.values().is_empty());

  probe.request(Demand::Unbounded);
  assert_eq!(probe.values(), vec![6]);
  assert_eq!(probe.completion_count(), 1);
}

#[test]
fn reducer_failure_cancels_upstream_and_fails_only_this_rail() {
  let probe = Arc::new(TestRailProbe::new());
  let failing: Reducer<u32, u32> = Arc::new(|_, _| Err(RailError::Reducer("boom".to_string())));
  let machine = rail(&probe, failing);
  let subscription = Arc::new(TestRailSubscription::new());
  machine.on_subscribe(subscription.clone());

  machine.on_next(1);

  assert!(subscription.is_cancelled());
  assert_eq!(probe.errors(), vec![RailError::Reducer("boom".to_string())]);

  machine.on_next(2);
  machine.on_complete();
  assert_eq!(probe.errors().len(), 1);
  assert_eq!(probe.completion_count(), 0);
}

#[test]
fn upstream_error_releases_accumulator_and_forwards() {
  let probe = Arc::new(TestRailProbe::new());
  let machine = rail(&probe, sum());
  machine.on_subscribe(Arc::new(TestRailSubscription::new()));

  machine.on_next(5);
  machine.on_error(RailError::Failed("upstream".to_string()));

  assert_eq!(probe.errors(), vec![RailError::Failed("upstream".to_string())]);

  machine.on_complete();
  probe.request(Demand::Unbounded);
  assert!(probe.values().is_empty());
  assert_eq!(probe.completion_count(), 0);
}

#[test]
fn late_error_is_routed_to_the_undeliverable_channel() {
  let probe = Arc::new(TestRailProbe::<u32>::new());
  let sink = Arc::new(TestUndeliverableSink::new());
  let machine = ReduceRail::<u32, u32>::new(probe.clone(), 0, sum(), UndeliverableChannel::new(sink.clone()));
  machine.on_subscribe(Arc::new(TestRailSubscription::new()));

  machine.on_complete();
  machine.on_error(RailError::Failed("late".to_string()));

  assert!(probe.errors().is_empty());
  assert_eq!(sink.errors(), vec![RailError::Failed("late".to_string())]);
}

#[test]
fn late_elements_are_dropped_silently() {
  let probe = Arc::new(TestRailProbe::new());
  let machine = rail(&probe, sum());
  machine.on_subscribe(Arc::new(TestRailSubscription::new()));

  machine.on_next(1);
  machine.on_complete();
  machine.on_next(41);

  probe.request(Demand::Unbounded);
  assert_eq!(probe.values(), vec![1]);
}

#[test]
fn cancel_propagates_upstream_and_drops_everything() {
  let probe = Arc::new(TestRailProbe::new());
  let machine = rail(&probe, sum());
  let subscription = Arc::new(TestRailSubscription::new());
  machine.on_subscribe(subscription.clone());

  machine.on_next(1);
  probe.cancel();

  assert!(subscription.is_cancelled());

  machine.on_next(2);
  machine.on_complete();
  probe.request(Demand::Unbounded);
  assert!(probe.values().is_empty());
  assert_eq!(probe.completion_count(), 0);
}

#[test]
fn cancel_suppresses_a_completion_already_in_flight() {
  let probe = Arc::new(TestRailProbe::new());
  let machine = rail(&probe, sum());
  machine.on_subscribe(Arc::new(TestRailSubscription::new()));

  machine.on_next(1);
  machine.on_complete();
  probe.cancel();
  probe.request(Demand::Unbounded);

  assert!(probe.values().is_empty());
  assert_eq!(probe.completion_count(), 0);
}

#[test]
fn cancel_is_idempotent() {
  let probe = Arc::new(TestRailProbe::new());
  let machine = rail(&probe, sum());
  let subscription = Arc::new(TestRailSubscription::new());
  machine.on_subscribe(subscription.clone());

  probe.cancel();
  probe.cancel();

  assert!(subscription.is_cancelled());
  assert!(probe.errors().is_empty());
}
