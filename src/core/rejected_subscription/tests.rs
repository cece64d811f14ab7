use alloc::{string::ToString, sync::Arc, vec};

use crate::core::{RailError, RailSubscriber, RejectedSubscription, testing::TestRailProbe};

#[test]
fn reject_delivers_subscription_then_error() {
  let probe = Arc::new(TestRailProbe::<u32>::new());
  let subscriber: Arc<dyn RailSubscriber<u32>> = probe.clone();

  RejectedSubscription::reject(&subscriber, RailError::Failed("rejected".to_string()));

  assert_eq!(probe.subscribe_count(), 1);
  assert_eq!(probe.errors(), vec![RailError::Failed("rejected".to_string())]);
  assert!(!probe.is_completed());
}

#[test]
fn rejected_subscription_ignores_demand_and_cancel() {
  let probe = Arc::new(TestRailProbe::<u32>::new());
  let subscriber: Arc<dyn RailSubscriber<u32>> = probe.clone();

  RejectedSubscription::reject(&subscriber, RailError::Failed("rejected".to_string()));
  probe.request(crate::core::Demand::Unbounded);
  probe.cancel();

  assert!(probe.values().is_empty());
  assert_eq!(probe.errors().len(), 1);
}
