use alloc::{string::ToString, sync::Arc};

use crate::{
  core::{RailError, UndeliverableChannel},
  std::TracingUndeliverableSink,
};

#[test]
fn channel_accepts_a_tracing_sink() {
  let channel = UndeliverableChannel::new(Arc::new(TracingUndeliverableSink));
  channel.publish(&RailError::Failed("late".to_string()));
  assert!(channel.is_open());
}
