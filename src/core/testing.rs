//! Test doubles for rail contract verification.

mod test_rail_probe;
mod test_rail_source;
mod test_rail_subscription;
mod test_undeliverable_sink;

pub use test_rail_probe::TestRailProbe;
pub use test_rail_source::{RailScript, RailTerminal, TestRailSource};
pub use test_rail_subscription::TestRailSubscription;
pub use test_undeliverable_sink::TestUndeliverableSink;
