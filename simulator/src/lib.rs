//! Simulated environmental sensors: the channel table and the random
//! reading generator that feeds the dashboard.

mod channel;
mod telemetry;

pub use channel::{Channel, ChannelSpec};
pub use telemetry::{synthesize, Reading};
