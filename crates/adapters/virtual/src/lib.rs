//! # dewflow-adapter-virtual
//!
//! Simulated collaborators for testing and demonstration: an in-memory
//! sensor bus, a command-recording action sink, and a map-backed
//! configuration source. The daemon uses the bus to run the driver
//! standalone; tests use all three to exercise the controller end to end
//! without a real building-automation host.

mod bus;
mod config;
mod sink;

pub use bus::VirtualBus;
pub use config::MapConfig;
pub use sink::{Command, RecordingSink};
