//! Port definitions — traits that the host or adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. All of them are synchronous: the host delivers notifications one
//! at a time and every bus or sink call completes before the next
//! notification is processed.

pub mod action_sink;
pub mod config_source;
pub mod sensor_bus;

pub use action_sink::ActionSink;
pub use config_source::ConfigSource;
pub use sensor_bus::SensorBus;
