//! # dewflow-app
//!
//! Application layer — the reactive zone controller and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that the host or adapters must implement
//!   (driven/outbound ports):
//!   - `ConfigSource` — flat key/value configuration access
//!   - `SensorBus` — subscribe to, read, and write numeric host variables
//!   - `ActionSink` — run host macros and signal named events
//! - Load the zone registry from configuration (`loader`)
//! - Drive the baffle-control decision loop (`controller`): the host delivers
//!   one sensor-change notification at a time and the controller runs it to
//!   completion — single-threaded, synchronous, no locks
//!
//! ## Dependency rule
//! Depends on `dewflow-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod controller;
pub mod loader;
pub mod ports;
