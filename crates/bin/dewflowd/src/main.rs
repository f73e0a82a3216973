//! # dewflowd — dewflow daemon
//!
//! Composition root that wires the dew-point driver to a simulated sensor
//! bus and runs it standalone.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialise the tracing subscriber
//! - Load the zone registry and construct the controller, injecting the
//!   sensor bus and action sink via port traits
//! - Feed sensor readings from stdin (`set <sysvar> <value>`) and deliver
//!   the change notifications
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::{self, BufRead};

use dewflow_adapter_virtual::VirtualBus;
use dewflow_app::controller::ZoneController;
use dewflow_app::loader;
use dewflow_app::ports::ActionSink;
use dewflow_domain::id::{MacroId, SysvarId};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Stands in for the host's automation engine: macro runs and event signals
/// are forwarded to the log.
struct TracingSink;

impl ActionSink for TracingSink {
    fn run_macro(&mut self, id: MacroId) {
        tracing::info!(macro_id = %id, "macro requested");
    }

    fn signal_event(&mut self, name: &str) {
        tracing::info!(event = %name, "event signalled");
    }
}

/// A parsed stdin line.
#[derive(Debug, PartialEq)]
enum FeedCommand {
    /// Store a reading and deliver the change notification.
    Set(SysvarId, f64),
    Quit,
}

fn parse_line(line: &str) -> Option<FeedCommand> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "quit" | "exit" => Some(FeedCommand::Quit),
        "set" => {
            let sysvar = parts.next()?.parse().ok()?;
            let value = parts.next()?.parse().ok()?;
            Some(FeedCommand::Set(sysvar, value))
        }
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .init();

    tracing::info!("dewflow: initialising driver");
    let zones = loader::load_zones(&config);
    tracing::info!(zones = zones.len(), "zone registry loaded");

    let mut controller = ZoneController::new(zones, VirtualBus::new(), TracingSink);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_line(&line) {
            Some(FeedCommand::Set(sysvar, value)) => {
                controller.bus_mut().set(sysvar, value);
                controller.on_sensor_changed(sysvar);
            }
            Some(FeedCommand::Quit) => break,
            None => {
                if !line.trim().is_empty() {
                    tracing::warn!(%line, "unrecognised input line");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_set_command() {
        assert_eq!(
            parse_line("set 101 21.5"),
            Some(FeedCommand::Set(SysvarId::new(101), 21.5))
        );
    }

    #[test]
    fn should_parse_quit_command() {
        assert_eq!(parse_line("quit"), Some(FeedCommand::Quit));
        assert_eq!(parse_line("exit"), Some(FeedCommand::Quit));
    }

    #[test]
    fn should_reject_malformed_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("set"), None);
        assert_eq!(parse_line("set abc 1"), None);
        assert_eq!(parse_line("set 101"), None);
        assert_eq!(parse_line("open 101"), None);
    }
}
