//! Zone loading — builds the configured zones from a [`ConfigSource`].
//!
//! Slots with an empty `ZoneName<i>` are skipped entirely. Optional numeric
//! fields that fail to parse are treated as "not configured" and defaulted
//! instead of propagating into the math: the divisor falls back to 1, the
//! dehumidify delta to 0, and sensor/macro identifiers to unset. A zone is
//! allowed to exist in that degraded shape — it will not update meaningfully
//! but it never halts the driver.

use std::str::FromStr;

use dewflow_domain::error::DewflowError;
use dewflow_domain::id::{MacroId, SysvarId};
use dewflow_domain::units::TemperatureUnit;
use dewflow_domain::zone::{Zone, ZoneConfig};

use crate::ports::ConfigSource;

/// Number of configuration slots scanned at startup.
pub const MAX_ZONE_SLOTS: usize = 10;

/// Scan all configuration slots and build the populated zones, in ascending
/// slot order.
pub fn load_zones(source: &impl ConfigSource) -> Vec<Zone> {
    let mut zones = Vec::new();
    for index in 1..=MAX_ZONE_SLOTS {
        let name = source.get(&format!("ZoneName{index}"));
        if name.is_empty() {
            continue;
        }
        match slot_config(source, index, name) {
            Ok(config) => {
                tracing::debug!(index, zone = %config.name, "added dew-point zone");
                zones.push(Zone::new(index, config));
            }
            Err(err) => {
                tracing::warn!(index, %err, "skipping invalid zone slot");
            }
        }
    }
    zones
}

fn slot_config(
    source: &impl ConfigSource,
    index: usize,
    name: String,
) -> Result<ZoneConfig, DewflowError> {
    let mut builder = ZoneConfig::builder()
        .name(name)
        .inlet_zone(source.get(&format!("InletZone{index}")));

    if source.get(&format!("UnitsFahrenheit{index}")) == "true" {
        builder = builder.unit(TemperatureUnit::Fahrenheit);
    }
    if let Some(sysvar) = parse_field::<SysvarId>(source, "TemperatureSysvar", index) {
        builder = builder.temperature_sysvar(sysvar);
    }
    if let Some(divisor) =
        parse_field::<f64>(source, "TemperatureDivisor", index).filter(|divisor| *divisor >= 1.0)
    {
        builder = builder.temperature_divisor(divisor);
    }
    if let Some(sysvar) = parse_field::<SysvarId>(source, "HumiditySysvar", index) {
        builder = builder.humidity_sysvar(sysvar);
    }
    if let Some(delta) = parse_field::<f64>(source, "DehumidifyDelta", index) {
        builder = builder.dehumidify_delta(delta);
    }
    if let Some(id) = parse_field::<MacroId>(source, "OpenInletMacro", index) {
        builder = builder.open_macro(id);
    }
    if let Some(id) = parse_field::<MacroId>(source, "CloseInletMacro", index) {
        builder = builder.close_macro(id);
    }

    builder.build()
}

/// Parse an optional numeric slot field. Absent or unparsable values are
/// "not configured" — never an error.
fn parse_field<T: FromStr>(source: &impl ConfigSource, key: &str, index: usize) -> Option<T> {
    let raw = source.get(&format!("{key}{index}"));
    if raw.is_empty() {
        return None;
    }
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, index, %raw, "ignoring unparsable configuration value");
            None
        }
    }
}
