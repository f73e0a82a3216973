//! Temperature-unit helpers.
//!
//! Zones report either Celsius or Fahrenheit; all dew-point math runs in
//! Celsius internally, so Fahrenheit zones convert on the way in and out.

use serde::{Deserialize, Serialize};

/// Unit mode of a zone's sensors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

/// Convert a Fahrenheit temperature to Celsius.
#[must_use]
pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Convert a Celsius temperature to Fahrenheit.
#[must_use]
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}
