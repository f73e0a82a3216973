//! Zone — one monitored climate area.
//!
//! A zone is split into an immutable [`ZoneConfig`] (loaded once at startup)
//! and a mutable [`ZoneState`] (rewritten on every sensor notification). The
//! host-facing names derived from the zone index — the published dew-point
//! variable and the open/close event identifiers — are resolved once at
//! construction time instead of being re-formatted on every decision.

use serde::{Deserialize, Serialize};

use crate::error::{DewflowError, ValidationError};
use crate::id::{MacroId, SysvarId};
use crate::units::TemperatureUnit;

/// Immutable per-zone configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Human-readable name, unique among configured zones; topology lookups
    /// reference zones by this name.
    pub name: String,
    /// Unit mode of this zone's sensors.
    pub unit: TemperatureUnit,
    /// Temperature sensor variable; `None` when unconfigured or when the bus
    /// rejected the subscription (degraded zone).
    pub temperature_sysvar: Option<SysvarId>,
    /// Scaling divisor applied to raw temperature readings that are
    /// transmitted as integers scaled by 10 or 100. Applied only when > 1.
    pub temperature_divisor: f64,
    /// Humidity sensor variable; `None` when unconfigured or degraded.
    pub humidity_sysvar: Option<SysvarId>,
    /// Minimum dew-point gap (degrees, in this zone's unit) required between
    /// this zone and its inlet supplier before the baffle may open.
    pub dehumidify_delta: f64,
    /// Name of the zone that supplies this zone's inlet air; `None` when the
    /// zone has no controlled inlet.
    pub inlet_zone: Option<String>,
    /// Macro to run when this zone's inlet baffle should open.
    pub open_macro: Option<MacroId>,
    /// Macro to run when this zone's inlet baffle should close.
    pub close_macro: Option<MacroId>,
}

impl ZoneConfig {
    /// Create a builder for constructing a [`ZoneConfig`].
    #[must_use]
    pub fn builder() -> ZoneConfigBuilder {
        ZoneConfigBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DewflowError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - `temperature_divisor` is below 1 ([`ValidationError::DivisorBelowOne`])
    pub fn validate(&self) -> Result<(), DewflowError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.temperature_divisor < 1.0 {
            return Err(ValidationError::DivisorBelowOne.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`ZoneConfig`].
#[derive(Debug, Default)]
pub struct ZoneConfigBuilder {
    name: Option<String>,
    unit: Option<TemperatureUnit>,
    temperature_sysvar: Option<SysvarId>,
    temperature_divisor: Option<f64>,
    humidity_sysvar: Option<SysvarId>,
    dehumidify_delta: Option<f64>,
    inlet_zone: Option<String>,
    open_macro: Option<MacroId>,
    close_macro: Option<MacroId>,
}

impl ZoneConfigBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    #[must_use]
    pub fn temperature_sysvar(mut self, sysvar: SysvarId) -> Self {
        self.temperature_sysvar = Some(sysvar);
        self
    }

    #[must_use]
    pub fn temperature_divisor(mut self, divisor: f64) -> Self {
        self.temperature_divisor = Some(divisor);
        self
    }

    #[must_use]
    pub fn humidity_sysvar(mut self, sysvar: SysvarId) -> Self {
        self.humidity_sysvar = Some(sysvar);
        self
    }

    #[must_use]
    pub fn dehumidify_delta(mut self, delta: f64) -> Self {
        self.dehumidify_delta = Some(delta);
        self
    }

    #[must_use]
    pub fn inlet_zone(mut self, name: impl Into<String>) -> Self {
        self.inlet_zone = Some(name.into());
        self
    }

    #[must_use]
    pub fn open_macro(mut self, id: MacroId) -> Self {
        self.open_macro = Some(id);
        self
    }

    #[must_use]
    pub fn close_macro(mut self, id: MacroId) -> Self {
        self.close_macro = Some(id);
        self
    }

    /// Consume the builder, validate, and return a [`ZoneConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`DewflowError::Validation`] if the name is missing or empty,
    /// or the divisor is below 1.
    pub fn build(self) -> Result<ZoneConfig, DewflowError> {
        let config = ZoneConfig {
            name: self.name.unwrap_or_default(),
            unit: self.unit.unwrap_or_default(),
            temperature_sysvar: self.temperature_sysvar,
            temperature_divisor: self.temperature_divisor.unwrap_or(1.0),
            humidity_sysvar: self.humidity_sysvar,
            dehumidify_delta: self.dehumidify_delta.unwrap_or(0.0),
            inlet_zone: self.inlet_zone.filter(|name| !name.is_empty()),
            open_macro: self.open_macro,
            close_macro: self.close_macro,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Live calculated state of a zone.
///
/// Both dew points are stored in the zone's configured unit. They start at
/// zero — "no reading received yet" — and are only ever rewritten through
/// [`Zone::record_dewpoint`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ZoneState {
    /// The value `current_dewpoint` held immediately before the last update.
    pub last_dewpoint: f64,
    /// Most recent successfully computed dew point.
    pub current_dewpoint: f64,
    /// Whether this zone's inlet baffle is currently believed open.
    pub inlet_open: bool,
}

/// A configured zone: stable 1-based index, configuration, live state, and
/// the host-facing names resolved from the index at construction time.
#[derive(Debug, Clone)]
pub struct Zone {
    /// 1-based index, stable for the lifetime of the process.
    pub index: usize,
    pub config: ZoneConfig,
    pub state: ZoneState,
    /// Derived sensor-bus variable the rounded dew point is published under.
    pub dewpoint_var: String,
    /// Event signalled when this zone's inlet baffle opens.
    pub open_event: String,
    /// Event signalled when this zone's inlet baffle closes.
    pub close_event: String,
}

impl Zone {
    /// Create a zone with fresh state and its index-derived host names.
    #[must_use]
    pub fn new(index: usize, config: ZoneConfig) -> Self {
        Self {
            index,
            config,
            state: ZoneState::default(),
            dewpoint_var: format!("DewPoint{index}"),
            open_event: format!("OpenEventName{index}"),
            close_event: format!("CloseEventName{index}"),
        }
    }

    /// Shift the dew-point trend window: the previous current value becomes
    /// the last value, and `dewpoint` becomes current.
    pub fn record_dewpoint(&mut self, dewpoint: f64) {
        self.state.last_dewpoint = self.state.current_dewpoint;
        self.state.current_dewpoint = dewpoint;
    }
}
