//! Zone controller — the reactive baffle-control core.
//!
//! The controller owns the zone registry and its two collaborators (sensor
//! bus and action sink) as explicit dependencies; there is no ambient global
//! state. On each sensor-change notification it recomputes the affected
//! zone's dew point, shifts the trend window, publishes the rounded value
//! back to the bus, and evaluates at most one baffle transition:
//!
//! - a **strictly rising** supplier dew point (air getting wetter) closes an
//!   open baffle;
//! - a **falling or equal** one (tie-break favours opening) opens a closed
//!   baffle, but only when the outlet zone's dew point exceeds the
//!   supplier's by at least the outlet's dehumidify delta.

use dewflow_domain::dewpoint::dew_point_celsius;
use dewflow_domain::id::SysvarId;
use dewflow_domain::registry::ZoneRegistry;
use dewflow_domain::units::{self, TemperatureUnit};
use dewflow_domain::zone::Zone;

use crate::ports::{ActionSink, SensorBus};

/// Reactive controller driving inter-zone ventilation baffles.
pub struct ZoneController<B, A> {
    registry: ZoneRegistry,
    bus: B,
    sink: A,
}

impl<B, A> ZoneController<B, A>
where
    B: SensorBus,
    A: ActionSink,
{
    /// Build the controller and register sensor subscriptions for every
    /// zone channel.
    ///
    /// A channel whose subscription the bus rejects is cleared to unset: the
    /// zone keeps existing in a degraded state and simply never reacts on
    /// that channel.
    pub fn new(mut zones: Vec<Zone>, mut bus: B, sink: A) -> Self {
        for zone in &mut zones {
            if let Some(sysvar) = zone.config.temperature_sysvar {
                if bus.add_subscription(sysvar) {
                    tracing::debug!(zone = %zone.config.name, %sysvar, "subscribed temperature channel");
                } else {
                    tracing::warn!(zone = %zone.config.name, %sysvar, "bus rejected temperature subscription");
                    zone.config.temperature_sysvar = None;
                }
            }
            if let Some(sysvar) = zone.config.humidity_sysvar {
                if bus.add_subscription(sysvar) {
                    tracing::debug!(zone = %zone.config.name, %sysvar, "subscribed humidity channel");
                } else {
                    tracing::warn!(zone = %zone.config.name, %sysvar, "bus rejected humidity subscription");
                    zone.config.humidity_sysvar = None;
                }
            }
        }

        Self {
            registry: ZoneRegistry::new(zones),
            bus,
            sink,
        }
    }

    /// Entry point for the host's change notifications.
    ///
    /// Variables owned by no zone are silently ignored — the bus may deliver
    /// notifications for variables outside this driver's interest.
    pub fn on_sensor_changed(&mut self, sysvar: SysvarId) {
        let Some(index) = self.registry.owner_of_sysvar(sysvar) else {
            tracing::trace!(%sysvar, "notification for an unwatched variable");
            return;
        };
        if self.recompute_dewpoint(index) {
            self.evaluate_baffle(index);
        }
    }

    /// The zone registry (read-only).
    #[must_use]
    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    /// Look up a zone by its 1-based index.
    #[must_use]
    pub fn zone(&self, index: usize) -> Option<&Zone> {
        self.registry.get(index)
    }

    /// The sensor-bus collaborator.
    #[must_use]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the sensor-bus collaborator, for hosts that feed
    /// readings through the same object they handed to the controller.
    #[must_use]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// The action-sink collaborator.
    #[must_use]
    pub fn sink(&self) -> &A {
        &self.sink
    }

    /// Re-read both sensors for the zone, recompute its dew point, shift the
    /// trend window, and publish the rounded value. Returns `false` when the
    /// zone is degraded (a sensor channel is unset) and nothing changed.
    fn recompute_dewpoint(&mut self, index: usize) -> bool {
        let Some(zone) = self.registry.get(index) else {
            return false;
        };
        let (Some(temperature_sysvar), Some(humidity_sysvar)) =
            (zone.config.temperature_sysvar, zone.config.humidity_sysvar)
        else {
            tracing::debug!(zone = %zone.config.name, "sensor channel unset, dew point not recomputed");
            return false;
        };
        let unit = zone.config.unit;
        let divisor = zone.config.temperature_divisor;
        let name = zone.config.name.clone();
        let dewpoint_var = zone.dewpoint_var.clone();

        let mut temperature = self.bus.read(temperature_sysvar);
        // Some sensors transmit integers scaled by 10 or 100.
        if divisor > 1.0 {
            temperature /= divisor;
        }
        if unit == TemperatureUnit::Fahrenheit {
            temperature = units::to_celsius(temperature);
        }
        let humidity = self.bus.read(humidity_sysvar);

        let mut dewpoint = dew_point_celsius(temperature, humidity);
        if unit == TemperatureUnit::Fahrenheit {
            dewpoint = units::to_fahrenheit(dewpoint);
        }
        tracing::debug!(zone = %name, temperature, humidity, dewpoint, "recomputed dew point");

        if let Some(zone) = self.registry.get_mut(index) {
            zone.record_dewpoint(dewpoint);
        }
        self.bus.write(&dewpoint_var, dewpoint.round());
        true
    }

    /// Evaluate the single baffle transition tied to the zone whose dew
    /// point just changed.
    fn evaluate_baffle(&mut self, changed: usize) {
        // The zone downstream of the changed one owns the baffle being
        // evaluated; with no downstream consumer the changed zone's own
        // inlet is evaluated instead.
        let outlet_index = self.registry.outlet_of(changed).unwrap_or(changed);
        let Some(outlet) = self.registry.get(outlet_index) else {
            return;
        };
        let Some(inlet_name) = outlet.config.inlet_zone.clone() else {
            tracing::debug!(zone = %outlet.config.name, "no inlet baffle to control");
            return;
        };
        let outlet_open = outlet.state.inlet_open;
        let outlet_current = outlet.state.current_dewpoint;
        let delta = outlet.config.dehumidify_delta;

        let supplier_index = if outlet_index == changed {
            match self.registry.index_by_name(&inlet_name) {
                Some(index) => index,
                None => {
                    tracing::warn!(inlet = %inlet_name, "inlet supplier names no configured zone");
                    return;
                }
            }
        } else {
            changed
        };
        let Some(supplier) = self.registry.get(supplier_index) else {
            return;
        };
        let supplier_current = supplier.state.current_dewpoint;
        let supplier_last = supplier.state.last_dewpoint;

        if !supplier_current.is_finite() || !supplier_last.is_finite() {
            tracing::debug!(supplier = %supplier.config.name, "non-finite dew point, no baffle decision");
            return;
        }

        if supplier_current > supplier_last {
            // Rising dew point: the air entering is getting wetter.
            tracing::debug!(supplier = %supplier.config.name, "inlet dew point rising");
            if outlet_open {
                self.close_baffle(outlet_index);
            }
        } else {
            // Falling or equal: getting drier. Equal counts as falling so
            // an unchanged reading never closes the baffle on its own.
            tracing::debug!(supplier = %supplier.config.name, "inlet dew point falling");
            if !outlet_open && outlet_current.is_finite() {
                if outlet_current - supplier_current >= delta {
                    self.open_baffle(outlet_index);
                } else {
                    tracing::debug!(
                        gap = outlet_current - supplier_current,
                        delta,
                        "dew-point gap below dehumidify delta, baffle stays closed"
                    );
                }
            }
        }
    }

    fn close_baffle(&mut self, index: usize) {
        let Some(zone) = self.registry.get(index) else {
            return;
        };
        let name = zone.config.name.clone();
        let event = zone.close_event.clone();
        if let Some(id) = zone.config.close_macro {
            tracing::debug!(zone = %name, macro_id = %id, "running close-inlet macro");
            self.sink.run_macro(id);
        }
        tracing::debug!(zone = %name, %event, "signalling inlet close");
        self.sink.signal_event(&event);
        if let Some(zone) = self.registry.get_mut(index) {
            zone.state.inlet_open = false;
        }
    }

    fn open_baffle(&mut self, index: usize) {
        let Some(zone) = self.registry.get(index) else {
            return;
        };
        let name = zone.config.name.clone();
        let event = zone.open_event.clone();
        if let Some(id) = zone.config.open_macro {
            tracing::debug!(zone = %name, macro_id = %id, "running open-inlet macro");
            self.sink.run_macro(id);
        }
        tracing::debug!(zone = %name, %event, "signalling inlet open");
        self.sink.signal_event(&event);
        if let Some(zone) = self.registry.get_mut(index) {
            zone.state.inlet_open = true;
        }
    }
}
