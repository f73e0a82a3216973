//! Sensor-bus port — the host's numeric variable bus.

use dewflow_domain::id::SysvarId;

/// The host's sensor/variable bus.
///
/// The controller registers interest in variables at construction time; the
/// host then invokes
/// [`ZoneController::on_sensor_changed`](crate::controller::ZoneController::on_sensor_changed)
/// whenever a subscribed variable's value changes. Notifications only signal
/// *which* variable changed — current values are always re-read through
/// [`read`](Self::read).
pub trait SensorBus {
    /// Register interest in a variable. Returns `false` when the bus rejects
    /// the identifier, in which case the zone's channel is degraded to unset.
    fn add_subscription(&mut self, sysvar: SysvarId) -> bool;

    /// Read the current value of a variable.
    fn read(&self, sysvar: SysvarId) -> f64;

    /// Publish a derived value under a named variable (e.g. `DewPoint3`).
    fn write(&mut self, name: &str, value: f64);
}
