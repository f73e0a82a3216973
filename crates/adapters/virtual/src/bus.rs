//! In-memory sensor bus.

use std::collections::{HashMap, HashSet};

use dewflow_app::ports::SensorBus;
use dewflow_domain::id::SysvarId;

/// In-memory [`SensorBus`]: readings are stored with [`set`](Self::set),
/// derived writes are recorded for inspection, and a configurable set of
/// identifiers can be made to reject subscriptions.
///
/// Reading a variable that was never set yields NaN — "no reading", which
/// the controller's non-finite guard treats as no decision.
#[derive(Debug, Default)]
pub struct VirtualBus {
    values: HashMap<SysvarId, f64>,
    written: Vec<(String, f64)>,
    rejected: HashSet<SysvarId>,
    subscriptions: Vec<SysvarId>,
}

impl VirtualBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the bus reject subscription attempts for `sysvar`.
    #[must_use]
    pub fn rejecting(mut self, sysvar: SysvarId) -> Self {
        self.rejected.insert(sysvar);
        self
    }

    /// Store a reading, as the simulated host would.
    pub fn set(&mut self, sysvar: SysvarId, value: f64) {
        self.values.insert(sysvar, value);
    }

    /// Variables subscribed so far, in registration order.
    #[must_use]
    pub fn subscriptions(&self) -> &[SysvarId] {
        &self.subscriptions
    }

    /// All derived writes, in order.
    #[must_use]
    pub fn written(&self) -> &[(String, f64)] {
        &self.written
    }

    /// The most recent value written under `name`, if any.
    #[must_use]
    pub fn last_written(&self, name: &str) -> Option<f64> {
        self.written
            .iter()
            .rev()
            .find(|(written, _)| written == name)
            .map(|&(_, value)| value)
    }
}

impl SensorBus for VirtualBus {
    fn add_subscription(&mut self, sysvar: SysvarId) -> bool {
        if self.rejected.contains(&sysvar) {
            return false;
        }
        self.subscriptions.push(sysvar);
        true
    }

    fn read(&self, sysvar: SysvarId) -> f64 {
        self.values.get(&sysvar).copied().unwrap_or(f64::NAN)
    }

    fn write(&mut self, name: &str, value: f64) {
        self.written.push((name.to_string(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_back_stored_value() {
        let mut bus = VirtualBus::new();
        bus.set(SysvarId::new(101), 21.5);
        assert!((bus.read(SysvarId::new(101)) - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_read_nan_for_unknown_variable() {
        let bus = VirtualBus::new();
        assert!(bus.read(SysvarId::new(9999)).is_nan());
    }

    #[test]
    fn should_record_subscriptions_in_order() {
        let mut bus = VirtualBus::new();
        assert!(bus.add_subscription(SysvarId::new(101)));
        assert!(bus.add_subscription(SysvarId::new(102)));
        assert_eq!(
            bus.subscriptions(),
            &[SysvarId::new(101), SysvarId::new(102)]
        );
    }

    #[test]
    fn should_reject_configured_subscription() {
        let mut bus = VirtualBus::new().rejecting(SysvarId::new(102));
        assert!(bus.add_subscription(SysvarId::new(101)));
        assert!(!bus.add_subscription(SysvarId::new(102)));
        assert_eq!(bus.subscriptions(), &[SysvarId::new(101)]);
    }

    #[test]
    fn should_keep_latest_write_per_name() {
        let mut bus = VirtualBus::new();
        bus.write("DewPoint1", 9.0);
        bus.write("DewPoint1", 12.0);
        assert_eq!(bus.last_written("DewPoint1"), Some(12.0));
        assert_eq!(bus.written().len(), 2);
        assert_eq!(bus.last_written("DewPoint2"), None);
    }
}
