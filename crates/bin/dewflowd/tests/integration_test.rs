//! End-to-end smoke tests for the full driver stack.
//!
//! Each test wires the real loader and controller to the virtual adapter
//! (in-memory bus, recording sink, map-backed configuration) and drives the
//! scenario through sensor-change notifications only — no host required.

use dewflow_adapter_virtual::{Command, MapConfig, RecordingSink, VirtualBus};
use dewflow_app::controller::ZoneController;
use dewflow_app::loader::load_zones;
use dewflow_domain::dewpoint::dew_point_celsius;
use dewflow_domain::id::{MacroId, SysvarId};
use dewflow_domain::units::to_fahrenheit;

/// Two-zone topology: the pantry draws inlet air from the cellar through a
/// baffle with a 5-degree dehumidify delta. The pantry sits in slot 3 so the
/// host-facing names carry the slot index, not the load order.
fn driver_config() -> MapConfig {
    MapConfig::new()
        .with("ZoneName1", "Cellar")
        .with("TemperatureSysvar1", "101")
        .with("HumiditySysvar1", "102")
        .with("ZoneName3", "Pantry")
        .with("TemperatureSysvar3", "301")
        .with("HumiditySysvar3", "302")
        .with("DehumidifyDelta3", "5")
        .with("InletZone3", "Cellar")
        .with("OpenInletMacro3", "11")
        .with("CloseInletMacro3", "12")
}

fn controller(bus: VirtualBus, source: &MapConfig) -> ZoneController<VirtualBus, RecordingSink> {
    ZoneController::new(load_zones(source), bus, RecordingSink::new())
}

/// Store both readings for a zone and notify on the humidity variable.
fn feed(
    ctl: &mut ZoneController<VirtualBus, RecordingSink>,
    temp_var: u32,
    temperature: f64,
    humidity_var: u32,
    humidity: f64,
) {
    ctl.bus_mut().set(SysvarId::new(temp_var), temperature);
    ctl.bus_mut().set(SysvarId::new(humidity_var), humidity);
    ctl.on_sensor_changed(SysvarId::new(humidity_var));
}

#[test]
fn should_complete_hysteresis_cycle_end_to_end() {
    let source = driver_config();
    let mut ctl = controller(VirtualBus::new(), &source);

    // Establish readings; the pantry is noticeably wetter than the cellar.
    feed(&mut ctl, 101, 20.0, 102, 60.0);
    feed(&mut ctl, 301, 25.0, 302, 80.0);
    assert!(ctl.sink().commands().is_empty());

    // Cellar dries out: falling trend plus a gap above the delta opens the
    // pantry's baffle.
    feed(&mut ctl, 101, 20.0, 102, 40.0);
    assert!(ctl.zone(3).unwrap().state.inlet_open);

    // Cellar gets wetter: rising trend closes it again.
    feed(&mut ctl, 101, 20.0, 102, 75.0);
    assert!(!ctl.zone(3).unwrap().state.inlet_open);

    assert_eq!(
        ctl.sink().commands(),
        &[
            Command::Macro(MacroId::new(11)),
            Command::Event("OpenEventName3".to_string()),
            Command::Macro(MacroId::new(12)),
            Command::Event("CloseEventName3".to_string()),
        ]
    );
}

#[test]
fn should_publish_rounded_dewpoints_per_slot() {
    let source = driver_config();
    let mut ctl = controller(VirtualBus::new(), &source);

    feed(&mut ctl, 101, 20.0, 102, 50.0);
    feed(&mut ctl, 301, 30.0, 302, 80.0);

    let cellar_dp = dew_point_celsius(20.0, 50.0);
    let pantry_dp = dew_point_celsius(30.0, 80.0);
    assert_eq!(ctl.bus().last_written("DewPoint1"), Some(cellar_dp.round()));
    assert_eq!(ctl.bus().last_written("DewPoint3"), Some(pantry_dp.round()));
}

#[test]
fn should_handle_fahrenheit_zone_with_scaled_sensor() {
    let source = MapConfig::new()
        .with("ZoneName2", "Attic")
        .with("UnitsFahrenheit2", "true")
        .with("TemperatureSysvar2", "201")
        .with("TemperatureDivisor2", "10")
        .with("HumiditySysvar2", "202");
    let mut ctl = controller(VirtualBus::new(), &source);

    // Raw reading 680 scales down to 68 F, i.e. 20 C.
    feed(&mut ctl, 201, 680.0, 202, 50.0);

    let expected = to_fahrenheit(dew_point_celsius(20.0, 50.0));
    let state = ctl.zone(2).unwrap().state;
    assert!((state.current_dewpoint - expected).abs() < f64::EPSILON);
    assert_eq!(ctl.bus().last_written("DewPoint2"), Some(expected.round()));
}

#[test]
fn should_survive_rejected_subscription_end_to_end() {
    let source = driver_config();
    let bus = VirtualBus::new().rejecting(SysvarId::new(102));
    let mut ctl = controller(bus, &source);

    // The cellar's humidity channel is degraded; neither of its variables
    // produces a dew point any more.
    feed(&mut ctl, 101, 20.0, 102, 50.0);
    ctl.on_sensor_changed(SysvarId::new(101));

    let state = ctl.zone(1).unwrap().state;
    assert!(state.current_dewpoint.abs() < f64::EPSILON);
    assert!(ctl.bus().last_written("DewPoint1").is_none());

    // The pantry keeps working.
    feed(&mut ctl, 301, 25.0, 302, 80.0);
    assert!(ctl.bus().last_written("DewPoint3").is_some());
}

#[test]
fn should_do_nothing_with_empty_configuration() {
    let source = MapConfig::new();
    let mut ctl = controller(VirtualBus::new(), &source);

    assert!(ctl.registry().is_empty());
    ctl.on_sensor_changed(SysvarId::new(101));
    assert!(ctl.sink().commands().is_empty());
    assert!(ctl.bus().written().is_empty());
}
