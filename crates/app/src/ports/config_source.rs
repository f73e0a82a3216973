//! Configuration port — flat key/value access to the host's driver settings.

/// Read-only access to the host's flat key/value configuration.
///
/// Keys follow the host's slot convention: `ZoneName<i>`,
/// `UnitsFahrenheit<i>`, `TemperatureSysvar<i>`, `TemperatureDivisor<i>`,
/// `HumiditySysvar<i>`, `DehumidifyDelta<i>`, `InletZone<i>`,
/// `OpenInletMacro<i>`, `CloseInletMacro<i>` for slots 1 through 10, plus
/// the global `DebugTrace` flag.
pub trait ConfigSource {
    /// Return the value for `key`, or an empty string when absent.
    fn get(&self, key: &str) -> String;
}
