//! Dew-point computation (Magnus-type approximation).
//!
//! The dew point is the temperature at which air becomes saturated given its
//! current humidity — a proxy for moisture content that is independent of
//! temperature, which is what makes it usable for inter-zone comparisons.

/// Magnus coefficient `a` (dimensionless).
const MAGNUS_A: f64 = 17.625;
/// Magnus coefficient `b` (degrees Celsius).
const MAGNUS_B: f64 = 243.04;

/// Compute the dew point in Celsius from a temperature in Celsius and a
/// relative humidity percentage (`55.0`, not `0.55`).
///
/// Precondition: `0 < humidity <= 100`. A non-positive humidity puts the
/// logarithm outside its domain and the result is NaN; callers are expected
/// to treat a non-finite dew point as "no reading" rather than a value.
#[must_use]
pub fn dew_point_celsius(temperature: f64, humidity: f64) -> f64 {
    let a = (humidity / 100.0).ln();
    let b = (MAGNUS_A * temperature) / (MAGNUS_B + temperature);
    MAGNUS_B * (a + b) / (MAGNUS_A - a - b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_reference_value_at_room_conditions() {
        // 20 C at 50 % RH.
        let dp = dew_point_celsius(20.0, 50.0);
        assert!((dp - 9.27).abs() < 0.01, "got {dp}");
    }

    #[test]
    fn should_match_reference_value_in_humid_heat() {
        // 30 C at 80 % RH.
        let dp = dew_point_celsius(30.0, 80.0);
        assert!((dp - 26.16).abs() < 0.05, "got {dp}");
    }

    #[test]
    fn should_equal_air_temperature_at_saturation() {
        let dp = dew_point_celsius(15.0, 100.0);
        assert!((dp - 15.0).abs() < 1e-9, "got {dp}");
    }

    #[test]
    fn should_stay_below_air_temperature_when_unsaturated() {
        for humidity in [10.0, 35.0, 60.0, 90.0] {
            let dp = dew_point_celsius(22.0, humidity);
            assert!(dp < 22.0, "dew point {dp} at {humidity} % RH");
        }
    }

    #[test]
    fn should_rise_with_humidity() {
        let drier = dew_point_celsius(20.0, 40.0);
        let wetter = dew_point_celsius(20.0, 70.0);
        assert!(wetter > drier);
    }

    #[test]
    fn should_produce_nan_when_humidity_is_not_positive() {
        assert!(dew_point_celsius(20.0, 0.0).is_nan());
        assert!(dew_point_celsius(20.0, -5.0).is_nan());
    }
}
