//! Derived meteorological quantities computed from base measurements.
//!
//! All temperatures are in °C, wind speeds in m/s and humidity in percent.

// Rothfusz regression coefficients, Celsius form.
const C1: f64 = -8.784_694_755_56;
const C2: f64 = 1.611_394_11;
const C3: f64 = 2.338_548_838_89;
const C4: f64 = -0.146_116_05;
const C5: f64 = -0.012_308_094;
const C6: f64 = -0.016_424_827_777_8;
const C7: f64 = 0.002_211_732;
const C8: f64 = 0.000_725_46;
const C9: f64 = -0.000_003_582;

/// Heat-index adjusted temperature.
///
/// Returns `temperature` unchanged when it is below 27 °C or the relative
/// humidity is below 40 %. Otherwise applies the Rothfusz regression.
///
/// ```
/// use smhi::heat_index;
///
/// assert_eq!(heat_index(20.0, 50.0), 20.0);
/// assert!(heat_index(30.0, 60.0) > 30.0);
/// ```
pub fn heat_index(temperature: f64, humidity: f64) -> f64 {
    if temperature < 27.0 || humidity < 40.0 {
        return temperature;
    }
    let t = temperature;
    let r = humidity;
    let t2 = t * t;
    let r2 = r * r;
    C1 + C2 * t + C3 * r + C4 * t * r + C5 * t2 + C6 * r2 + C7 * t2 * r + C8 * t * r2 + C9 * t2 * r2
}

/// Wind-chill adjusted temperature.
///
/// Only applies for temperatures in (-40, 10] °C and wind speeds in [2, 35] m/s;
/// outside that range the input temperature is returned unchanged.
///
/// ```
/// use smhi::wind_chill;
///
/// assert_eq!(wind_chill(5.0, 1.0), 5.0);
/// assert!(wind_chill(5.0, 10.0) < 5.0);
/// ```
pub fn wind_chill(temperature: f64, wind_speed: f64) -> f64 {
    if temperature <= -40.0 || temperature > 10.0 {
        return temperature;
    }
    if !(2.0..=35.0).contains(&wind_speed) {
        return temperature;
    }
    let v = wind_speed.powf(0.16);
    13.12 + 0.6215 * temperature - 13.956 * v + 0.48669 * temperature * v
}

/// Composite "feels like" temperature: the wind chill of the heat index.
pub fn feels_like(temperature: f64, humidity: f64, wind_speed: f64) -> f64 {
    wind_chill(heat_index(temperature, humidity), wind_speed)
}

/// Dew point temperature from the Magnus formula.
///
/// Uses one coefficient pair above freezing and another at or below it.
/// Returns NaN when `humidity` is not positive.
///
/// ```
/// use smhi::dew_point;
///
/// // Saturated air has its dew point at the air temperature.
/// assert!((dew_point(15.0, 100.0) - 15.0).abs() < 1e-9);
/// ```
pub fn dew_point(temperature: f64, humidity: f64) -> f64 {
    let (b, c) = if temperature > 0.0 {
        (17.368, 238.88)
    } else {
        (17.966, 247.15)
    };
    let pa = humidity / 100.0 * (b * temperature / (c + temperature)).exp();
    let ln_pa = pa.ln();
    c * ln_pa / (b - ln_pa)
}
