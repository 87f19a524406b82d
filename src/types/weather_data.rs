use crate::types::coordinates::Coordinates;
use crate::types::precipitation::PrecipitationCategory;
use crate::types::weather_symbol::WeatherSymbol;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One fully populated weather record for a single instant and location.
///
/// Every field is guaranteed to be present and finite. Records are produced by
/// [`ForecastService`](crate::ForecastService) (or any other
/// [`WeatherService`](crate::WeatherService)) and are never partially filled.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    /// `true` for forecast records, `false` for observed values.
    pub is_forecast: bool,
    pub time: DateTime<Utc>,
    pub coordinates: Coordinates,
    /// Mean sea level pressure in hPa.
    pub air_pressure: f64,
    /// Air temperature in °C.
    pub air_temperature: f64,
    /// Heat-index then wind-chill adjusted temperature in °C.
    pub air_temperature_feels_like: f64,
    /// Horizontal visibility in km.
    pub horizontal_visibility: f64,
    /// Wind direction in degrees.
    pub wind_direction: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Wind gust speed in m/s.
    pub wind_gust_speed: f64,
    /// Relative humidity in percent.
    pub relative_humidity: i64,
    /// Thunder probability in percent.
    pub thunder_probability: i64,
    /// Cloud cover bands in octas (0-8).
    pub total_cloud_cover: i64,
    pub low_level_cloud_cover: i64,
    pub medium_level_cloud_cover: i64,
    pub high_level_cloud_cover: i64,
    /// Precipitation intensity bounds in mm/h.
    pub min_precipitation: f64,
    pub max_precipitation: f64,
    /// Percent of precipitation in frozen form. `0` when the source reports none.
    pub frozen_precipitation_percentage: i64,
    pub mean_precipitation_intensity: f64,
    pub median_precipitation_intensity: f64,
    pub precipitation_category: PrecipitationCategory,
    pub symbol: WeatherSymbol,
}

impl WeatherData {
    /// Stable identifier derived from the timestamp, one record per instant.
    ///
    /// ```
    /// # use smhi::Weather;
    /// let preview = Weather::preview_data();
    /// assert!(preview[0].id().starts_with("weather-at-"));
    /// ```
    pub fn id(&self) -> String {
        format!(
            "weather-at-{}",
            self.time.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}
