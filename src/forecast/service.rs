//! Provides the [`ForecastService`] for fetching and normalizing point forecasts.

use crate::error::SmhiError;
use crate::forecast::error::ForecastError;
use crate::forecast::models::Forecast;
use crate::forecast::normalizer::normalize_time_series;
use crate::http::get_json;
use crate::types::coordinates::Coordinates;
use crate::types::weather_data::WeatherData;
use crate::weather::WeatherService;
use async_trait::async_trait;
use log::warn;
use reqwest::Client;

pub const DEFAULT_FORECAST_URL: &str = "https://opendata-download-metfcst.smhi.se";

/// Fetches the point forecast for a coordinate and turns every time slice into
/// a [`WeatherData`] record.
///
/// By default a single incomplete slice fails the whole batch. Enable
/// [`ForecastService::skip_incomplete`] to drop such slices instead.
///
/// # Example
///
/// ```no_run
/// # use smhi::{Coordinates, ForecastService, ForecastError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ForecastError> {
/// let service = ForecastService::new();
/// let records = service.weather(Coordinates::new(56.0465, 12.6945)).await?;
/// for record in records.iter().take(3) {
///     println!("{}: {:.1}°, feels like {:.1}°", record.time, record.air_temperature, record.air_temperature_feels_like);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ForecastService {
    client: Client,
    base_url: String,
    skip_incomplete: bool,
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastService {
    pub fn new() -> Self {
        Self::with_base_url(Client::new(), DEFAULT_FORECAST_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            skip_incomplete: false,
        }
    }

    /// Skip time slices that fail normalization instead of failing the batch.
    pub fn skip_incomplete(mut self, skip: bool) -> Self {
        self.skip_incomplete = skip;
        self
    }

    /// The forecast URL for a coordinate, with six decimals per axis.
    pub fn url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/api/category/pmp3g/version/2/geotype/point/lon/{:.6}/lat/{:.6}/data.json",
            self.base_url, coordinates.longitude, coordinates.latitude
        )
    }

    /// Fetches the raw forecast document.
    pub async fn forecast(&self, coordinates: Coordinates) -> Result<Forecast, ForecastError> {
        get_json(&self.client, &self.url(coordinates)).await
    }

    /// Normalizes every time slice of a forecast document.
    ///
    /// # Errors
    ///
    /// [`ForecastError::MissingField`] for the first incomplete slice, unless
    /// incomplete slices are skipped.
    pub fn normalize(
        &self,
        forecast: &Forecast,
        coordinates: Coordinates,
    ) -> Result<Vec<WeatherData>, ForecastError> {
        let mut records = Vec::with_capacity(forecast.time_series.len());
        for series in &forecast.time_series {
            match normalize_time_series(series, coordinates) {
                Ok(record) => records.push(record),
                Err(e) if self.skip_incomplete => warn!("Skipping forecast slice: {e}"),
                Err(e) => return Err(e),
            }
        }
        Ok(records)
    }

    /// Fetches and normalizes the forecast for a coordinate.
    pub async fn weather(&self, coordinates: Coordinates) -> Result<Vec<WeatherData>, ForecastError> {
        let forecast = self.forecast(coordinates).await?;
        self.normalize(&forecast, coordinates)
    }
}

#[async_trait]
impl WeatherService for ForecastService {
    async fn fetch(&self, coordinates: Coordinates) -> Result<Vec<WeatherData>, SmhiError> {
        Ok(self.weather(coordinates).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_six_decimals_lon_first() {
        let service = ForecastService::with_base_url(Client::new(), "http://localhost:1234/");
        assert_eq!(
            service.url(Coordinates::new(56.0014127, 12.7416203)),
            "http://localhost:1234/api/category/pmp3g/version/2/geotype/point/lon/12.741620/lat/56.001413/data.json"
        );
    }

    #[test]
    fn lenient_mode_drops_incomplete_slices() {
        let json = r#"{"timeSeries": [
            {"validTime": "2021-10-01T12:00:00Z", "parameters": [
                {"name": "t", "levelType": "hl", "level": 2, "unit": "Cel", "values": [11.9]}
            ]}
        ]}"#;
        let forecast: Forecast = serde_json::from_str(json).unwrap();
        let coords = Coordinates::new(56.0, 12.7);

        let strict = ForecastService::new();
        assert!(matches!(
            strict.normalize(&forecast, coords),
            Err(ForecastError::MissingField { .. })
        ));

        let lenient = ForecastService::new().skip_incomplete(true);
        assert!(lenient.normalize(&forecast, coords).unwrap().is_empty());
    }
}
