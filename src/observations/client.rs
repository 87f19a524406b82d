//! Provides the [`ObservationsClient`] which walks the observations API link
//! graph from the service root down to a concrete [`Value`].

use crate::http;
use crate::observations::csv_parser::parse_csv_value;
use crate::observations::error::ObservationsError;
use crate::observations::link::{
    resolve_link, resolve_preferred_link, CSV_CONTENT_TYPE, JSON_CONTENT_TYPE,
};
use crate::observations::locate_station::{closest_station, station_by_name};
use crate::observations::models::{
    Parameter, PeriodData, PeriodDetails, Service, Station, StationParameter, Value,
};
use crate::types::coordinates::Coordinates;
use bon::bon;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const DEFAULT_OBSERVATIONS_URL: &str = "https://opendata-download-metobs.smhi.se/api/version/1.0";
pub const DEFAULT_PERIOD: &str = "latest-hour";

enum StationSelector<'a> {
    Name(&'a str),
    Closest(Coordinates),
}

/// Client for the observations API.
///
/// Every lookup is a chain of sequential requests: service root, parameter
/// resource, station, period and finally the data itself. Each URL is taken from
/// the links of the previous response.
#[derive(Debug, Clone)]
pub struct ObservationsClient {
    client: Client,
    base_url: String,
}

impl Default for ObservationsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl ObservationsClient {
    /// Creates a client for the public observations API.
    pub fn new() -> Self {
        Self::with_base_url(Client::new(), DEFAULT_OBSERVATIONS_URL)
    }

    /// Creates a client with a custom HTTP client and API base path.
    ///
    /// The service root is fetched from `{base_url}.json`.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Fetches the service root listing all parameter resources.
    ///
    /// # Errors
    ///
    /// Returns a transport or JSON error if the request fails.
    pub async fn service(&self) -> Result<Service, ObservationsError> {
        let url = format!("{}.json", self.base_url);
        self.get_json(&url).await
    }

    /// Fetches the readings of a parameter at the first active station whose name
    /// contains `name` (case-insensitive).
    ///
    /// # Builder Methods
    ///
    /// * `.parameter(&str)`: Required. The resource key of the parameter, e.g. `"1"`
    ///   for air temperature.
    /// * `.period(&str)`: Optional. The period key. Defaults to `"latest-hour"`.
    ///
    /// # Errors
    ///
    /// * [`ObservationsError::MissingResource`] if no resource has the parameter key.
    /// * [`ObservationsError::MissingStation`] if no active station matches.
    /// * [`ObservationsError::MissingPeriod`] if the station lacks the period.
    /// * [`ObservationsError::MissingPeriodData`] if the period has no data entry.
    /// * [`ObservationsError::NoMatchingLink`] if a node lacks a usable link.
    /// * Transport, JSON and CSV errors from any hop.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use smhi::{ObservationsClient, ObservationsError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ObservationsError> {
    /// let client = ObservationsClient::new();
    /// let value = client
    ///     .by_station_name("lund")
    ///     .parameter("1")
    ///     .period("latest-day")
    ///     .call()
    ///     .await?;
    /// for reading in &value.value {
    ///     println!("{} {} {}", reading.date, reading.value, value.parameter.unit);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = by_station_name)]
    #[doc(hidden)]
    pub async fn build_by_station_name(
        &self,
        #[builder(start_fn)] name: &str,
        parameter: &str,
        period: Option<&str>,
    ) -> Result<Value, ObservationsError> {
        self.traverse(
            StationSelector::Name(name),
            parameter,
            period.unwrap_or(DEFAULT_PERIOD),
        )
        .await
    }

    /// Fetches the readings of a parameter at the active station closest to the
    /// given coordinates.
    ///
    /// Takes the same builder methods and returns the same errors as
    /// [`ObservationsClient::by_station_name`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use smhi::{ObservationsClient, ObservationsError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ObservationsError> {
    /// let client = ObservationsClient::new();
    /// let value = client
    ///     .by_coordinates(56.0465, 12.6945)
    ///     .parameter("1")
    ///     .call()
    ///     .await?;
    /// println!("{} readings from {}", value.value.len(), value.station.name);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = by_coordinates)]
    #[doc(hidden)]
    pub async fn build_by_coordinates(
        &self,
        #[builder(start_fn)] latitude: f64,
        #[builder(start_fn)] longitude: f64,
        parameter: &str,
        period: Option<&str>,
    ) -> Result<Value, ObservationsError> {
        self.traverse(
            StationSelector::Closest(Coordinates::new(latitude, longitude)),
            parameter,
            period.unwrap_or(DEFAULT_PERIOD),
        )
        .await
    }

    async fn traverse(
        &self,
        selector: StationSelector<'_>,
        parameter_key: &str,
        period_key: &str,
    ) -> Result<Value, ObservationsError> {
        let service = self.service().await?;

        let resource = service
            .resource
            .iter()
            .find(|resource| resource.key == parameter_key)
            .ok_or_else(|| ObservationsError::MissingResource(parameter_key.to_string()))?;
        debug!("Resource '{}' ({})", resource.key, resource.title);
        let parameter: Parameter = self
            .get_json(resolve_link(&resource.link, JSON_CONTENT_TYPE)?)
            .await?;

        let station = select_station(&parameter.station, &selector)?;
        debug!("Station '{}' ({})", station.name, station.key);
        let station_parameter: StationParameter = self
            .get_json(resolve_link(&station.link, JSON_CONTENT_TYPE)?)
            .await?;

        let period = station_parameter
            .period
            .iter()
            .find(|period| period.key == period_key)
            .ok_or_else(|| ObservationsError::MissingPeriod(period_key.to_string()))?;
        debug!("Period '{}'", period.key);
        let details: PeriodDetails = self
            .get_json(resolve_link(&period.link, JSON_CONTENT_TYPE)?)
            .await?;

        let data = details
            .data
            .first()
            .ok_or_else(|| ObservationsError::MissingPeriodData(period_key.to_string()))?;
        let mut value = self.value(data).await?;

        // The text representation carries no keys.
        if value.parameter.key.is_empty() {
            value.parameter.key = parameter_key.to_string();
        }
        if value.period.key.is_empty() {
            value.period.key = period_key.to_string();
        }
        Ok(value)
    }

    /// Fetches the readings behind a period data entry.
    ///
    /// JSON is preferred; the text representation is used when no JSON link exists.
    ///
    /// # Errors
    ///
    /// [`ObservationsError::NoMatchingLink`] if neither representation is linked,
    /// otherwise the transport and decoding errors of the chosen representation.
    pub async fn value(&self, data: &PeriodData) -> Result<Value, ObservationsError> {
        let link = resolve_preferred_link(&data.link, &[JSON_CONTENT_TYPE, CSV_CONTENT_TYPE])?;
        if link.content_type == JSON_CONTENT_TYPE {
            self.get_json(&link.href).await
        } else {
            let text = self.get_text(&link.href).await?;
            parse_csv_value(&text, link)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ObservationsError> {
        http::get_json(&self.client, url).await
    }

    async fn get_text(&self, url: &str) -> Result<String, ObservationsError> {
        let bytes = http::get_bytes(&self.client, url).await?;
        String::from_utf8(bytes).map_err(|e| ObservationsError::InvalidEncoding(url.to_string(), e))
    }
}

fn select_station<'a>(
    stations: &'a [Station],
    selector: &StationSelector<'_>,
) -> Result<&'a Station, ObservationsError> {
    match selector {
        StationSelector::Name(name) => station_by_name(stations, name)
            .ok_or_else(|| ObservationsError::MissingStation(format!("name '{name}'"))),
        StationSelector::Closest(target) => closest_station(stations, target)
            .ok_or_else(|| ObservationsError::MissingStation(format!("near {target}"))),
    }
}
