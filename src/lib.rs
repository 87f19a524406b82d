mod derived;
mod error;
mod forecast;
mod http;
mod observations;
mod staleness;
mod types;
mod weather;

pub use error::SmhiError;
pub use weather::*;

pub use derived::{dew_point, feels_like, heat_index, wind_chill};
pub use staleness::{FetchStatus, StalenessPolicy, DEFAULT_MAX_AGE};

pub use observations::client::{ObservationsClient, DEFAULT_OBSERVATIONS_URL, DEFAULT_PERIOD};
pub use observations::condition_codes::condition_description;
pub use observations::csv_parser::parse_csv_value;
pub use observations::error::ObservationsError;
pub use observations::link::{resolve_link, Link, CSV_CONTENT_TYPE, JSON_CONTENT_TYPE};
pub use observations::models::*;

pub use forecast::error::ForecastError;
pub use forecast::models::{Forecast, Geometry, RawParameter, TimeSeries};
pub use forecast::normalizer::{normalize, normalize_time_series};
pub use forecast::parameter_table::{unit_suffix, ForecastField, ParameterEntry, ParameterTable};
pub use forecast::service::{ForecastService, DEFAULT_FORECAST_URL};

pub use types::coordinates::Coordinates;
pub use types::precipitation::PrecipitationCategory;
pub use types::weather_data::WeatherData;
pub use types::weather_symbol::WeatherSymbol;
