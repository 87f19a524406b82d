use crate::forecast::parameter_table::ForecastField;
use chrono::{DateTime, Utc};
use crate::http::HttpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse forecast JSON from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Forecast field '{field}' is missing or invalid at {time}")]
    MissingField {
        field: ForecastField,
        time: DateTime<Utc>,
    },
}

impl HttpError for ForecastError {
    fn network(url: String, source: reqwest::Error) -> Self {
        ForecastError::NetworkRequest(url, source)
    }

    fn status(url: String, status: reqwest::StatusCode, source: reqwest::Error) -> Self {
        ForecastError::HttpStatus { url, status, source }
    }

    fn json(url: String, source: serde_json::Error) -> Self {
        ForecastError::JsonParse { url, source }
    }
}
