use crate::http::HttpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservationsError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON data from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response body from {0} is not valid text")]
    InvalidEncoding(String, #[source] std::string::FromUtf8Error),

    #[error("No link with content type '{0}'")]
    NoMatchingLink(String),

    #[error("No resource with key '{0}'")]
    MissingResource(String),

    #[error("No active station matching {0}")]
    MissingStation(String),

    #[error("No period with key '{0}'")]
    MissingPeriod(String),

    #[error("Period '{0}' has no data")]
    MissingPeriodData(String),

    // CSV section errors
    #[error("CSV data contains no rows")]
    InvalidRowCount,

    #[error("Invalid station data in CSV")]
    InvalidStationData,

    #[error("Invalid parameter data in CSV")]
    InvalidParameterData,

    #[error("Invalid period data in CSV")]
    InvalidPeriodData,
}

impl HttpError for ObservationsError {
    fn network(url: String, source: reqwest::Error) -> Self {
        ObservationsError::NetworkRequest(url, source)
    }

    fn status(url: String, status: reqwest::StatusCode, source: reqwest::Error) -> Self {
        ObservationsError::HttpStatus { url, status, source }
    }

    fn json(url: String, source: serde_json::Error) -> Self {
        ObservationsError::JsonParse { url, source }
    }
}
