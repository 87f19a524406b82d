//! Wire models of the point forecast (`pmp3g`) API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point forecast: one entry per valid time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    #[serde(default)]
    pub approved_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reference_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    pub time_series: Vec<TimeSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// Longitude/latitude pairs of the grid point the forecast was taken from.
    pub coordinates: Vec<[f64; 2]>,
}

/// All forecast parameters for one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    pub valid_time: DateTime<Utc>,
    pub parameters: Vec<RawParameter>,
}

/// A forecast parameter as delivered, before any coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParameter {
    pub name: String,
    #[serde(default)]
    pub level_type: String,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub values: Vec<f64>,
}
