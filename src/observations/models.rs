//! Resource models of the observations API.
//!
//! Each node in the link graph is decoded into one of these structs. All
//! timestamps are transferred as milliseconds since the Unix epoch.

use crate::observations::link::Link;
use chrono::serde::{ts_milliseconds, ts_milliseconds_option};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root of the observations API, listing every available parameter resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub key: String,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: Vec<Link>,
    pub resource: Vec<Resource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoBox {
    pub min_latitude: f64,
    pub min_longitude: f64,
    pub max_latitude: f64,
    pub max_longitude: f64,
}

/// A measured parameter, such as air temperature, offered by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub key: String,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub geo_box: Option<GeoBox>,
    pub link: Vec<Link>,
}

/// A parameter resource with its list of measuring stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub key: String,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub value_type: String,
    pub station: Vec<Station>,
    #[serde(default)]
    pub station_set: Vec<StationSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSet {
    pub key: String,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: Vec<Link>,
}

/// A weather station measuring a given parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub owner_category: String,
    #[serde(default)]
    pub id: i64,
    /// Height above sea level in meters.
    #[serde(default)]
    pub height: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub active: bool,
    #[serde(default, with = "ts_milliseconds_option")]
    pub from: Option<DateTime<Utc>>,
    #[serde(default, with = "ts_milliseconds_option")]
    pub to: Option<DateTime<Utc>>,
    pub key: String,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub link: Vec<Link>,
}

/// Details of one parameter at one station: its positions and available periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationParameter {
    pub key: String,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub owner_category: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub summary: String,
    #[serde(default, with = "ts_milliseconds_option")]
    pub from: Option<DateTime<Utc>>,
    #[serde(default, with = "ts_milliseconds_option")]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub position: Vec<Position>,
    pub period: Vec<Period>,
    #[serde(default)]
    pub link: Vec<Link>,
}

/// Where a station was located during a time span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(with = "ts_milliseconds")]
    pub from: DateTime<Utc>,
    #[serde(with = "ts_milliseconds")]
    pub to: DateTime<Utc>,
    pub height: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// A named time window (`latest-hour`, `latest-day`, `latest-months`,
/// `corrected-archive`) offered for a station parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub key: String,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub link: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodDetails {
    pub key: String,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, with = "ts_milliseconds_option")]
    pub from: Option<DateTime<Utc>>,
    #[serde(default, with = "ts_milliseconds_option")]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub link: Vec<Link>,
    #[serde(default)]
    pub data: Vec<PeriodData>,
}

/// Entry pointing at the actual readings, in one or more encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodData {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default, with = "ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub link: Vec<Link>,
}

/// A single reading. The value is kept as text, as delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(with = "ts_milliseconds")]
    pub date: DateTime<Utc>,
    pub value: String,
    /// Quality code: `G` (controlled), `Y` (suspect or aggregated), `R` (uncontrolled).
    pub quality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueParameter {
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueStation {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub owner_category: String,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePeriod {
    #[serde(default)]
    pub key: String,
    #[serde(with = "ts_milliseconds")]
    pub from: DateTime<Utc>,
    #[serde(with = "ts_milliseconds")]
    pub to: DateTime<Utc>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub sampling: String,
}

/// The readings of one parameter at one station for one period.
///
/// Obtained from [`ObservationsClient`](crate::ObservationsClient), either
/// decoded from JSON or parsed from the CSV representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    /// Readings in the order delivered.
    pub value: Vec<Reading>,
    #[serde(with = "ts_milliseconds")]
    pub updated: DateTime<Utc>,
    pub parameter: ValueParameter,
    pub station: ValueStation,
    pub period: ValuePeriod,
    #[serde(default)]
    pub position: Vec<Position>,
    #[serde(default)]
    pub link: Vec<Link>,
}

impl Value {
    /// The most recent reading, if any.
    pub fn latest(&self) -> Option<&Reading> {
        self.value.iter().max_by_key(|reading| reading.date)
    }
}
