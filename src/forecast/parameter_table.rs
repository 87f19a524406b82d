//! The named, unit-tagged measurements of one forecast instant.

use crate::derived;
use crate::forecast::models::RawParameter;
use log::{debug, warn};
use std::fmt;

/// Forecast parameters understood by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastField {
    /// `msl`, hPa
    AirPressure,
    /// `t`, °C
    AirTemperature,
    /// `vis`, km
    HorizontalVisibility,
    /// `wd`, degrees
    WindDirection,
    /// `ws`, m/s
    WindSpeed,
    /// `r`, percent
    RelativeHumidity,
    /// `tstm`, percent
    ThunderProbability,
    /// `tcc_mean`, octas
    TotalCloudCover,
    /// `lcc_mean`, octas
    LowLevelCloudCover,
    /// `mcc_mean`, octas
    MediumLevelCloudCover,
    /// `hcc_mean`, octas
    HighLevelCloudCover,
    /// `gust`, m/s
    WindGustSpeed,
    /// `pmin`, mm/h
    MinPrecipitation,
    /// `pmax`, mm/h
    MaxPrecipitation,
    /// `spp`, percent
    FrozenPrecipitationPercentage,
    /// `pcat`, category code
    PrecipitationCategory,
    /// `pmean`, mm/h
    MeanPrecipitationIntensity,
    /// `pmedian`, mm/h
    MedianPrecipitationIntensity,
    /// `Wsymb2`, symbol code
    WeatherSymbol,
}

impl ForecastField {
    pub const ALL: [ForecastField; 19] = [
        ForecastField::AirPressure,
        ForecastField::AirTemperature,
        ForecastField::HorizontalVisibility,
        ForecastField::WindDirection,
        ForecastField::WindSpeed,
        ForecastField::RelativeHumidity,
        ForecastField::ThunderProbability,
        ForecastField::TotalCloudCover,
        ForecastField::LowLevelCloudCover,
        ForecastField::MediumLevelCloudCover,
        ForecastField::HighLevelCloudCover,
        ForecastField::WindGustSpeed,
        ForecastField::MinPrecipitation,
        ForecastField::MaxPrecipitation,
        ForecastField::FrozenPrecipitationPercentage,
        ForecastField::PrecipitationCategory,
        ForecastField::MeanPrecipitationIntensity,
        ForecastField::MedianPrecipitationIntensity,
        ForecastField::WeatherSymbol,
    ];

    /// The parameter name used on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            ForecastField::AirPressure => "msl",
            ForecastField::AirTemperature => "t",
            ForecastField::HorizontalVisibility => "vis",
            ForecastField::WindDirection => "wd",
            ForecastField::WindSpeed => "ws",
            ForecastField::RelativeHumidity => "r",
            ForecastField::ThunderProbability => "tstm",
            ForecastField::TotalCloudCover => "tcc_mean",
            ForecastField::LowLevelCloudCover => "lcc_mean",
            ForecastField::MediumLevelCloudCover => "mcc_mean",
            ForecastField::HighLevelCloudCover => "hcc_mean",
            ForecastField::WindGustSpeed => "gust",
            ForecastField::MinPrecipitation => "pmin",
            ForecastField::MaxPrecipitation => "pmax",
            ForecastField::FrozenPrecipitationPercentage => "spp",
            ForecastField::PrecipitationCategory => "pcat",
            ForecastField::MeanPrecipitationIntensity => "pmean",
            ForecastField::MedianPrecipitationIntensity => "pmedian",
            ForecastField::WeatherSymbol => "Wsymb2",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.wire_name() == name)
    }

    /// Whether values of this field are truncated to integers.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            ForecastField::RelativeHumidity
                | ForecastField::ThunderProbability
                | ForecastField::TotalCloudCover
                | ForecastField::LowLevelCloudCover
                | ForecastField::MediumLevelCloudCover
                | ForecastField::HighLevelCloudCover
                | ForecastField::FrozenPrecipitationPercentage
                | ForecastField::PrecipitationCategory
                | ForecastField::WeatherSymbol
        )
    }
}

impl fmt::Display for ForecastField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Display suffix for a forecast unit, `None` for units without a known suffix.
///
/// ```
/// use smhi::unit_suffix;
///
/// assert_eq!(unit_suffix("Cel"), Some("°"));
/// assert_eq!(unit_suffix("kg/m2/h"), Some("mm/h"));
/// assert_eq!(unit_suffix("degree"), Some(""));
/// assert_eq!(unit_suffix("furlong"), None);
/// ```
pub fn unit_suffix(unit: &str) -> Option<&'static str> {
    match unit {
        "percent" => Some("%"),
        "kg/m2/h" => Some("mm/h"),
        "octas" => Some("%"),
        "hPa" => Some("hPa"),
        "Cel" => Some("°"),
        "km" => Some("km"),
        "degree" => Some(""),
        "m/s" => Some("m/s"),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEntry {
    pub field: ForecastField,
    pub level_type: String,
    pub level: i64,
    pub unit: String,
    /// Raw values; empty means absent.
    pub values: Vec<f64>,
}

impl ParameterEntry {
    pub fn suffix(&self) -> Option<&'static str> {
        unit_suffix(&self.unit)
    }
}

/// Measurements of one forecast instant, at most one entry per field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterTable {
    entries: Vec<ParameterEntry>,
}

impl ParameterTable {
    /// Builds a table from wire parameters.
    ///
    /// Unknown parameter names are ignored. When a name appears more than once
    /// the first occurrence is kept.
    pub fn from_raw(parameters: &[RawParameter]) -> Self {
        let mut entries: Vec<ParameterEntry> = Vec::with_capacity(parameters.len());
        for raw in parameters {
            let Some(field) = ForecastField::from_wire_name(&raw.name) else {
                debug!("Ignoring unknown forecast parameter '{}'", raw.name);
                continue;
            };
            if entries.iter().any(|entry| entry.field == field) {
                warn!("Duplicate forecast parameter '{}', keeping the first", raw.name);
                continue;
            }
            entries.push(ParameterEntry {
                field,
                level_type: raw.level_type.clone(),
                level: raw.level,
                unit: raw.unit.clone(),
                values: raw.values.clone(),
            });
        }
        Self { entries }
    }

    pub fn get(&self, field: ForecastField) -> Option<&ParameterEntry> {
        self.entries.iter().find(|entry| entry.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First value of a field without coercion. Non-finite values count as absent.
    pub fn raw(&self, field: ForecastField) -> Option<f64> {
        self.get(field)
            .and_then(|entry| entry.values.first().copied())
            .filter(|value| value.is_finite())
    }

    /// Value of a real-valued field. `None` for integer fields.
    pub fn real(&self, field: ForecastField) -> Option<f64> {
        if field.is_integer() {
            return None;
        }
        self.raw(field)
    }

    /// Value of an integer field, truncated toward zero. `None` for real fields.
    ///
    /// A frozen precipitation percentage of `-9` means "no precipitation" and
    /// becomes `0`.
    pub fn integer(&self, field: ForecastField) -> Option<i64> {
        if !field.is_integer() {
            return None;
        }
        let value = self.raw(field)?.trunc() as i64;
        if field == ForecastField::FrozenPrecipitationPercentage && value == -9 {
            return Some(0);
        }
        Some(value)
    }

    /// Heat index from temperature and raw humidity.
    pub fn heat_index(&self) -> Option<f64> {
        let t = self.real(ForecastField::AirTemperature)?;
        let r = self.raw(ForecastField::RelativeHumidity)?;
        Some(derived::heat_index(t, r))
    }

    /// Wind chill from temperature and wind speed.
    pub fn effective_temperature(&self) -> Option<f64> {
        let t = self.real(ForecastField::AirTemperature)?;
        let v = self.raw(ForecastField::WindSpeed)?;
        Some(derived::wind_chill(t, v))
    }

    /// Feels-like temperature. Falls back to the air temperature when wind
    /// speed or humidity is missing; `None` only without a temperature.
    pub fn feels_like(&self) -> Option<f64> {
        let t = self.real(ForecastField::AirTemperature)?;
        match (
            self.raw(ForecastField::WindSpeed),
            self.raw(ForecastField::RelativeHumidity),
        ) {
            (Some(v), Some(r)) => Some(derived::feels_like(t, r, v)),
            _ => Some(t),
        }
    }
}
