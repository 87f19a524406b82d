use crate::forecast::error::ForecastError;
use crate::forecast::models::TimeSeries;
use crate::forecast::parameter_table::{ForecastField, ParameterTable};
use crate::types::coordinates::Coordinates;
use crate::types::precipitation::PrecipitationCategory;
use crate::types::weather_data::WeatherData;
use crate::types::weather_symbol::WeatherSymbol;
use chrono::{DateTime, Utc};

/// Turns one forecast instant into a [`WeatherData`] record.
///
/// Fields are checked in a fixed order and the first one that is missing (or
/// non-finite) is reported:
/// pressure, temperature, visibility, wind direction, wind speed, wind gust,
/// humidity, thunder probability, total/low/medium/high cloud cover,
/// min/max precipitation, frozen precipitation, mean/median precipitation
/// intensity, symbol. A missing precipitation category falls back to
/// [`PrecipitationCategory::None`].
///
/// # Errors
///
/// [`ForecastError::MissingField`] naming the first absent field.
pub fn normalize(
    time: DateTime<Utc>,
    table: &ParameterTable,
    coordinates: Coordinates,
) -> Result<WeatherData, ForecastError> {
    let missing = |field: ForecastField| ForecastError::MissingField { field, time };
    let real = |field: ForecastField| table.real(field).ok_or_else(|| missing(field));
    let integer = |field: ForecastField| table.integer(field).ok_or_else(|| missing(field));

    let air_pressure = real(ForecastField::AirPressure)?;
    let air_temperature = real(ForecastField::AirTemperature)?;
    let horizontal_visibility = real(ForecastField::HorizontalVisibility)?;
    let wind_direction = real(ForecastField::WindDirection)?;
    let wind_speed = real(ForecastField::WindSpeed)?;
    let wind_gust_speed = real(ForecastField::WindGustSpeed)?;
    let relative_humidity = integer(ForecastField::RelativeHumidity)?;
    let thunder_probability = integer(ForecastField::ThunderProbability)?;
    let total_cloud_cover = integer(ForecastField::TotalCloudCover)?;
    let low_level_cloud_cover = integer(ForecastField::LowLevelCloudCover)?;
    let medium_level_cloud_cover = integer(ForecastField::MediumLevelCloudCover)?;
    let high_level_cloud_cover = integer(ForecastField::HighLevelCloudCover)?;
    let min_precipitation = real(ForecastField::MinPrecipitation)?;
    let max_precipitation = real(ForecastField::MaxPrecipitation)?;
    let frozen_precipitation_percentage = integer(ForecastField::FrozenPrecipitationPercentage)?;
    let mean_precipitation_intensity = real(ForecastField::MeanPrecipitationIntensity)?;
    let median_precipitation_intensity = real(ForecastField::MedianPrecipitationIntensity)?;
    let symbol = table
        .integer(ForecastField::WeatherSymbol)
        .and_then(WeatherSymbol::from_code)
        .ok_or_else(|| missing(ForecastField::WeatherSymbol))?;
    let air_temperature_feels_like = table
        .feels_like()
        .ok_or_else(|| missing(ForecastField::AirTemperature))?;
    let precipitation_category = table
        .integer(ForecastField::PrecipitationCategory)
        .map(PrecipitationCategory::from_code)
        .unwrap_or_default();

    Ok(WeatherData {
        is_forecast: true,
        time,
        coordinates,
        air_pressure,
        air_temperature,
        air_temperature_feels_like,
        horizontal_visibility,
        wind_direction,
        wind_speed,
        wind_gust_speed,
        relative_humidity,
        thunder_probability,
        total_cloud_cover,
        low_level_cloud_cover,
        medium_level_cloud_cover,
        high_level_cloud_cover,
        min_precipitation,
        max_precipitation,
        frozen_precipitation_percentage,
        mean_precipitation_intensity,
        median_precipitation_intensity,
        precipitation_category,
        symbol,
    })
}

/// Builds the parameter table of a time series entry and normalizes it.
pub fn normalize_time_series(
    series: &TimeSeries,
    coordinates: Coordinates,
) -> Result<WeatherData, ForecastError> {
    let table = ParameterTable::from_raw(&series.parameters);
    normalize(series.valid_time, &table, coordinates)
}
