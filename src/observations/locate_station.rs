use crate::observations::models::Station;
use crate::types::coordinates::Coordinates;
use ordered_float::OrderedFloat;

/// First active station whose name contains `needle`, ignoring case.
pub fn station_by_name<'a>(stations: &'a [Station], needle: &str) -> Option<&'a Station> {
    let needle = needle.to_lowercase();
    stations
        .iter()
        .filter(|station| station.active)
        .find(|station| station.name.to_lowercase().contains(&needle))
}

/// Active station with the smallest great-circle distance to `target`.
///
/// Ties go to the station listed first.
pub fn closest_station<'a>(stations: &'a [Station], target: &Coordinates) -> Option<&'a Station> {
    stations
        .iter()
        .filter(|station| station.active)
        .min_by_key(|station| {
            let position = Coordinates::new(station.latitude, station.longitude);
            OrderedFloat(target.distance_km(&position))
        })
}
