//! Geographic coordinates used both as a lookup key and as a tag on every
//! normalized record.

use haversine::{distance, Location as HaversineLocation, Units};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographical coordinate in decimal degrees.
///
/// # Examples
///
/// ```
/// use smhi::Coordinates;
///
/// let helsingborg = Coordinates::new(56.0465, 12.6945);
/// assert_eq!(helsingborg.latitude, 56.0465);
/// assert_eq!(helsingborg.longitude, 12.6945);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, positive north of the equator.
    pub latitude: f64,
    /// Longitude, positive east of Greenwich.
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        distance(
            HaversineLocation {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            HaversineLocation {
                latitude: other.latitude,
                longitude: other.longitude,
            },
            Units::Kilometers,
        )
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
