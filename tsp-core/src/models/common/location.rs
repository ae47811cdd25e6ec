#[cfg(test)]
#[path = "../../../tests/unit/models/common/location_test.rs"]
mod location_test;

use super::{Distance, DistanceUnit};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: Distance = 6371.0088;

/// Represents a geographic coordinate in degrees.
///
/// Coordinates are compared and hashed by their exact values, negative zero is stored as zero.
#[derive(Clone, Copy, Debug)]
pub struct Location {
    lat: f64,
    lng: f64,
}

impl Location {
    /// Creates a new instance of `Location`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat: lat + 0., lng: lng + 0. }
    }

    /// Returns latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns longitude.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns great-circle distance to other location using haversine formula.
    pub fn distance(&self, other: &Location, unit: DistanceUnit) -> Distance {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat / 2.).sin().powi(2) + (d_lng / 2.).sin().powi(2) * lat1.cos() * lat2.cos();
        // rounding can push the term slightly above one for antipodal points
        let a = a.clamp(0., 1.);
        let c = 2. * a.sqrt().atan2((1. - a).sqrt());

        unit.convert_kilometers(EARTH_RADIUS_KM * c)
    }
}

impl PartialEq<Location> for Location {
    fn eq(&self, other: &Location) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lng.to_bits() == other.lng.to_bits()
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lng.to_bits().hash(state);
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}
