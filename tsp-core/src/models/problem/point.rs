use crate::models::common::{Distance, DistanceUnit, Location};
use std::hash::Hash;
use std::sync::Arc;

/// A capability of an entity to be visited by the tour.
///
/// The tour relies on `Eq` and `Hash` to detect the same point, so both have to be consistent
/// with each other. Distance is expected to be symmetric.
pub trait Point: Clone + Eq + Hash {
    /// Returns distance to other point in the given unit.
    fn distance(&self, other: &Self, unit: DistanceUnit) -> Distance;
}

/// A capability of an entity to be placed on a map.
pub trait Geolocated {
    /// Returns a geographic coordinate of the entity.
    fn location(&self) -> &Location;
}

impl<T: Point> Point for Arc<T> {
    fn distance(&self, other: &Self, unit: DistanceUnit) -> Distance {
        self.as_ref().distance(other.as_ref(), unit)
    }
}

impl<T: Geolocated> Geolocated for Arc<T> {
    fn location(&self) -> &Location {
        self.as_ref().location()
    }
}
