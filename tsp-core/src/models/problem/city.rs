#[cfg(test)]
#[path = "../../../tests/unit/models/problem/city_test.rs"]
mod city_test;

use super::{Geolocated, Point};
use crate::models::common::{Distance, DistanceUnit, Location};
use std::fmt::{Display, Formatter};

/// Represents a named place on the Earth surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct City {
    name: String,
    location: Location,
}

impl City {
    /// Creates a new instance of `City`.
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self { name: name.into(), location }
    }

    /// Returns city name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Point for City {
    fn distance(&self, other: &Self, unit: DistanceUnit) -> Distance {
        self.location.distance(&other.location, unit)
    }
}

impl Geolocated for City {
    fn location(&self) -> &Location {
        &self.location
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.location)
    }
}
