#[cfg(test)]
#[path = "../../../tests/unit/models/common/primitives_test.rs"]
mod primitives_test;

use crate::utils::{GenericError, GenericResult};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Represents a distance.
pub type Distance = f64;

/// Amount of kilometers in one statute mile.
pub const KILOMETERS_PER_MILE: Distance = 1.609344;

/// Specifies a unit of measurement for distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    /// Kilometers, `km`.
    #[default]
    Kilometers,
    /// Statute miles, `mi`.
    Miles,
}

impl DistanceUnit {
    /// Converts distance specified in kilometers to this unit.
    pub fn convert_kilometers(&self, distance: Distance) -> Distance {
        match self {
            Self::Kilometers => distance,
            Self::Miles => distance / KILOMETERS_PER_MILE,
        }
    }

    /// Returns a short unit name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = GenericError;

    fn from_str(value: &str) -> GenericResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "km" | "kilometers" => Ok(Self::Kilometers),
            "mi" | "miles" => Ok(Self::Miles),
            _ => Err(format!("unknown unit of measurement: '{value}'").into()),
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
