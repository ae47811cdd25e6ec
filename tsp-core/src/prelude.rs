//! This module reimports a common used types.

pub use crate::models::common::{Distance, DistanceUnit, Location};
pub use crate::models::problem::{City, Geolocated, Point};
pub use crate::models::solution::{Tour, TourBuilder};

pub use crate::utils::compare_floats;
pub use crate::utils::{GenericError, GenericResult, InfoLogger, TourError};
