//! Problem domain models.

mod city;
pub use self::city::City;

mod point;
pub use self::point::{Geolocated, Point};
