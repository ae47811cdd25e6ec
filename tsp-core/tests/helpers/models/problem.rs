use crate::models::common::{Distance, DistanceUnit, Location};
use crate::models::problem::{City, Point};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A point on a plane which uses euclidean distance, values are treated as kilometers.
#[derive(Clone, Copy, Debug)]
pub struct TestPoint {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for TestPoint {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for TestPoint {}

impl Hash for TestPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Point for TestPoint {
    fn distance(&self, other: &Self, unit: DistanceUnit) -> Distance {
        let (dx, dy) = (self.x - other.x, self.y - other.y);

        unit.convert_kilometers((dx * dx + dy * dy).sqrt())
    }
}

pub fn test_point(x: f64, y: f64) -> TestPoint {
    TestPoint { x, y }
}

/// Returns points on the x axis: (0, 0), (1, 0), .. (amount - 1, 0).
pub fn test_points(amount: usize) -> Vec<TestPoint> {
    (0..amount).map(|idx| test_point(idx as f64, 0.)).collect()
}

pub fn test_city(name: &str, lat: f64, lng: f64) -> Arc<City> {
    Arc::new(City::new(name, Location::new(lat, lng)))
}

pub fn test_rome() -> Arc<City> {
    test_city("Rome", 41.9028, 12.4964)
}

pub fn test_milan() -> Arc<City> {
    test_city("Milan", 45.4642, 9.19)
}

pub fn test_naples() -> Arc<City> {
    test_city("Naples", 40.8518, 14.2681)
}
