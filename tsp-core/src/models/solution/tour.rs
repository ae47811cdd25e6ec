#[cfg(test)]
#[path = "../../../tests/unit/models/solution/tour_test.rs"]
mod tour_test;

use crate::models::common::{Distance, DistanceUnit};
use crate::models::problem::Point;
use crate::utils::{create_silent_logger, create_stdout_logger, InfoLogger, TourError};
use rustc_hash::FxHashSet;
use std::fmt::{Debug, Display, Formatter};
use std::slice::Iter;

/// A default tour name.
pub(crate) const DEFAULT_TOUR_NAME: &str = "Tour";

/// A tour leg: an edge between two consecutive points of the closed cycle.
pub type Leg<'a, P> = (&'a P, &'a P);

/// Represents a tour, a hamiltonian cycle over points: the last point is implicitly connected
/// back to the first one.
pub struct Tour<P: Point> {
    /// A name used to identify the tour in log messages.
    name: String,

    /// Stores points in the order they are visited.
    points: Vec<P>,

    /// Stores the same points as `points` for fast membership checks.
    members: FxHashSet<P>,

    logger: InfoLogger,
}

impl<P: Point> Default for Tour<P> {
    fn default() -> Self {
        Self::new_with_logger(DEFAULT_TOUR_NAME, create_silent_logger())
    }
}

impl<P: Point> Tour<P> {
    /// Creates a new empty tour. When `verbose` is set, tour operations are reported to stdout.
    pub fn new(name: impl Into<String>, verbose: bool) -> Self {
        let logger = if verbose { create_stdout_logger() } else { create_silent_logger() };

        Self::new_with_logger(name, logger)
    }

    /// Creates a new empty tour which reports its operations to the given logger.
    pub fn new_with_logger(name: impl Into<String>, logger: InfoLogger) -> Self {
        Self::new_with_capacity(name.into(), logger, 0)
    }

    pub(crate) fn new_with_capacity(name: String, logger: InfoLogger, capacity: usize) -> Self {
        (logger)(format!("tour '{name}' created").as_str());

        Self {
            name,
            points: Vec::with_capacity(capacity),
            members: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            logger,
        }
    }

    /// Returns tour name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Adds a new point to the end of the tour.
    pub fn append(&mut self, point: P) -> Result<(), TourError> {
        if self.members.contains(&point) {
            return Err(TourError::Duplicate);
        }

        self.members.insert(point.clone());
        self.points.push(point);

        self.log(format!("point appended at position {}", self.points.len() - 1));

        Ok(())
    }

    /// Adds a new point right after the target point which is already in the tour.
    /// Target is checked before the new point.
    pub fn insert_after(&mut self, point: P, target: &P) -> Result<(), TourError> {
        let index = self.index_of(target).ok_or(TourError::NotFound)? + 1;

        if self.members.contains(&point) {
            return Err(TourError::Duplicate);
        }

        self.members.insert(point.clone());
        self.points.insert(index, point);

        self.log(format!("point inserted at position {index}"));

        Ok(())
    }

    /// Removes the point at given position and returns it. Subsequent points are shifted to the left.
    pub fn remove(&mut self, index: usize) -> Result<P, TourError> {
        self.check_index(index)?;

        let point = self.points.remove(index);
        self.members.remove(&point);

        self.log(format!("point removed from position {index}"));

        Ok(point)
    }

    /// Returns the point at given position.
    pub fn position(&self, index: usize) -> Result<&P, TourError> {
        self.check_index(index)?;

        Ok(&self.points[index])
    }

    /// Returns total length of the closed tour, including the leg from the last point back to the
    /// first one. Fails if the tour has no points.
    pub fn length(&self, unit: DistanceUnit) -> Result<Distance, TourError> {
        if self.points.is_empty() {
            return Err(TourError::Empty);
        }

        Ok(self.legs().map(|(from, to)| from.distance(to, unit)).sum())
    }

    /// Checks whether the tour visits exactly the points of the reference collection: both have the
    /// same size and every point of the tour is present in reference.
    pub fn is_valid(&self, reference: &[P]) -> bool {
        if self.points.len() != reference.len() {
            return false;
        }

        let reference = reference.iter().collect::<FxHashSet<_>>();

        self.points.iter().all(|point| reference.contains(point))
    }

    /// Returns legs of the closed tour. A single point tour has one leg which starts and ends at
    /// the same point, an empty tour has no legs.
    pub fn legs(&self) -> impl Iterator<Item = Leg<'_, P>> + '_ {
        let closing = self.points.last().zip(self.points.first());

        self.points.windows(2).map(|pair| (&pair[0], &pair[1])).chain(closing)
    }

    /// Returns all points in the visiting order.
    pub fn points(&self) -> Iter<'_, P> {
        self.points.iter()
    }

    /// Returns all points as slice.
    pub fn as_slice(&self) -> &[P] {
        self.points.as_slice()
    }

    /// Returns the first point of the tour.
    pub fn start(&self) -> Option<&P> {
        self.points.first()
    }

    /// Checks whether point is present in the tour.
    pub fn contains(&self, point: &P) -> bool {
        self.members.contains(point)
    }

    /// Returns position of the point in the tour.
    pub fn index_of(&self, point: &P) -> Option<usize> {
        if !self.members.contains(point) {
            return None;
        }

        self.points.iter().position(|other| other == point)
    }

    /// Returns amount of points in the tour.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks whether the tour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), TourError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(TourError::OutOfRange { index, size: self.points.len() })
        }
    }

    fn log(&self, msg: String) {
        (self.logger)(format!("{}: {msg}", self.name).as_str());
    }
}

impl<'a, P: Point> IntoIterator for &'a Tour<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<P: Point + Display> Display for Tour<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tour '{}': [", self.name)?;
        for (idx, point) in self.points.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, "]")
    }
}

impl<P: Point + Debug> Debug for Tour<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tour").field("name", &self.name).field("points", &self.points).finish()
    }
}
