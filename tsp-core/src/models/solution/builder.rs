#[cfg(test)]
#[path = "../../../tests/unit/models/solution/builder_test.rs"]
mod builder_test;

use super::tour::DEFAULT_TOUR_NAME;
use super::Tour;
use crate::models::problem::Point;
use crate::utils::{create_silent_logger, create_stdout_logger, InfoLogger, TourError};

/// Provides a way to build a [Tour] using the builder pattern.
pub struct TourBuilder<P: Point> {
    name: Option<String>,
    is_verbose: bool,
    logger: Option<InfoLogger>,
    capacity: usize,
    points: Vec<P>,
}

impl<P: Point> Default for TourBuilder<P> {
    fn default() -> Self {
        Self { name: None, is_verbose: false, logger: None, capacity: 0, points: vec![] }
    }
}

impl<P: Point> TourBuilder<P> {
    /// Sets tour name. Default is "Tour".
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets whether tour operations are reported to stdout. Ignored when a custom logger is set.
    pub fn with_verbose(mut self, is_verbose: bool) -> Self {
        self.is_verbose = is_verbose;
        self
    }

    /// Sets a custom logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Reserves space for the expected amount of points.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds initial points in their visiting order.
    pub fn with_points(mut self, points: impl IntoIterator<Item = P>) -> Self {
        self.points.extend(points);
        self
    }

    /// Builds a [Tour]. Fails if initial points contain duplicates.
    pub fn build(self) -> Result<Tour<P>, TourError> {
        let logger = match (self.logger, self.is_verbose) {
            (Some(logger), _) => logger,
            (None, true) => create_stdout_logger(),
            (None, false) => create_silent_logger(),
        };
        let name = self.name.unwrap_or_else(|| DEFAULT_TOUR_NAME.to_string());
        let capacity = self.capacity.max(self.points.len());

        let mut tour = Tour::new_with_capacity(name, logger, capacity);
        self.points.into_iter().try_for_each(|point| tour.append(point))?;

        Ok(tour)
    }
}
