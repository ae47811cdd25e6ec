#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<TourError> for GenericError {
    fn from(value: TourError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

/// Specifies a reason why an operation on the tour was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourError {
    /// A point is already a part of the tour.
    Duplicate,
    /// A point used as an insertion target is not a part of the tour.
    NotFound,
    /// A position is outside of the tour.
    OutOfRange {
        /// Requested position.
        index: usize,
        /// Amount of points in the tour at the moment of the request.
        size: usize,
    },
    /// An operation requires at least one point in the tour.
    Empty,
}

impl Display for TourError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate => write!(f, "point is already in the tour"),
            Self::NotFound => write!(f, "target point is not in the tour"),
            Self::OutOfRange { index, size } => {
                write!(f, "accessing outside the tour: index {index}, size {size}")
            }
            Self::Empty => write!(f, "tour has no points"),
        }
    }
}

impl std::error::Error for TourError {}
