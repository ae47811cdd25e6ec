//! Solution domain models.

mod builder;
pub use self::builder::TourBuilder;

mod tour;
pub use self::tour::{Leg, Tour};
