//! Common models.

mod location;
pub use self::location::*;

mod primitives;
pub use self::primitives::*;
