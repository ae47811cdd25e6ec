mod random;
pub use self::random::*;
