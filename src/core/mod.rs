//! The guts. Capability traits, the one-based index, the power engine.

pub mod index;
pub mod ops;
pub mod power;

pub use index::PosInt;
pub use ops::{LinearSemigroup, OrderedSemigroup, Semigroup, Sign};
pub use power::{pow, pow_left};
