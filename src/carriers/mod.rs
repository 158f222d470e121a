//! Concrete carriers. One commutative linear, one dense linear, one
//! non-commutative partial.

pub mod additive;
pub mod matrix;
pub mod rational;

pub use additive::Additive;
pub use matrix::Mat2;
pub use rational::PosRatio;
