//! Positive-integer powers. `pow(x, 1) = x`, `pow(x, n + 1) = pow(x, n)·x`.
//! That recurrence is the sole primitive; every identity is derived from it
//! plus associativity.

use super::index::PosInt;
use super::ops::Semigroup;

/// `x` raised to the `n`-th power by repeated right multiplication.
///
/// Deliberately the linear recurrence rather than repeated squaring: the
/// point of this operation is that the algebraic identities hold by
/// construction, and squaring would re-associate factors the semigroup axioms
/// alone cannot justify rearranging.
#[inline]
pub fn pow<S: Semigroup>(x: &S, n: PosInt) -> S {
    n.fold(x.clone(), |acc| acc.combine(x))
}

/// `x` raised to the `n`-th power by repeated left multiplication.
///
/// Equal to [`pow`] for every carrier: a power of `x` commutes with `x`
/// itself even when the carrier is non-commutative overall, so the left
/// recurrence `pow(x, n + 1) = x·pow(x, n)` computes the same element.
#[inline]
pub fn pow_left<S: Semigroup>(x: &S, n: PosInt) -> S {
    n.fold(x.clone(), |acc| x.combine(&acc))
}
