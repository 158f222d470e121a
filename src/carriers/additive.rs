//! Integers under addition. The reference linear carrier: `pow` is scalar
//! multiplication and the sign classes are the usual integer signs.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::core::ops::{LinearSemigroup, OrderedSemigroup, Semigroup};

/// `i64` with addition as the semigroup operation.
///
/// Wrapping addition keeps `combine` total and exactly associative; order
/// compatibility holds wherever sums do not wrap, which is where the laws
/// are exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(FromBytes, IntoBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct Additive(pub i64);

const _: () = {
    assert!(core::mem::size_of::<Additive>() == 8);
};

impl Additive {
    #[inline(always)]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Semigroup for Additive {
    #[inline(always)]
    fn combine(&self, other: &Self) -> Self {
        Additive(self.0.wrapping_add(other.0))
    }
}

impl OrderedSemigroup for Additive {}
impl LinearSemigroup for Additive {}
