//! Order/exponentiation interaction. Compatibility on both sides lets an
//! inequality pass through a three-factor product; powers inherit it.

use crate::core::index::PosInt;
use crate::core::ops::Semigroup;
use crate::core::power::pow;

/// `c·a·d`, associated to the left.
///
/// On an [`OrderedSemigroup`](crate::core::ops::OrderedSemigroup),
/// substituting `a <= b` in the middle slot preserves order: left
/// compatibility handles the `c` factor, right compatibility the `d` factor.
#[inline]
pub fn sandwich<S: Semigroup>(c: &S, a: &S, d: &S) -> S {
    c.combine(a).combine(d)
}

/// The four terms of the commutator bound chain at exponent `n`, in chain
/// order:
///
/// `[ aⁿ·bⁿ, (a·b)ⁿ, (b·a)ⁿ, bⁿ·aⁿ ]`
///
/// Whenever `a·b <= b·a`, each term is bounded by the next. The middle link
/// is power monotonicity applied to the hypothesis; the outer links are the
/// inductions that expand `aⁿ⁺¹·bⁿ⁺¹` as `a·(aⁿ·bⁿ)·b` and rewrite through
/// the splitting identity `(a·b)ⁿ⁺¹ = a·(b·a)ⁿ·b`. With the hypothesis
/// reversed, the chain reads right to left.
#[inline]
pub fn chain_terms<S: Semigroup>(a: &S, b: &S, n: PosInt) -> [S; 4] {
    let ab = a.combine(b);
    let ba = b.combine(a);
    [
        pow(a, n).combine(&pow(b, n)),
        pow(&ab, n),
        pow(&ba, n),
        pow(b, n).combine(&pow(a, n)),
    ]
}
