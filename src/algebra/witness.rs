//! Law witnesses. Each witness evaluates both sides of one law at concrete
//! inputs and records whether it held, so a carrier's claimed capabilities
//! are runtime-verifiable.

use crate::core::index::PosInt;
use crate::core::ops::{LinearSemigroup, OrderedSemigroup, Semigroup, Sign};
use crate::core::power::{pow, pow_left};

use super::monotone::{chain_terms, sandwich};
use super::sign::{classify, sign_at};

#[inline(always)]
fn le<S: PartialOrd>(a: &S, b: &S) -> bool {
    matches!(
        a.partial_cmp(b),
        Some(core::cmp::Ordering::Less | core::cmp::Ordering::Equal)
    )
}

/// `pow(x, n)·x == x·pow(x, n)`: a power of `x` commutes with its own base,
/// commutative carrier or not.
#[derive(Debug, Clone)]
pub struct SelfCommutationWitness<S> {
    pub right_mul: S,
    pub left_mul: S,
    pub holds: bool,
}

impl<S: Semigroup + PartialEq> SelfCommutationWitness<S> {
    pub fn verify(x: &S, n: PosInt) -> Self {
        let p = pow(x, n);
        let right_mul = p.combine(x);
        let left_mul = x.combine(&p);
        let holds = right_mul == left_mul;
        Self {
            right_mul,
            left_mul,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// `pow(x, n + 1) == x·pow(x, n)`: the left recurrence, derived from the
/// defining right recurrence plus self-commutation.
#[derive(Debug, Clone)]
pub struct LeftRecurrenceWitness<S> {
    pub successor_power: S,
    pub left_rebuilt: S,
    pub holds: bool,
}

impl<S: Semigroup + PartialEq> LeftRecurrenceWitness<S> {
    pub fn verify(x: &S, n: PosInt) -> Self {
        let successor_power = pow(x, n.succ());
        let left_rebuilt = x.combine(&pow_left(x, n));
        let holds = successor_power == left_rebuilt;
        Self {
            successor_power,
            left_rebuilt,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// `pow(a·b, n + 1) == a·pow(b·a, n)·b`: the alternating-product splitting
/// identity. Every order/power interaction law reduces to this rewrite.
#[derive(Debug, Clone)]
pub struct SplitProductWitness<S> {
    pub successor_power: S,
    pub split: S,
    pub holds: bool,
}

impl<S: Semigroup + PartialEq> SplitProductWitness<S> {
    pub fn verify(a: &S, b: &S, n: PosInt) -> Self {
        let successor_power = pow(&a.combine(b), n.succ());
        let split = sandwich(a, &pow(&b.combine(a), n), b);
        let holds = successor_power == split;
        Self {
            successor_power,
            split,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// `a <= b` implies `pow(a, n) <= pow(b, n)`.
///
/// Vacuously valid when the premise fails; `premise` records whether the
/// witness actually exercised the law.
#[derive(Debug, Clone)]
pub struct PowerMonotonicityWitness<S> {
    pub premise: bool,
    pub lower_power: S,
    pub upper_power: S,
    pub holds: bool,
}

impl<S: OrderedSemigroup> PowerMonotonicityWitness<S> {
    pub fn verify(a: &S, b: &S, n: PosInt) -> Self {
        let premise = le(a, b);
        let lower_power = pow(a, n);
        let upper_power = pow(b, n);
        let holds = !premise || le(&lower_power, &upper_power);
        Self {
            premise,
            lower_power,
            upper_power,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// The commutator bound chain: given `a·b <= b·a`,
///
/// `pow(a,n)·pow(b,n) <= pow(a·b,n) <= pow(b·a,n) <= pow(b,n)·pow(a,n)`.
///
/// `links` records each of the three bounds separately. Vacuously valid when
/// the premise fails.
#[derive(Debug, Clone)]
pub struct CommutatorChainWitness<S> {
    pub premise: bool,
    pub terms: [S; 4],
    pub links: [bool; 3],
    pub holds: bool,
}

impl<S: OrderedSemigroup> CommutatorChainWitness<S> {
    pub fn verify(a: &S, b: &S, n: PosInt) -> Self {
        let premise = le(&a.combine(b), &b.combine(a));
        let terms = chain_terms(a, b, n);
        let links = [
            le(&terms[0], &terms[1]),
            le(&terms[1], &terms[2]),
            le(&terms[2], &terms[3]),
        ];
        let holds = !premise || (links[0] && links[1] && links[2]);
        Self {
            premise,
            terms,
            links,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// Trichotomy, made executable: classify the subject by its single witnessed
/// comparison, then check every supplied probe point agrees.
///
/// On a sound [`LinearSemigroup`] the probes always agree; a disagreement
/// means the carrier's claimed capabilities are wrong.
#[derive(Debug, Clone, Copy)]
pub struct TrichotomyWitness {
    pub sign: Sign,
    pub probes_checked: usize,
    pub holds: bool,
}

impl TrichotomyWitness {
    pub fn verify<S: LinearSemigroup>(a: &S, probes: &[S]) -> Self {
        let sign = classify(a);
        let mut holds = true;
        for x in probes {
            if sign_at(a, x) != Some(sign) {
                holds = false;
                break;
            }
        }
        Self {
            sign,
            probes_checked: probes.len(),
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// Order-closure of the strict sign classes: given `a <= b`, positivity of
/// `a` forces positivity of `b`, and negativity of `b` forces negativity of
/// `a`. Vacuously valid when the premise fails.
#[derive(Debug, Clone, Copy)]
pub struct OrderClosureWitness {
    pub premise: bool,
    pub lower: Sign,
    pub upper: Sign,
    pub holds: bool,
}

impl OrderClosureWitness {
    pub fn verify<S: LinearSemigroup>(a: &S, b: &S) -> Self {
        let premise = a <= b;
        let lower = classify(a);
        let upper = classify(b);
        let up_closed = lower != Sign::Positive || upper == Sign::Positive;
        let down_closed = upper != Sign::Negative || lower == Sign::Negative;
        let holds = !premise || (up_closed && down_closed);
        Self {
            premise,
            lower,
            upper,
            holds,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// Power-closure and root extraction as one round trip:
/// `classify(pow(a, n)) == classify(a)`.
///
/// Closure gives the forward direction; the trichotomy case split that rules
/// out the other two classes gives the converse, so base and power always
/// share a sign.
#[derive(Debug, Clone, Copy)]
pub struct RootExtractionWitness {
    pub base: Sign,
    pub power: Sign,
    pub holds: bool,
}

impl RootExtractionWitness {
    pub fn verify<S: LinearSemigroup>(a: &S, n: PosInt) -> Self {
        let base = classify(a);
        let power = classify(&pow(a, n));
        let holds = base == power;
        Self { base, power, holds }
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::{Additive, Mat2};

    #[test]
    fn test_monotonicity_vacuous_without_premise() {
        let n = PosInt::new(3).unwrap();
        let w = PowerMonotonicityWitness::verify(&Additive(5), &Additive(2), n);
        assert!(!w.premise);
        assert!(w.is_valid());
    }

    #[test]
    fn test_chain_vacuous_when_products_incomparable() {
        // ab and ba disagree entrywise on direction for this pair.
        let a = Mat2::upper_triangular(1, 1, 1);
        let b = Mat2::new([1, 0, 1, 1]);
        assert_eq!(
            a.combine(&b).partial_cmp(&b.combine(&a)),
            None
        );

        let w = CommutatorChainWitness::verify(&a, &b, PosInt::new(2).unwrap());
        assert!(!w.premise);
        assert!(w.is_valid());
    }

    #[test]
    fn test_order_closure_vacuous_without_premise() {
        let w = OrderClosureWitness::verify(&Additive(4), &Additive(-4));
        assert!(!w.premise);
        assert!(w.is_valid());
    }
}
