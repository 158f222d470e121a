//! Derived laws. Associativity + compatibility is enough for the whole
//! power/order calculus; cancellation buys trichotomy.

pub mod monotone;
pub mod sign;
pub mod witness;

pub use monotone::{chain_terms, sandwich};
pub use sign::{classify, is_negative, is_neutral, is_positive, same_sign, sign_at};
pub use witness::{
    CommutatorChainWitness, LeftRecurrenceWitness, OrderClosureWitness,
    PowerMonotonicityWitness, RootExtractionWitness, SelfCommutationWitness,
    SplitProductWitness, TrichotomyWitness,
};
