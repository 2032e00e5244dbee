//! Order-independent equality of canonical term lists.
//!
//! Two canonical lists are equal when each contains every term of the other. Both operands must already be
//! reduced: a raw list with duplicate tags is not a set and this test does not apply to it.

use crate::list::{Cons, ContainsTerm, Nil};
use crate::term::DimensionTerm;
use core::ops::BitAnd;
use typenum::{And, Bit, B1};

/// `B1` when every term of `Self` also appears, with the same exponent, in `B`.
pub trait Subset<B> {
    /// `B1` or `B0`.
    type Output: Bit;
}

impl<B> Subset<B> for Nil {
    type Output = B1;
}

impl<B, H, T> Subset<B> for Cons<H, T>
where
    H: DimensionTerm,
    B: ContainsTerm<H>,
    T: Subset<B>,
    <B as ContainsTerm<H>>::Output: BitAnd<<T as Subset<B>>::Output>,
    And<<B as ContainsTerm<H>>::Output, <T as Subset<B>>::Output>: Bit,
{
    type Output = And<<B as ContainsTerm<H>>::Output, <T as Subset<B>>::Output>;
}

/// `B1` when `Self` and `B` hold the same set of terms, in any order.
pub trait ListEq<B> {
    /// `B1` or `B0`.
    type Output: Bit;
}

impl<A, B> ListEq<B> for A
where
    A: Subset<B>,
    B: Subset<A>,
    <A as Subset<B>>::Output: BitAnd<<B as Subset<A>>::Output>,
    And<<A as Subset<B>>::Output, <B as Subset<A>>::Output>: Bit,
{
    type Output = And<<A as Subset<B>>::Output, <B as Subset<A>>::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{Length, Mass, Time};
    use crate::terms;
    use crate::term::Term;
    use typenum::{N1, N2, P1, P2};

    fn eq<A: ListEq<B>, B>() -> bool {
        <A::Output as Bit>::BOOL
    }

    fn subset<A: Subset<B>, B>() -> bool {
        <A::Output as Bit>::BOOL
    }

    type L1 = Term<Length, P1>;
    type L2 = Term<Length, P2>;
    type T2 = Term<Time, P2>;
    type Tn1 = Term<Time, N1>;
    type M1 = Term<Mass, P1>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Subset
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn empty_is_subset_of_everything() {
        assert!(subset::<Nil, Nil>());
        assert!(subset::<Nil, terms![L1]>());
    }

    #[test]
    fn subset_is_one_directional() {
        assert!(subset::<terms![L1], terms![M1, L1]>());
        assert!(!subset::<terms![M1, L1], terms![L1]>());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Equality
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn order_does_not_matter() {
        assert!(eq::<terms![T2, L2], terms![L2, T2]>());
        assert!(eq::<terms![M1, L1, Tn1], terms![Tn1, M1, L1]>());
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        type A = terms![M1, L2, Term<Time, N2>];
        type B = terms![Term<Time, N2>, M1, L2];
        assert!(eq::<A, A>());
        assert_eq!(eq::<A, B>(), eq::<B, A>());
    }

    #[test]
    fn exponents_must_match() {
        assert!(!eq::<terms![L1], terms![L2]>());
        assert!(!eq::<terms![T2, L2], terms![T2, L1]>());
    }

    #[test]
    fn superset_is_not_equal() {
        assert!(!eq::<terms![L1, M1], terms![L1]>());
        assert!(!eq::<terms![L1], terms![L1, M1]>());
    }

    #[test]
    fn empty_equals_only_empty() {
        assert!(eq::<Nil, Nil>());
        assert!(!eq::<Nil, terms![L1]>());
        assert!(!eq::<terms![L1], Nil>());
    }
}
