//! Reduction of a term list to canonical form.
//!
//! The canonical form of a list contains each base dimension at most once, carries the sum of all exponents
//! given for that dimension, and omits dimensions whose exponents sum to zero. Dimensions appear in the order
//! of their first occurrence in the input.
//!
//! The algorithm makes one pass per distinct tag. A pass holds a *comparator* term and walks the remaining
//! input: terms with the comparator's tag are folded into it, every other term is moved to a *carry* list.
//! At the end of the input the comparator is settled into the *result* (or dropped when its exponent is zero)
//! and the next pass starts from the head of the carry.
//!
//! ```rust
//! use dimensional_core::tags::{Length, Time};
//! use dimensional_core::typenum::{N1, P1, P2};
//! use dimensional_core::{terms, Reduced, Term, TermList};
//!
//! type Raw = terms![Term<Time, P1>, Term<Length, P1>, Term<Time, P1>, Term<Length, N1>];
//! assert_eq!(<Reduced<Raw> as TermList>::LEN, 1);
//! # fn same<A, B>() where A: Same<B> {}
//! # trait Same<T> {}
//! # impl<T> Same<T> for T {}
//! # same::<Reduced<Raw>, terms![Term<Time, P2>]>();
//! ```
//!
//! Terms are only folded together when their tags are the same type. A tag that reuses another tag's id is a
//! compile error rather than a silent merge:
//!
//! ```compile_fail
//! use dimensional_core::tags::Time;
//! use dimensional_core::typenum::{N1, P1, U1};
//! use dimensional_core::{impl_base_dimension, terms, Reduced, Term, TermList};
//!
//! pub enum Spin {}
//! impl_base_dimension!(Spin, id = U1, symbol = "S", unit = "ħ");
//!
//! let _ = <Reduced<terms![Term<Time, P1>, Term<Spin, N1>]> as TermList>::LEN;
//! ```

use crate::list::{Append, Appended, Cons, Nil};
use crate::term::{DimensionTerm, ExponentOf, SameTag, SameType, TagIdOf, TagOf, Term};
use core::ops::Add;
use typenum::{Integer, IsEqual, Sum, B0, B1, Z0};

/// Canonical form of a term list.
pub trait Reduce {
    /// The reduced list.
    type Output;
}

/// Canonical form of `L`.
pub type Reduced<L> = <L as Reduce>::Output;

impl Reduce for Nil {
    type Output = Nil;
}

impl<H, T> Reduce for Cons<H, T>
where
    T: ReduceStep<H, Nil, Nil>,
{
    type Output = <T as ReduceStep<H, Nil, Nil>>::Output;
}

/// One step of a reduction pass, implemented on the remaining input.
///
/// `C` is the comparator, `R` the result built so far and `K` the carry of the current pass.
#[doc(hidden)]
pub trait ReduceStep<C, R, K> {
    /// Result of the step.
    type Output;
}

/// Branch taken after comparing the head of the input with the comparator. Implemented for `B0` and `B1`.
#[doc(hidden)]
pub trait ReduceBranch<C, H, T, R, K> {
    /// Result of the step.
    type Output;
}

impl<C, H, T, R, K> ReduceStep<C, R, K> for Cons<H, T>
where
    C: DimensionTerm,
    H: DimensionTerm,
    TagIdOf<H>: IsEqual<TagIdOf<C>>,
    SameTag<H, C>: ReduceBranch<C, H, T, R, K>,
{
    type Output = <SameTag<H, C> as ReduceBranch<C, H, T, R, K>>::Output;
}

// Same tag: fold the head into the comparator.
impl<C, H, T, R, K> ReduceBranch<C, H, T, R, K> for B1
where
    C: DimensionTerm,
    H: DimensionTerm,
    TagOf<H>: SameType<TagOf<C>>,
    ExponentOf<C>: Add<ExponentOf<H>>,
    Sum<ExponentOf<C>, ExponentOf<H>>: Integer,
    T: ReduceStep<Term<TagOf<C>, Sum<ExponentOf<C>, ExponentOf<H>>>, R, K>,
{
    type Output = <T as ReduceStep<Term<TagOf<C>, Sum<ExponentOf<C>, ExponentOf<H>>>, R, K>>::Output;
}

// Different tag: defer the head to a later pass.
impl<C, H, T, R, K> ReduceBranch<C, H, T, R, K> for B0
where
    K: Append<H>,
    T: ReduceStep<C, R, Appended<K, H>>,
{
    type Output = <T as ReduceStep<C, R, Appended<K, H>>>::Output;
}

impl<C, R, K> ReduceStep<C, R, K> for Nil
where
    C: DimensionTerm,
    ExponentOf<C>: IsEqual<Z0>,
    <ExponentOf<C> as IsEqual<Z0>>::Output: Settle<C, R>,
    K: NextPass<Settled<C, R>>,
{
    type Output = <K as NextPass<Settled<C, R>>>::Output;
}

/// Adds a finished comparator to the result, keyed on whether its exponent is zero.
#[doc(hidden)]
pub trait Settle<C, R> {
    /// Result of the step.
    type Output;
}

/// `R` after settling comparator `C`.
#[doc(hidden)]
pub type Settled<C, R> = <<ExponentOf<C> as IsEqual<Z0>>::Output as Settle<C, R>>::Output;

impl<C, R> Settle<C, R> for B1 {
    type Output = R;
}

impl<C, R: Append<C>> Settle<C, R> for B0 {
    type Output = Appended<R, C>;
}

/// Starts the next pass from the carry, or finishes with the result when the carry is empty.
#[doc(hidden)]
pub trait NextPass<R> {
    /// Result of the step.
    type Output;
}

impl<R> NextPass<R> for Nil {
    type Output = R;
}

impl<R, H, T> NextPass<R> for Cons<H, T>
where
    T: ReduceStep<H, R, Nil>,
{
    type Output = <T as ReduceStep<H, R, Nil>>::Output;
}
