//! Ordered, type-level sequences of dimension terms.
//!
//! A term list is either [`Nil`] or [`Cons<Head, Tail>`]. Lists preserve insertion order and may contain several
//! terms for the same base dimension; they are the scratch carrier used by the reduction and equality algorithms.
//! Every operation in this module is a trait with an associated `Output` type and is evaluated during trait
//! resolution.

use crate::tag::BaseDimension;
use crate::term::{DimensionTerm, ExponentOf, SameTag, SameType, TagIdOf, TagOf, Term};
use core::fmt;
use core::marker::PhantomData;
use core::ops::Neg;
use typenum::{Bit, Integer, IsEqual, Negate, B0, B1};

/// The empty term list.
pub enum Nil {}

/// A term list with head `H` and tail `T`.
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// Which symbol of each base dimension to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// Dimension symbols (`M·L·T^-2`).
    Dimension,
    /// Standard unit symbols (`kg·m·s^-2`).
    Unit,
}

/// A well-formed term list.
pub trait TermList: 'static {
    /// Number of terms in the list.
    const LEN: usize;

    /// Writes the terms separated by `·`, each exponent other than one as `^e`.
    fn fmt_terms(f: &mut fmt::Formatter<'_>, notation: Notation) -> fmt::Result {
        Self::write_from(f, notation, true)
    }

    /// Writes the terms, preceded by a separator unless `first` is set.
    #[doc(hidden)]
    fn write_from(f: &mut fmt::Formatter<'_>, notation: Notation, first: bool) -> fmt::Result;
}

impl TermList for Nil {
    const LEN: usize = 0;

    fn write_from(_: &mut fmt::Formatter<'_>, _: Notation, _: bool) -> fmt::Result {
        Ok(())
    }
}

impl<H: DimensionTerm, T: TermList> TermList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn write_from(f: &mut fmt::Formatter<'_>, notation: Notation, first: bool) -> fmt::Result {
        if !first {
            f.write_str("·")?;
        }
        f.write_str(match notation {
            Notation::Dimension => <TagOf<H> as BaseDimension>::SYMBOL,
            Notation::Unit => <TagOf<H> as BaseDimension>::UNIT,
        })?;
        if H::EXPONENT != 1 {
            write!(f, "^{}", H::EXPONENT)?;
        }
        T::write_from(f, notation, false)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Structural operations
// ─────────────────────────────────────────────────────────────────────────────

/// Appends `X` at the end of the list.
pub trait Append<X> {
    /// The extended list.
    type Output;
}

impl<X> Append<X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<X, H, T: Append<X>> Append<X> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

/// `L` with `X` appended.
pub type Appended<L, X> = <L as Append<X>>::Output;

/// Concatenates two lists, keeping the order of both.
pub trait Concat<Rhs> {
    /// `Self` followed by `Rhs`.
    type Output;
}

impl<Rhs> Concat<Rhs> for Nil {
    type Output = Rhs;
}

impl<Rhs, H, T: Concat<Rhs>> Concat<Rhs> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

/// `A` followed by `B`.
pub type Concatenated<A, B> = <A as Concat<B>>::Output;

/// Flips the sign of every exponent, keeping tags and order.
pub trait NegateTerms {
    /// The negated list.
    type Output;
}

impl NegateTerms for Nil {
    type Output = Nil;
}

impl<H, T> NegateTerms for Cons<H, T>
where
    H: DimensionTerm,
    ExponentOf<H>: Neg,
    Negate<ExponentOf<H>>: Integer,
    T: NegateTerms,
{
    type Output = Cons<Term<TagOf<H>, Negate<ExponentOf<H>>>, T::Output>;
}

/// `L` with all exponents negated.
pub type Negated<L> = <L as NegateTerms>::Output;

// ─────────────────────────────────────────────────────────────────────────────
// Membership
// ─────────────────────────────────────────────────────────────────────────────

/// `B1` when some term of the list carries base dimension `Tag`, whatever its exponent.
///
/// A term matches only when its tag is `Tag` itself; a different tag that happens to share `Tag`'s id does not
/// compile:
///
/// ```compile_fail
/// use dimensional_core::tags::Time;
/// use dimensional_core::typenum::{P1, U1};
/// use dimensional_core::{impl_base_dimension, terms, HasTag, Term};
///
/// pub enum Spin {}
/// impl_base_dimension!(Spin, id = U1, symbol = "S", unit = "ħ");
///
/// fn has<L: HasTag<Time>>() {}
/// has::<terms![Term<Spin, P1>]>();
/// ```
pub trait HasTag<Tag: BaseDimension> {
    /// `B1` or `B0`.
    type Output: Bit;
}

/// Dispatch on the outcome of comparing the head's tag. Implemented for `B0` and `B1`.
#[doc(hidden)]
pub trait TagBranch<Tag, Head, Tail> {
    /// Result of the step.
    type Output: Bit;
}

impl<Tag: BaseDimension> HasTag<Tag> for Nil {
    type Output = B0;
}

impl<Tag, H, T> HasTag<Tag> for Cons<H, T>
where
    Tag: BaseDimension,
    H: DimensionTerm,
    TagIdOf<H>: IsEqual<Tag::Id>,
    <TagIdOf<H> as IsEqual<Tag::Id>>::Output: TagBranch<Tag, H, T>,
{
    type Output = <<TagIdOf<H> as IsEqual<Tag::Id>>::Output as TagBranch<Tag, H, T>>::Output;
}

impl<Tag, H, T> TagBranch<Tag, H, T> for B1
where
    H: DimensionTerm,
    TagOf<H>: SameType<Tag>,
{
    type Output = B1;
}

impl<Tag: BaseDimension, H, T: HasTag<Tag>> TagBranch<Tag, H, T> for B0 {
    type Output = T::Output;
}

/// `B1` when the list holds a term with the tag of `X` *and* the exponent of `X`.
///
/// The scan stops at the first term carrying `X`'s tag: on a canonical list that term is the only candidate, and
/// a different exponent there is a definite mismatch.
pub trait ContainsTerm<X: DimensionTerm> {
    /// `B1` or `B0`.
    type Output: Bit;
}

/// Dispatch on the outcome of comparing the head's tag with `X`'s. Implemented for `B0` and `B1`.
#[doc(hidden)]
pub trait TermBranch<Head, X, Tail> {
    /// Result of the step.
    type Output: Bit;
}

impl<X: DimensionTerm> ContainsTerm<X> for Nil {
    type Output = B0;
}

impl<X, H, T> ContainsTerm<X> for Cons<H, T>
where
    X: DimensionTerm,
    H: DimensionTerm,
    TagIdOf<H>: IsEqual<TagIdOf<X>>,
    SameTag<H, X>: TermBranch<H, X, T>,
{
    type Output = <SameTag<H, X> as TermBranch<H, X, T>>::Output;
}

impl<H, X, T> TermBranch<H, X, T> for B1
where
    H: DimensionTerm,
    X: DimensionTerm,
    TagOf<H>: SameType<TagOf<X>>,
    ExponentOf<H>: IsEqual<ExponentOf<X>>,
    <ExponentOf<H> as IsEqual<ExponentOf<X>>>::Output: Bit,
{
    type Output = <ExponentOf<H> as IsEqual<ExponentOf<X>>>::Output;
}

impl<H, X, T> TermBranch<H, X, T> for B0
where
    X: DimensionTerm,
    T: ContainsTerm<X>,
{
    type Output = T::Output;
}
