//! Dimension signatures and their compile-time algebra.

use crate::list::{Concat, Concatenated, ContainsTerm, HasTag, Negated, NegateTerms, Nil, Notation, TermList};
use crate::reduce::{Reduce, Reduced};
use crate::equality::ListEq;
use crate::tag::BaseDimension;
use crate::term::DimensionTerm;
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Sub};
use typenum::{Bit, B1};

/// Trait implemented by every **dimension** (Length, Velocity, Force …).
///
/// A dimension is a bag of [`Term`](crate::Term)s. The bag does not need to be reduced: `Terms` is the list as it
/// was built (for example by multiplying two dimensions), `Canonical` is its reduction. Every comparison between
/// dimensions goes through `Canonical`.
pub trait Dimension: 'static {
    /// The terms as supplied, possibly with duplicates and zero exponents.
    type Terms: TermList;

    /// The reduced terms.
    type Canonical: TermList;
}

/// A dimension built from the term list `L`.
///
/// `Dim` is zero-sized and can be instantiated, so dimension arithmetic reads the same at the type level and at
/// the value level:
///
/// ```rust
/// use dimensional_core::quantities::{Acceleration, Force, Mass};
/// use dimensional_core::same_dimension;
///
/// let force = Mass::new() * Acceleration::new();
/// assert_eq!(force.to_string(), "M·L·T^-2");
/// const _: () = assert!(same_dimension::<Force, dimensional_core::MulDim<Mass, Acceleration>>());
/// ```
///
/// Addition and subtraction only exist between equal dimensions:
///
/// ```compile_fail
/// use dimensional_core::quantities::{Length, Time};
///
/// let _ = Length::new() + Time::new();
/// ```
pub struct Dim<L>(PhantomData<L>);

impl<L> Dim<L> {
    /// Returns the zero-sized value of this dimension.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<L> Clone for Dim<L> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Dim<L> {}

impl<L> Default for Dim<L> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<L> PartialEq for Dim<L> {
    #[inline]
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<L> Eq for Dim<L> {}

impl<L> Dimension for Dim<L>
where
    L: TermList + Reduce,
    Reduced<L>: TermList,
{
    type Terms = L;
    type Canonical = Reduced<L>;
}

/// Dimension of pure numbers.
pub type Dimensionless = Dim<Nil>;

// ─────────────────────────────────────────────────────────────────────────────
// Type-level operators
// ─────────────────────────────────────────────────────────────────────────────

/// Product of two dimensions. The terms are concatenated; reduction happens when the result is compared.
pub type MulDim<A, B> = Dim<Concatenated<<A as Dimension>::Terms, <B as Dimension>::Terms>>;

/// Quotient of two dimensions: `A` times the inverse of `B`.
pub type DivDim<A, B> = Dim<Concatenated<<A as Dimension>::Terms, Negated<<B as Dimension>::Terms>>>;

/// Inverse of a dimension (every exponent negated).
pub type Inverse<D> = Dim<Negated<<D as Dimension>::Terms>>;

impl<A, B> Mul<Dim<B>> for Dim<A>
where
    A: Concat<B>,
{
    type Output = Dim<Concatenated<A, B>>;

    #[inline]
    fn mul(self, _: Dim<B>) -> Self::Output {
        Dim::new()
    }
}

impl<A, B> Div<Dim<B>> for Dim<A>
where
    B: NegateTerms,
    A: Concat<Negated<B>>,
{
    type Output = Dim<Concatenated<A, Negated<B>>>;

    #[inline]
    fn div(self, _: Dim<B>) -> Self::Output {
        Dim::new()
    }
}

impl<A, B> Add<Dim<B>> for Dim<A>
where
    Dim<A>: SameDimension<Dim<B>>,
    Dim<B>: Dimension,
    A: Reduce,
{
    type Output = Dim<Reduced<A>>;

    #[inline]
    fn add(self, _: Dim<B>) -> Self::Output {
        Dim::new()
    }
}

impl<A, B> Sub<Dim<B>> for Dim<A>
where
    Dim<A>: SameDimension<Dim<B>>,
    Dim<B>: Dimension,
    A: Reduce,
{
    type Output = Dim<Reduced<A>>;

    #[inline]
    fn sub(self, _: Dim<B>) -> Self::Output {
        Dim::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Predicates
// ─────────────────────────────────────────────────────────────────────────────

/// Type-level equality of two dimensions: `Output` is `B1` when their canonical forms hold the same terms.
pub trait DimensionEq<B: Dimension>: Dimension {
    /// `B1` or `B0`.
    type Output: Bit;
}

impl<A, B> DimensionEq<B> for A
where
    A: Dimension,
    B: Dimension,
    A::Canonical: ListEq<B::Canonical>,
{
    type Output = <A::Canonical as ListEq<B::Canonical>>::Output;
}

/// Bound satisfied only by two equal dimensions.
///
/// This is the gate for adding, subtracting and converting quantities.
#[diagnostic::on_unimplemented(
    message = "dimension mismatch: `{Self}` is not the same dimension as `{B}`",
    label = "these dimensions differ",
    note = "quantities can only be added, subtracted or converted when their dimensions reduce to the same terms"
)]
pub trait SameDimension<B: Dimension>: Dimension {}

impl<A, B> SameDimension<B> for A
where
    A: DimensionEq<B, Output = B1>,
    B: Dimension,
{
}

/// Returns `true` when `A` and `B` are the same dimension.
///
/// ```rust
/// use dimensional_core::quantities::{Energy, Force, Length, Power};
/// use dimensional_core::{same_dimension, MulDim};
///
/// assert!(same_dimension::<Energy, MulDim<Length, Force>>());
/// assert!(!same_dimension::<Energy, Power>());
/// ```
#[inline]
pub const fn same_dimension<A, B>() -> bool
where
    A: DimensionEq<B>,
    B: Dimension,
{
    <<A as DimensionEq<B>>::Output as Bit>::BOOL
}

/// Type-level test for an exact term (tag and exponent) in the canonical form of a dimension.
pub trait HasTerm<X: DimensionTerm>: Dimension {
    /// `B1` or `B0`.
    type Output: Bit;
}

impl<D, X> HasTerm<X> for D
where
    D: Dimension,
    X: DimensionTerm,
    D::Canonical: ContainsTerm<X>,
{
    type Output = <D::Canonical as ContainsTerm<X>>::Output;
}

/// Returns `true` when the canonical form of `D` holds the term `X`.
///
/// ```rust
/// use dimensional_core::quantities::Velocity;
/// use dimensional_core::tags::{Length, Time};
/// use dimensional_core::typenum::{N1, P1};
/// use dimensional_core::{contains_term, Term};
///
/// assert!(contains_term::<Velocity, Term<Time, N1>>());
/// assert!(!contains_term::<Velocity, Term<Time, P1>>());
/// assert!(contains_term::<Velocity, Term<Length, P1>>());
/// ```
#[inline]
pub const fn contains_term<D, X>() -> bool
where
    D: HasTerm<X>,
    X: DimensionTerm,
{
    <<D as HasTerm<X>>::Output as Bit>::BOOL
}

/// Type-level test for a base dimension, with any exponent, in the canonical form of a dimension.
pub trait HasBaseDimension<Tag: BaseDimension>: Dimension {
    /// `B1` or `B0`.
    type Output: Bit;
}

impl<D, Tag> HasBaseDimension<Tag> for D
where
    D: Dimension,
    Tag: BaseDimension,
    D::Canonical: HasTag<Tag>,
{
    type Output = <D::Canonical as HasTag<Tag>>::Output;
}

/// Returns `true` when the canonical form of `D` involves the base dimension `Tag`.
///
/// Dimensions that cancel out are not involved: `Length / Length` has no length.
#[inline]
pub const fn has_base_dimension<D, Tag>() -> bool
where
    D: HasBaseDimension<Tag>,
    Tag: BaseDimension,
{
    <<D as HasBaseDimension<Tag>>::Output as Bit>::BOOL
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Prints the canonical signature with dimension symbols, e.g. `M·L·T^-2`. Dimensionless prints `1`.
impl<L> Display for Dim<L>
where
    Dim<L>: Dimension,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        type Canonical<D> = <D as Dimension>::Canonical;
        if <Canonical<Self> as TermList>::LEN == 0 {
            return f.write_str("1");
        }
        <Canonical<Self> as TermList>::fmt_terms(f, Notation::Dimension)
    }
}

impl<L> Debug for Dim<L>
where
    Dim<L>: Dimension,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Dim({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::*;
    use crate::tags;
    use crate::term::Term;
    use crate::{dim, terms};
    use typenum::{N1, N2, P1, P2, Z0};

    trait Identical<T> {}
    impl<T> Identical<T> for T {}
    fn assert_type_eq<A: Identical<B>, B>() {}

    type TimeSqLengthSq = dim![Term<tags::Time, P2>, Term<tags::Length, P2>];
    type LengthSqTimeSq = dim![Term<tags::Length, P2>, Term<tags::Time, P2>];

    // ─────────────────────────────────────────────────────────────────────────────
    // Equality
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_ignores_term_order() {
        assert!(same_dimension::<TimeSqLengthSq, LengthSqTimeSq>());
        assert!(same_dimension::<LengthSqTimeSq, TimeSqLengthSq>());
    }

    #[test]
    fn equality_reduces_both_sides() {
        type Raw = dim![Term<tags::Length, P1>, Term<tags::Time, P1>, Term<tags::Length, P1>, Term<tags::Time, P1>];
        assert!(same_dimension::<Raw, TimeSqLengthSq>());
        assert!(!same_dimension::<TimeSqLengthSq, MulDim<Length, Length>>());
    }

    #[test]
    fn canonical_is_reduced() {
        type Raw = dim![Term<tags::Length, P1>, Term<tags::Mass, P1>, Term<tags::Length, N1>];
        assert_type_eq::<<Raw as Dimension>::Canonical, terms![Term<tags::Mass, P1>]>();
    }

    #[test]
    fn zero_exponent_equals_absence() {
        type WithZero = dim![Term<tags::Mass, P1>, Term<tags::Time, Z0>];
        assert!(same_dimension::<WithZero, Mass>());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn multiply_and_divide_laws() {
        assert!(same_dimension::<Force, MulDim<Mass, Acceleration>>());
        assert!(same_dimension::<MulDim<Velocity, Time>, Length>());
        assert!(same_dimension::<DivDim<DivDim<Length, Time>, Time>, Acceleration>());
        assert!(same_dimension::<DivDim<MulDim<Force, Time>, Time>, Force>());
    }

    #[test]
    fn concrete_force_scenario() {
        type Composite = MulDim<Mass, DivDim<Length, MulDim<Time, Time>>>;
        assert!(same_dimension::<Force, Composite>());
        assert_type_eq::<
            <Composite as Dimension>::Canonical,
            terms![Term<tags::Mass, P1>, Term<tags::Length, P1>, Term<tags::Time, N2>],
        >();
    }

    #[test]
    fn dividing_by_itself_is_dimensionless() {
        assert!(same_dimension::<DivDim<Energy, Energy>, Dimensionless>());
        assert!(same_dimension::<MulDim<Inverse<Time>, Time>, Dimensionless>());
    }

    #[test]
    fn inverse_negates_raw_terms() {
        assert_type_eq::<Inverse<Velocity>, dim![Term<tags::Length, N1>, Term<tags::Time, P1>]>();
    }

    #[test]
    fn value_level_operators_match_aliases() {
        let momentum: MulDim<Mass, Velocity> = Mass::new() * Velocity::new();
        let frequency: DivDim<Dimensionless, Time> = Dimensionless::new() / Time::new();
        let summed: Dim<Reduced<<Momentum as Dimension>::Terms>> = Momentum::new() + momentum;
        let _ = Area::new() - MulDim::<Length, Length>::new();
        assert_eq!(frequency.to_string(), "T^-1");
        assert_eq!(summed, Dim::new());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Containment
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn contains_exact_terms() {
        assert!(contains_term::<Acceleration, Term<tags::Time, N2>>());
        assert!(!contains_term::<Acceleration, Term<tags::Time, N1>>());
        assert!(!contains_term::<Acceleration, Term<tags::Mass, P1>>());
    }

    #[test]
    fn base_dimension_containment_ignores_exponent() {
        assert!(has_base_dimension::<Length, tags::Length>());
        assert!(!has_base_dimension::<Length, tags::Time>());
        assert!(!has_base_dimension::<TimeSqLengthSq, tags::Mass>());
        assert!(has_base_dimension::<TimeSqLengthSq, tags::Time>());
        assert!(!has_base_dimension::<DivDim<Length, Length>, tags::Length>());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_prints_canonical_signature() {
        assert_eq!(Force::new().to_string(), "M·L·T^-2");
        assert_eq!(Dimensionless::new().to_string(), "1");
        assert_eq!(format!("{:?}", Velocity::new()), "Dim(L·T^-1)");
    }
}
