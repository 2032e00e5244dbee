//! Dimension terms: a base dimension raised to an integer power.

use crate::tag::BaseDimension;
use core::marker::PhantomData;
use typenum::{Integer, IsEqual};

/// A base dimension `Tag` raised to the type-level integer power `E`.
///
/// `Term<Length, P2>` is an area, `Term<Time, N1>` is "per second". Exponents are [`typenum`] integers, so the
/// exponent arithmetic performed by the reduction algorithm happens during trait resolution. Terms are never
/// instantiated.
///
/// ```rust
/// use dimensional_core::tags::Time;
/// use dimensional_core::typenum::N2;
/// use dimensional_core::{DimensionTerm, Term};
///
/// assert_eq!(<Term<Time, N2> as DimensionTerm>::EXPONENT, -2);
/// ```
pub struct Term<Tag, E>(PhantomData<(Tag, E)>);

/// Read access to the parts of a [`Term`].
pub trait DimensionTerm: 'static {
    /// Base dimension of the term.
    type Tag: BaseDimension;
    /// Type-level exponent.
    type Exponent: Integer;
    /// Exponent as a plain integer.
    const EXPONENT: i64;
}

impl<Tag: BaseDimension, E: Integer + 'static> DimensionTerm for Term<Tag, E> {
    type Tag = Tag;
    type Exponent = E;
    const EXPONENT: i64 = {
        assert!(
            core::mem::size_of::<Tag>() == 0,
            "base dimension tags must be zero-sized"
        );
        E::I64
    };
}

/// Tag of a term.
pub type TagOf<X> = <X as DimensionTerm>::Tag;

/// Exponent of a term.
pub type ExponentOf<X> = <X as DimensionTerm>::Exponent;

/// Type-level id of a term's tag.
pub type TagIdOf<X> = <TagOf<X> as BaseDimension>::Id;

/// `B1` when the two terms carry the same base dimension (regardless of exponent), `B0` otherwise.
///
/// The comparison dispatches on tag ids. Every branch that acts on a `B1` result also requires the two tags to be
/// the same type through [`SameType`], so two distinct tags sharing an id fail to compile instead of merging.
pub type SameTag<A, B> = <TagIdOf<A> as IsEqual<TagIdOf<B>>>::Output;

/// Holds only when `Self` and `T` are the same type.
///
/// Tag ids are a dispatch key; this bound is what makes tag identity nominal. Two tags declared with the same id
/// are rejected as soon as they meet in a list:
///
/// ```compile_fail
/// use dimensional_core::quantities::Time;
/// use dimensional_core::typenum::{P1, U1};
/// use dimensional_core::{dim, impl_base_dimension, same_dimension, Term};
///
/// pub enum Spin {}
/// impl_base_dimension!(Spin, id = U1, symbol = "S", unit = "ħ"); // U1 is already Time's id
///
/// let _ = same_dimension::<dim![Term<Spin, P1>], Time>();
/// ```
#[doc(hidden)]
pub trait SameType<T: ?Sized> {}

impl<T: ?Sized> SameType<T> for T {}
