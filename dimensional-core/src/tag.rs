//! Base-dimension tags.

use typenum::Unsigned;

/// Marker trait for **base dimensions** (Length, Time, Mass …).
///
/// A base dimension is an independent axis of measurement with no further decomposition. Each tag is an empty
/// type; it carries no data and is never instantiated.
///
/// Trait resolution cannot branch on whether two arbitrary types are equal, so every tag declares a type-level
/// identifier [`BaseDimension::Id`] that the dimension algorithms dispatch on. Identity stays nominal: when two
/// ids match, the tags must also be the same type, and two distinct tags sharing an id fail to compile wherever
/// they meet. Ids must therefore be unique within a program. The built-in tags in [`crate::tags`] use ids `1..=9`.
///
/// Implement this trait through [`impl_base_dimension!`](crate::impl_base_dimension), which also asserts at
/// compile time that the tag is zero-sized. The trait requires a hidden marker that only the macro provides, so a
/// hand-written impl is rejected:
///
/// ```compile_fail
/// use dimensional_core::BaseDimension;
/// use dimensional_core::typenum::U90;
///
/// pub struct Leaky(pub [u8; 16]);
///
/// impl BaseDimension for Leaky {
///     type Id = U90;
///     const SYMBOL: &'static str = "X";
///     const UNIT: &'static str = "x";
/// }
/// ```
///
/// Declared through the macro instead:
///
/// ```rust
/// use dimensional_core::{impl_base_dimension, BaseDimension};
/// use dimensional_core::typenum::U100;
///
/// pub enum Information {}
/// impl_base_dimension!(Information, id = U100, symbol = "B", unit = "bit");
///
/// assert_eq!(<Information as BaseDimension>::SYMBOL, "B");
/// ```
pub trait BaseDimension: DeclaredTag + 'static {
    /// Type-level identifier of this base dimension.
    type Id: Unsigned;

    /// Dimension symbol, e.g. `"L"` for length.
    const SYMBOL: &'static str;

    /// Symbol of the standard (unscaled) unit of this dimension, e.g. `"m"` for length.
    const UNIT: &'static str;
}

/// Marker emitted by [`impl_base_dimension!`](crate::impl_base_dimension) next to its zero-size assertion.
#[doc(hidden)]
pub trait DeclaredTag {}

/// Returns the numeric value of a tag's [`BaseDimension::Id`].
#[inline]
pub const fn tag_id<Tag: BaseDimension>() -> u32 {
    <Tag::Id as Unsigned>::U32
}

/// Returns `true` when no two entries of `ids` are equal.
///
/// Intended for `const` assertions over a set of tags:
///
/// ```rust
/// use dimensional_core::tags::{Length, Mass, Time};
/// use dimensional_core::{ids_are_distinct, tag_id};
///
/// const _: () = assert!(ids_are_distinct(&[
///     tag_id::<Length>(),
///     tag_id::<Mass>(),
///     tag_id::<Time>(),
/// ]));
/// ```
pub const fn ids_are_distinct(ids: &[u32]) -> bool {
    let mut i = 0;
    while i < ids.len() {
        let mut j = i + 1;
        while j < ids.len() {
            if ids[i] == ids[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
