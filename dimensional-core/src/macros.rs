//! Macros for declaring tags, term lists, conversion strategies and unit conversions.

/// Implements [`BaseDimension`](crate::BaseDimension) for an empty tag type.
///
/// Besides the trait impl, the expansion contains a `const` assertion that the tag is zero-sized, so a tag that
/// carries data is rejected at compile time. The macro is the only way to satisfy the hidden marker
/// [`BaseDimension`](crate::BaseDimension) requires, so the assertion cannot be skipped:
///
/// ```compile_fail
/// use dimensional_core::impl_base_dimension;
/// use dimensional_core::typenum::U77;
///
/// pub struct Leaky(u8);
/// impl_base_dimension!(Leaky, id = U77, symbol = "X", unit = "x");
/// ```
#[macro_export]
macro_rules! impl_base_dimension {
    ($tag:ty, id = $id:ty, symbol = $symbol:expr, unit = $unit:expr $(,)?) => {
        impl $crate::BaseDimension for $tag {
            type Id = $id;
            const SYMBOL: &'static str = $symbol;
            const UNIT: &'static str = $unit;
        }

        impl $crate::DeclaredTag for $tag {}

        const _: () = ::core::assert!(
            ::core::mem::size_of::<$tag>() == 0,
            "base dimension tags must be zero-sized"
        );
    };
}

/// Builds an ordered term list type: `terms![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>`.
///
/// ```rust
/// use dimensional_core::tags::{Length, Time};
/// use dimensional_core::typenum::{N1, P1};
/// use dimensional_core::{terms, Term, TermList};
///
/// type Speed = terms![Term<Length, P1>, Term<Time, N1>];
/// assert_eq!(<Speed as TermList>::LEN, 2);
/// ```
#[macro_export]
macro_rules! terms {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::terms![$($tail),*]>
    };
}

/// Builds a dimension from raw terms: `dim![A, B]` is `Dim<terms![A, B]>`.
///
/// The terms do not need to be reduced; duplicates and cancelling exponents are allowed.
#[macro_export]
macro_rules! dim {
    ($($term:ty),* $(,)?) => {
        $crate::Dim<$crate::terms![$($term),*]>
    };
}

/// Declares ratio conversion strategies: `to_standard(x) = ratio * x`.
///
/// ```rust
/// use dimensional_core::conversion::Conversion;
/// use dimensional_core::ratio_conversion;
///
/// ratio_conversion! {
///     /// Seconds per fortnight.
///     pub struct Fortnight: ratio = 1_209_600.0;
/// }
///
/// assert_eq!(Fortnight::to_standard(2.0_f64), 2_419_200.0);
/// assert_eq!(Fortnight::RATIO, 1_209_600.0);
/// ```
#[macro_export]
macro_rules! ratio_conversion {
    ($( $(#[$meta:meta])* $vis:vis struct $name:ident: ratio = $ratio:expr; )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            $vis struct $name;

            impl $name {
                /// Number of standard units in one unit of this scale.
                pub const RATIO: f64 = $ratio;
            }

            impl $crate::conversion::Conversion for $name {
                #[inline]
                fn to_standard<T: $crate::Real>(value: T) -> T {
                    T::from_f64(Self::RATIO) * value
                }

                #[inline]
                fn from_standard<T: $crate::Real>(value: T) -> T {
                    value / T::from_f64(Self::RATIO)
                }
            }
        )*
    };
}

/// Declares magnitude prefixes: ratio conversions that also carry a printable prefix symbol.
#[macro_export]
macro_rules! prefix_conversion {
    ($( $(#[$meta:meta])* $vis:vis struct $name:ident: ratio = $ratio:expr, prefix = $prefix:expr; )*) => {
        $(
            $crate::ratio_conversion! {
                $(#[$meta])*
                $vis struct $name: ratio = $ratio;
            }

            impl $crate::conversion::Prefix for $name {
                const PREFIX: &'static str = $prefix;
            }
        )*
    };
}

/// Declares linear conversion strategies: `to_standard(x) = gradient * x + intercept`.
///
/// ```rust
/// use dimensional_core::conversion::Conversion;
/// use dimensional_core::linear_conversion;
///
/// linear_conversion! {
///     /// Rankine-like scale with an offset.
///     pub struct Shifted: intercept = 10.0, gradient = 2.0;
/// }
///
/// assert_eq!(Shifted::to_standard(3.0_f64), 16.0);
/// assert_eq!(Shifted::from_standard(16.0_f64), 3.0);
/// ```
#[macro_export]
macro_rules! linear_conversion {
    ($( $(#[$meta:meta])* $vis:vis struct $name:ident: intercept = $intercept:expr, gradient = $gradient:expr; )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            $vis struct $name;

            impl $name {
                /// Standard value at a unit value of zero.
                pub const INTERCEPT: f64 = $intercept;
                /// Standard units per unit step.
                pub const GRADIENT: f64 = $gradient;
            }

            impl $crate::conversion::Conversion for $name {
                #[inline]
                fn to_standard<T: $crate::Real>(value: T) -> T {
                    T::from_f64(Self::GRADIENT) * value + T::from_f64(Self::INTERCEPT)
                }

                #[inline]
                fn from_standard<T: $crate::Real>(value: T) -> T {
                    (value - T::from_f64(Self::INTERCEPT)) / T::from_f64(Self::GRADIENT)
                }
            }
        )*
    };
}

/// Declares logarithmic conversion strategies:
/// `to_standard(x) = multiplier * ln(x) / ln(base)` and `from_standard(x) = base^(x / multiplier)`.
#[macro_export]
macro_rules! logarithmic_conversion {
    ($( $(#[$meta:meta])* $vis:vis struct $name:ident: base = $base:expr, multiplier = $multiplier:expr; )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            $vis struct $name;

            impl $name {
                /// Logarithm base.
                pub const BASE: f64 = $base;
                /// Factor applied to the logarithm.
                pub const MULTIPLIER: f64 = $multiplier;
            }

            impl $crate::conversion::Conversion for $name {
                #[inline]
                fn to_standard<T: $crate::Real>(value: T) -> T {
                    T::from_f64(Self::MULTIPLIER) * value.ln() / T::from_f64(Self::BASE).ln()
                }

                #[inline]
                fn from_standard<T: $crate::Real>(value: T) -> T {
                    T::from_f64(Self::BASE).powf(value / T::from_f64(Self::MULTIPLIER))
                }
            }
        )*
    };
}

/// Generates `From` trait implementations for all pairs of units within a dimension.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<T: $crate::Real> From<$crate::Quantity<$first, T>> for $crate::Quantity<$rest, T> {
                fn from(value: $crate::Quantity<$first, T>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<T: $crate::Real> From<$crate::Quantity<$rest, T>> for $crate::Quantity<$first, T> {
                fn from(value: $crate::Quantity<$rest, T>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}
