//! Numeric value types a [`Quantity`](crate::Quantity) can wrap.

use core::fmt::{Debug, Display};
use num_traits::Float;

/// Floating-point scalar carried by a quantity.
///
/// Conversion strategies are written once against this trait and work for both `f32` and `f64`. Constants of a
/// strategy are declared as `f64` and narrowed through [`Real::from_f64`].
pub trait Real: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Converts an `f64` constant into this type (rounding for narrower types).
    fn from_f64(value: f64) -> Self;

    /// Widens this value into an `f64`.
    fn into_f64(self) -> f64;
}

impl Real for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self as f64
    }
}
