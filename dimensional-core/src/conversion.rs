//! Conversion strategies between a unit's scale and the standard scale of its dimension.
//!
//! A strategy is a zero-sized type implementing [`Conversion`]. Every unit names one; converting a value between
//! two units of the same dimension goes through the standard scale: `from_standard::<To>(to_standard::<From>(x))`.
//!
//! Four families exist:
//!
//! * [`Identity`]: the value already is in the standard scale.
//! * Ratio strategies ([`ratio_conversion!`](crate::ratio_conversion)): `standard = ratio * x`. The magnitude
//!   prefixes ([`Kilo`], [`Milli`], ...) are ratio strategies that also carry a prefix symbol.
//! * Linear strategies ([`linear_conversion!`](crate::linear_conversion)): `standard = gradient * x + intercept`.
//! * Logarithmic strategies ([`logarithmic_conversion!`](crate::logarithmic_conversion)):
//!   `standard = multiplier * log_base(x)`.
//!
//! Strategies are total: out-of-domain input follows IEEE-754 (the logarithm of zero is `-inf`, of a negative
//! number `NaN`).

use crate::scalar::Real;
use core::marker::PhantomData;

/// A pure numeric transform pair. `from_standard(to_standard(x)) == x` up to rounding.
pub trait Conversion: 'static {
    /// Converts a value of this scale into the standard scale.
    fn to_standard<T: Real>(value: T) -> T;

    /// Converts a standard-scale value into this scale.
    fn from_standard<T: Real>(value: T) -> T;
}

/// A ratio conversion with a printable prefix symbol (`"k"`, `"m"`, ...).
pub trait Prefix: Conversion {
    /// Symbol prepended to the symbol of the prefixed unit.
    const PREFIX: &'static str;
}

/// The conversion of standard units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl Conversion for Identity {
    #[inline]
    fn to_standard<T: Real>(value: T) -> T {
        value
    }

    #[inline]
    fn from_standard<T: Real>(value: T) -> T {
        value
    }
}

/// Applies `Inner` and then `Outer` on the way to the standard scale (and the reverse on the way back).
///
/// A kilo-unit of a scaled unit `U` converts with `Compose<Kilo, U::Conversion>`: first from kilo-`U` to `U`, then
/// from `U` to standard.
pub struct Compose<Inner, Outer>(PhantomData<(Inner, Outer)>);

impl<Inner: Conversion, Outer: Conversion> Conversion for Compose<Inner, Outer> {
    #[inline]
    fn to_standard<T: Real>(value: T) -> T {
        Outer::to_standard(Inner::to_standard(value))
    }

    #[inline]
    fn from_standard<T: Real>(value: T) -> T {
        Inner::from_standard(Outer::from_standard(value))
    }
}

/// Runs `C` backwards: values of this scale are what `C` calls standard, and the other way round.
///
/// The logarithmic strategies map a linear ratio to its logarithm; a unit whose values *are* logarithms (such as
/// the decibel) converts with `Inverted<DecibelScale>`.
pub struct Inverted<C>(PhantomData<C>);

impl<C: Conversion> Conversion for Inverted<C> {
    #[inline]
    fn to_standard<T: Real>(value: T) -> T {
        C::from_standard(value)
    }

    #[inline]
    fn from_standard<T: Real>(value: T) -> T {
        C::to_standard(value)
    }
}

prefix_conversion! {
    /// ×10⁹
    pub struct Giga: ratio = 1e9, prefix = "G";
    /// ×10⁶
    pub struct Mega: ratio = 1e6, prefix = "M";
    /// ×10³
    pub struct Kilo: ratio = 1e3, prefix = "k";
    /// ×10²
    pub struct Hecta: ratio = 1e2, prefix = "h";
    /// ×10
    pub struct Deca: ratio = 1e1, prefix = "da";
    /// ×10⁻¹
    pub struct Deci: ratio = 1e-1, prefix = "d";
    /// ×10⁻²
    pub struct Centi: ratio = 1e-2, prefix = "c";
    /// ×10⁻³
    pub struct Milli: ratio = 1e-3, prefix = "m";
    /// ×10⁻⁶
    pub struct Micro: ratio = 1e-6, prefix = "µ";
    /// ×10⁻⁹
    pub struct Nano: ratio = 1e-9, prefix = "n";
}

logarithmic_conversion! {
    /// Decibels of a power ratio: `10 · log₁₀(x)`.
    pub struct DecibelScale: base = 10.0, multiplier = 10.0;
}
