//! Plane angle units.
//!
//! The standard unit is the [`Radian`]. Trigonometric functions are available on any angle quantity, whatever
//! unit it is stored in:
//!
//! ```rust
//! use dimensional_core::units::angle::Degrees;
//!
//! let right = Degrees::new(90.0);
//! assert!((right.sin() - 1.0_f64).abs() < 1e-12);
//! ```

use crate::dimension::SameDimension;
use crate::quantities::Angle;
use crate::{Quantity, Real, Unit};
use dimensional_derive::Unit;

ratio_conversion! {
    /// Radians per degree.
    pub struct DegreeScale: ratio = core::f64::consts::PI / 180.0;
    /// Radians per turn.
    pub struct TurnScale: ratio = core::f64::consts::TAU;
}

/// Radian.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", dimension = Angle)]
pub struct Radian;
/// An angle in radians.
pub type Radians<T = f64> = Quantity<Radian, T>;

/// Degree of arc.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°", dimension = Angle, conversion = DegreeScale)]
pub struct Degree;
/// An angle in degrees.
pub type Degrees<T = f64> = Quantity<Degree, T>;

/// Full turn.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "tr", dimension = Angle, conversion = TurnScale)]
pub struct Turn;
/// An angle in turns.
pub type Turns<T = f64> = Quantity<Turn, T>;

impl_unit_conversions!(Radian, Degree, Turn);

impl<U: Unit, T: Real> Quantity<U, T>
where
    Angle: SameDimension<U::Dim>,
{
    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> T {
        self.to::<Radian>().value().sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> T {
        self.to::<Radian>().value().cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> T {
        self.to::<Radian>().value().tan()
    }

    /// Sine and cosine at once.
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.to::<Radian>().value().sin_cos()
    }
}
