//! Dimensionless units.
//!
//! [`Unitless`] is the standard unit of [`Dimensionless`]: its values print as bare numbers. The [`Decibel`] is a
//! logarithmic view of the same dimension, so `30 dB` converts to a plain ratio of `1000`.
//!
//! ```rust
//! use dimensional_core::units::ratio::{Decibel, Ratio};
//!
//! let gain = Ratio::new(100.0).to::<Decibel>();
//! assert!((gain.value() - 20.0_f64).abs() < 1e-12);
//! ```

use crate::conversion::{DecibelScale, Inverted};
use crate::quantities::Dimensionless;
use crate::Quantity;
use dimensional_derive::Unit;

ratio_conversion! {
    /// Ratio per percent.
    pub struct PercentScale: ratio = 1e-2;
}

/// Pure number.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "", dimension = Dimensionless)]
pub struct Unitless;
/// A dimensionless ratio.
pub type Ratio<T = f64> = Quantity<Unitless, T>;

/// Percent.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "%", dimension = Dimensionless, conversion = PercentScale)]
pub struct Percent;
/// A ratio in percent.
pub type Percents<T = f64> = Quantity<Percent, T>;

/// Decibel (power ratio).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dB", dimension = Dimensionless, conversion = Inverted<DecibelScale>)]
pub struct Decibel;
/// A ratio in decibels.
pub type Decibels<T = f64> = Quantity<Decibel, T>;

impl_unit_conversions!(Unitless, Percent, Decibel);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Centimeters, Meters};
    use approx::assert_abs_diff_eq;

    #[test]
    fn decibels() {
        assert_abs_diff_eq!(Decibels::new(0.0).to::<Unitless>().value(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Decibels::new(-10.0).to::<Unitless>().value(), 0.1, epsilon = 1e-12);
        let db: Decibels = Ratio::new(1e6).into();
        assert_abs_diff_eq!(db.value(), 60.0, epsilon = 1e-9);
    }

    #[test]
    fn percent() {
        assert_abs_diff_eq!(Percents::new(12.5).to::<Unitless>().value(), 0.125, epsilon = 1e-15);
        let share = (Centimeters::new(25.0) / Meters::new(1.0)).to::<Percent>();
        assert_abs_diff_eq!(share.value(), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn unitless_prints_bare_numbers() {
        assert!(<Unitless as crate::Unit>::is_unitless());
        assert_eq!(Ratio::new(2.5).to_string(), "2.5");
        assert_eq!(Percents::new(40.0).to_string(), "40 %");
    }
}
