//! Temperature units.
//!
//! The standard unit is the [`Kelvin`]. Celsius and Fahrenheit are affine scales: converting them adds an offset,
//! so `0 °C` is `273.15 K`, not zero.
//!
//! ```rust
//! use dimensional_core::units::temperature::{Celsius, DegreesFahrenheit};
//!
//! let body = DegreesFahrenheit::new(98.6).to::<Celsius>();
//! assert!((body.value() - 37.0_f64).abs() < 1e-9);
//! ```

use crate::quantities::Temperature;
use crate::Quantity;
use dimensional_derive::Unit;

linear_conversion! {
    /// Kelvins from degrees Celsius.
    pub struct CelsiusScale: intercept = 273.15, gradient = 1.0;
    /// Kelvins from degrees Fahrenheit.
    pub struct FahrenheitScale: intercept = 459.67 * 5.0 / 9.0, gradient = 5.0 / 9.0;
}

/// Kelvin (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", dimension = Temperature)]
pub struct Kelvin;
/// A temperature in kelvins.
pub type Kelvins<T = f64> = Quantity<Kelvin, T>;

/// Degree Celsius.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°C", dimension = Temperature, conversion = CelsiusScale)]
pub struct Celsius;
/// A temperature in degrees Celsius.
pub type DegreesCelsius<T = f64> = Quantity<Celsius, T>;

/// Degree Fahrenheit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°F", dimension = Temperature, conversion = FahrenheitScale)]
pub struct Fahrenheit;
/// A temperature in degrees Fahrenheit.
pub type DegreesFahrenheit<T = f64> = Quantity<Fahrenheit, T>;

impl_unit_conversions!(Kelvin, Celsius, Fahrenheit);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn fixed_points() {
        assert_abs_diff_eq!(DegreesCelsius::new(100.0).to::<Kelvin>().value(), 373.15, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesFahrenheit::new(32.0).to::<Celsius>().value(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesFahrenheit::new(-40.0).to::<Celsius>().value(), -40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Kelvins::new(0.0).to::<Fahrenheit>().value(), -459.67, epsilon = 1e-9);
    }

    #[test]
    fn from_impls() {
        let k: Kelvins = DegreesCelsius::new(-273.15).into();
        assert_abs_diff_eq!(k.value(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn addition_happens_in_lhs_unit() {
        let sum = DegreesCelsius::new(10.0) + DegreesCelsius::new(0.0);
        assert_abs_diff_eq!(sum.value(), 10.0, epsilon = 1e-9);
        let sum = DegreesCelsius::new(10.0) + Kelvins::new(5.0);
        assert_abs_diff_eq!(sum.value(), 15.0 - 273.15, epsilon = 1e-9);
    }

    #[test]
    fn symbols() {
        assert_eq!(Kelvins::new(300.0).to_string(), "300 K");
        assert_eq!(DegreesFahrenheit::new(451.0).to_string(), "451 °F");
    }

    proptest! {
        #[test]
        fn fahrenheit_round_trip(x in -1e6..1e6f64) {
            let back = DegreesFahrenheit::new(x).to::<Kelvin>().to::<Fahrenheit>();
            prop_assert!((back.value() - x).abs() <= 1e-9 * x.abs().max(1.0));
        }
    }
}
