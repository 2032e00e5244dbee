//! Electric current units.
//!
//! The standard unit is the [`Ampere`]; every magnitude prefix from nano to giga is available.

use crate::conversion::{Centi, Deca, Deci, Giga, Hecta, Kilo, Mega, Micro, Milli, Nano};
use crate::quantities::Current;
use crate::unit::Prefixed;
use crate::Quantity;
use dimensional_derive::Unit;

/// Ampere (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", dimension = Current)]
pub struct Ampere;
/// A quantity measured in amperes.
pub type Amperes<T = f64> = Quantity<Ampere, T>;

/// Gigaampere.
pub type Gigaampere = Prefixed<Ampere, Giga>;
/// Megaampere.
pub type Megaampere = Prefixed<Ampere, Mega>;
/// Kiloampere.
pub type Kiloampere = Prefixed<Ampere, Kilo>;
/// Hectoampere.
pub type Hectoampere = Prefixed<Ampere, Hecta>;
/// Decaampere.
pub type Decaampere = Prefixed<Ampere, Deca>;
/// Deciampere.
pub type Deciampere = Prefixed<Ampere, Deci>;
/// Centiampere.
pub type Centiampere = Prefixed<Ampere, Centi>;
/// Milliampere.
pub type Milliampere = Prefixed<Ampere, Milli>;
/// Microampere.
pub type Microampere = Prefixed<Ampere, Micro>;
/// Nanoampere.
pub type Nanoampere = Prefixed<Ampere, Nano>;

/// A quantity measured in kiloamperes.
pub type Kiloamperes<T = f64> = Quantity<Kiloampere, T>;
/// A quantity measured in milliamperes.
pub type Milliamperes<T = f64> = Quantity<Milliampere, T>;
/// A quantity measured in microamperes.
pub type Microamperes<T = f64> = Quantity<Microampere, T>;

impl_unit_conversions!(
    Ampere,
    Gigaampere,
    Megaampere,
    Kiloampere,
    Hectoampere,
    Decaampere,
    Deciampere,
    Centiampere,
    Milliampere,
    Microampere,
    Nanoampere
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn prefixes() {
        assert_abs_diff_eq!(Milliamperes::new(250.0).to::<Ampere>().value(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(Kiloamperes::new(2.0).to::<Megaampere>().value(), 2e-3, epsilon = 1e-15);
        assert_abs_diff_eq!(Amperes::new(1.0).to::<Nanoampere>().value(), 1e9, epsilon = 1e-3);
        assert_abs_diff_eq!(Amperes::new(30.0).to::<Decaampere>().value(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn symbols() {
        assert_eq!(Microamperes::new(5.0).to_string(), "5 µA");
        assert_eq!(Quantity::<Hectoampere>::new(1.0).to_string(), "1 hA");
        assert_eq!(Quantity::<Decaampere>::new(1.0).to_string(), "1 daA");
    }
}
