//! Length units.
//!
//! The standard unit of this dimension is the [`Meter`]. The metric submultiples and the kilometre are
//! [`Prefixed`] metres.
//!
//! ```rust
//! use dimensional_core::units::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0_f64).abs() < 1e-12);
//! ```

use crate::conversion::{Centi, Deci, Kilo, Micro, Milli, Nano};
use crate::dimension::SameDimension;
use crate::quantities::Length;
use crate::unit::Prefixed;
use crate::{Quantity, Unit};
use dimensional_derive::Unit;

/// Marker trait for any [`Unit`] whose dimension reduces to [`Length`].
pub trait LengthUnit: Unit {}
impl<U: Unit> LengthUnit for U where U::Dim: SameDimension<Length> {}

// ─────────────────────────────────────────────────────────────────────────────
// SI base unit
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters<T = f64> = Quantity<Meter, T>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Prefixed metres
// ─────────────────────────────────────────────────────────────────────────────

/// Kilometre (`1000 m`).
pub type Kilometer = Prefixed<Meter, Kilo>;
/// A quantity measured in kilometres.
pub type Kilometers<T = f64> = Quantity<Kilometer, T>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Decimetre (`0.1 m`).
pub type Decimeter = Prefixed<Meter, Deci>;
/// A quantity measured in decimetres.
pub type Decimeters<T = f64> = Quantity<Decimeter, T>;

/// Centimetre (`0.01 m`).
pub type Centimeter = Prefixed<Meter, Centi>;
/// A quantity measured in centimetres.
pub type Centimeters<T = f64> = Quantity<Centimeter, T>;
/// One centimetre.
pub const CM: Centimeters = Centimeters::new(1.0);

/// Millimetre (`1e-3 m`).
pub type Millimeter = Prefixed<Meter, Milli>;
/// A quantity measured in millimetres.
pub type Millimeters<T = f64> = Quantity<Millimeter, T>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Micrometre (`1e-6 m`).
pub type Micrometer = Prefixed<Meter, Micro>;
/// A quantity measured in micrometres.
pub type Micrometers<T = f64> = Quantity<Micrometer, T>;

/// Nanometre (`1e-9 m`).
pub type Nanometer = Prefixed<Meter, Nano>;
/// A quantity measured in nanometres.
pub type Nanometers<T = f64> = Quantity<Nanometer, T>;

impl_unit_conversions!(
    Meter,
    Kilometer,
    Decimeter,
    Centimeter,
    Millimeter,
    Micrometer,
    Nanometer
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kilometer_to_meter() {
        assert_abs_diff_eq!(KM.to::<Meter>().value(), 1000.0);
    }

    #[test]
    fn centimeters_to_millimeters() {
        assert_abs_diff_eq!(Centimeters::new(2.5).to::<Millimeter>().value(), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn nanometers_to_micrometers() {
        assert_abs_diff_eq!(Nanometers::new(1500.0).to::<Micrometer>().value(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn from_impls() {
        let m: Meters = Decimeters::new(12.0).into();
        assert_abs_diff_eq!(m.value(), 1.2, epsilon = 1e-12);
        let km: Kilometers = M.into();
        assert_abs_diff_eq!(km.value(), 1e-3, epsilon = 1e-15);
    }

    #[test]
    fn symbols() {
        assert_eq!(M.to_string(), "1 m");
        assert_eq!(KM.to_string(), "1 km");
        assert_eq!(CM.to_string(), "1 cm");
        assert_eq!(Micrometers::new(2.0).to_string(), "2 µm");
    }

    #[test]
    fn marker_trait_covers_derived_lengths() {
        fn assert_length_unit<U: LengthUnit>() {}
        assert_length_unit::<Meter>();
        assert_length_unit::<Nanometer>();
        assert_length_unit::<crate::unit::Standard<crate::quantities::Distance>>();
    }

    #[test]
    fn f32_lengths() {
        let d = Kilometers::new(1.5_f32).to::<Meter>();
        assert_relative_eq!(d.value(), 1500.0_f32);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prefixed_round_trip(x in -1e9..1e9f64) {
            let back = Millimeters::new(x).to::<Kilometer>().to::<Millimeter>();
            prop_assert!((back.value() - x).abs() <= 1e-9 * x.abs().max(1.0));
        }
    }
}
