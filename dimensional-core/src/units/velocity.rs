//! Velocity units.
//!
//! [`MeterPerSecond`] is the standard unit of [`Velocity`]. A velocity obtained by dividing a length by a time
//! converts into any of these:
//!
//! ```rust
//! use dimensional_core::units::length::Kilometers;
//! use dimensional_core::units::time::Hours;
//! use dimensional_core::units::velocity::KilometerPerHour;
//!
//! let v = (Kilometers::new(150.0) / Hours::new(2.0)).to::<KilometerPerHour>();
//! assert!((v.value() - 75.0_f64).abs() < 1e-9);
//! ```

use crate::quantities::Velocity;
use crate::Quantity;
use dimensional_derive::Unit;

ratio_conversion! {
    /// Metres per second in one kilometre per hour.
    pub struct KilometerPerHourScale: ratio = 1_000.0 / 3_600.0;
    /// Metres per second in one knot.
    pub struct KnotScale: ratio = 1_852.0 / 3_600.0;
}

/// Metre per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", dimension = Velocity)]
pub struct MeterPerSecond;
/// A velocity in metres per second.
pub type MetersPerSecond<T = f64> = Quantity<MeterPerSecond, T>;

/// Kilometre per hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km/h", dimension = Velocity, conversion = KilometerPerHourScale)]
pub struct KilometerPerHour;
/// A velocity in kilometres per hour.
pub type KilometersPerHour<T = f64> = Quantity<KilometerPerHour, T>;

/// Knot (nautical mile per hour).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kn", dimension = Velocity, conversion = KnotScale)]
pub struct Knot;
/// A velocity in knots.
pub type Knots<T = f64> = Quantity<Knot, T>;

impl_unit_conversions!(MeterPerSecond, KilometerPerHour, Knot);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::Meters;
    use crate::units::time::Seconds;
    use approx::assert_abs_diff_eq;

    #[test]
    fn conversions() {
        assert_abs_diff_eq!(MetersPerSecond::new(10.0).to::<KilometerPerHour>().value(), 36.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Knots::new(1.0).to::<KilometerPerHour>().value(), 1.852, epsilon = 1e-12);
        let v: MetersPerSecond = KilometersPerHour::new(72.0).into();
        assert_abs_diff_eq!(v.value(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn length_over_time_is_a_velocity() {
        let v = Meters::new(100.0) / Seconds::new(8.0);
        assert_abs_diff_eq!(v.to::<MeterPerSecond>().value(), 12.5, epsilon = 1e-12);
        let sum = MetersPerSecond::new(1.0) + v;
        assert_abs_diff_eq!(sum.value(), 13.5, epsilon = 1e-12);
    }

    #[test]
    fn symbols() {
        assert_eq!(KilometersPerHour::new(50.0).to_string(), "50 km/h");
        assert_eq!((Meters::new(3.0) / Seconds::new(1.0)).to_string(), "3 m·s^-1");
    }
}
