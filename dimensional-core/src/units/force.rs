//! Force units.
//!
//! The [`Newton`] is the standard unit of [`Force`] (`kg·m·s^-2`) under a name of its own. Any quantity whose
//! dimension reduces to force converts into newtons, however it was built:
//!
//! ```rust
//! use dimensional_core::units::force::Newton;
//! use dimensional_core::units::mass::Kilograms;
//! use dimensional_core::units::velocity::MetersPerSecond;
//! use dimensional_core::units::time::Seconds;
//!
//! let f = (Kilograms::new(3.0) * MetersPerSecond::new(4.0) / Seconds::new(2.0)).to::<Newton>();
//! assert!((f.value() - 6.0_f64).abs() < 1e-12);
//! ```

use crate::conversion::{Centi, Deca, Deci, Giga, Hecta, Kilo, Mega, Micro, Milli, Nano};
use crate::quantities::Force;
use crate::unit::Prefixed;
use crate::Quantity;
use dimensional_derive::Unit;

/// Newton (`kg·m·s^-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", dimension = Force)]
pub struct Newton;
/// A quantity measured in newtons.
pub type Newtons<T = f64> = Quantity<Newton, T>;
/// One newton.
pub const N: Newtons = Newtons::new(1.0);

/// Giganewton.
pub type Giganewton = Prefixed<Newton, Giga>;
/// Meganewton.
pub type Meganewton = Prefixed<Newton, Mega>;
/// Kilonewton.
pub type Kilonewton = Prefixed<Newton, Kilo>;
/// Hectonewton.
pub type Hectonewton = Prefixed<Newton, Hecta>;
/// Decanewton.
pub type Decanewton = Prefixed<Newton, Deca>;
/// Decinewton.
pub type Decinewton = Prefixed<Newton, Deci>;
/// Centinewton.
pub type Centinewton = Prefixed<Newton, Centi>;
/// Millinewton.
pub type Millinewton = Prefixed<Newton, Milli>;
/// Micronewton.
pub type Micronewton = Prefixed<Newton, Micro>;
/// Nanonewton.
pub type Nanonewton = Prefixed<Newton, Nano>;

/// A quantity measured in kilonewtons.
pub type Kilonewtons<T = f64> = Quantity<Kilonewton, T>;
/// A quantity measured in meganewtons.
pub type Meganewtons<T = f64> = Quantity<Meganewton, T>;
/// A quantity measured in millinewtons.
pub type Millinewtons<T = f64> = Quantity<Millinewton, T>;

impl_unit_conversions!(
    Newton,
    Giganewton,
    Meganewton,
    Kilonewton,
    Hectonewton,
    Decanewton,
    Decinewton,
    Centinewton,
    Millinewton,
    Micronewton,
    Nanonewton
);
