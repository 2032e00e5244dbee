//! Time units.
//!
//! The standard unit of this dimension is the [`Second`]. Minutes and hours are exact ratios of it.
//!
//! ```rust
//! use dimensional_core::units::time::{Hours, Second, Hour};
//!
//! let half_hour = Hours::new(0.5);
//! let seconds = half_hour.to::<Second>();
//! assert!((seconds.value() - 1800.0_f64).abs() < 1e-12);
//!
//! let back = seconds.to::<Hour>();
//! assert!((back.value() - 0.5_f64).abs() < 1e-12);
//! ```

use crate::conversion::{Centi, Deci, Micro, Milli, Nano};
use crate::dimension::SameDimension;
use crate::quantities::Time;
use crate::unit::Prefixed;
use crate::{Quantity, Unit};
use dimensional_derive::Unit;

/// Marker trait for any [`Unit`] whose dimension reduces to [`Time`].
pub trait TimeUnit: Unit {}
impl<U: Unit> TimeUnit for U where U::Dim: SameDimension<Time> {}

ratio_conversion! {
    /// Seconds per minute.
    pub struct MinuteScale: ratio = 60.0;
    /// Seconds per hour.
    pub struct HourScale: ratio = 3_600.0;
}

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds<T = f64> = Quantity<Second, T>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

// --- SI submultiples of the second ---

/// Decisecond (`0.1 s`).
pub type Decisecond = Prefixed<Second, Deci>;
/// A quantity measured in deciseconds.
pub type Deciseconds<T = f64> = Quantity<Decisecond, T>;

/// Centisecond (`0.01 s`).
pub type Centisecond = Prefixed<Second, Centi>;
/// A quantity measured in centiseconds.
pub type Centiseconds<T = f64> = Quantity<Centisecond, T>;

/// Millisecond (`1e-3 s`).
pub type Millisecond = Prefixed<Second, Milli>;
/// A quantity measured in milliseconds.
pub type Milliseconds<T = f64> = Quantity<Millisecond, T>;
/// One millisecond.
pub const MS: Milliseconds = Milliseconds::new(1.0);

/// Microsecond (`1e-6 s`).
pub type Microsecond = Prefixed<Second, Micro>;
/// A quantity measured in microseconds.
pub type Microseconds<T = f64> = Quantity<Microsecond, T>;

/// Nanosecond (`1e-9 s`).
pub type Nanosecond = Prefixed<Second, Nano>;
/// A quantity measured in nanoseconds.
pub type Nanoseconds<T = f64> = Quantity<Nanosecond, T>;

// --- Civil units ---

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Time, conversion = MinuteScale)]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes<T = f64> = Quantity<Minute, T>;
/// One minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Time, conversion = HourScale)]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours<T = f64> = Quantity<Hour, T>;
/// One hour.
pub const HOUR: Hours = Hours::new(1.0);

impl_unit_conversions!(
    Second,
    Decisecond,
    Centisecond,
    Millisecond,
    Microsecond,
    Nanosecond,
    Minute,
    Hour
);
