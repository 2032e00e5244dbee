//! Compile-time dimensional analysis with automatic unit conversion.
//!
//! `dimensional` is the user-facing crate in this workspace. It re-exports the full API from `dimensional-core`
//! plus the predefined units (time, length, mass, current, force, temperature, angle, velocity, ratios).
//!
//! The core idea is: a value is always a `Quantity<U, T>`, where `U` is a zero-sized unit type that carries a
//! dimension. Dimensions are type-level lists of base-dimension terms; two dimensions are equal when their reduced
//! lists hold the same terms, in any order. Mixing incompatible dimensions is a compile error, and compatible units
//! convert automatically.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Derives the dimension of products and quotients (`kg · m/s / s` is a force).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`), including affine and logarithmic
//!   scales.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: quantities are backed by floating point.
//! - Fractional exponents or run-time unit parsing.
//!
//! # Quick start
//!
//! Convert between units of the same dimension:
//!
//! ```rust
//! use dimensional::{Celsius, DegreesFahrenheit};
//!
//! let boiling = DegreesFahrenheit::new(212.0).to::<Celsius>();
//! assert!((boiling.value() - 100.0_f64).abs() < 1e-9);
//! ```
//!
//! Let arithmetic build derived dimensions:
//!
//! ```rust
//! use dimensional::{Kilograms, MetersPerSecond, Newton, Seconds};
//!
//! let force = (Kilograms::new(2.0) * MetersPerSecond::new(3.0) / Seconds::new(1.5)).to::<Newton>();
//! assert!((force.value() - 4.0_f64).abs() < 1e-12);
//! ```
//!
//! Ask questions about dimensions at compile time:
//!
//! ```rust
//! use dimensional::quantities::{Energy, Force, Length, Torque};
//! use dimensional::{same_dimension, MulDim};
//!
//! const ENERGY_IS_WORK: bool = same_dimension::<Energy, MulDim<Force, Length>>();
//! assert!(ENERGY_IS_WORK);
//! assert!(!same_dimension::<Energy, Torque>());
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimensional::{Kilometers, Seconds};
//!
//! let d = Kilometers::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add a length to a time
//! ```
//!
//! ```compile_fail
//! use dimensional::{Kelvin, Meters};
//!
//! let _ = Meters::new(1.0).to::<Kelvin>(); // no conversion across dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `dimensional::time` (seconds, minutes, hours, ...)
//! - `dimensional::length` (metres and their submultiples, kilometres)
//! - `dimensional::mass` (kilograms, grams, tonnes)
//! - `dimensional::current` (amperes with every magnitude prefix)
//! - `dimensional::force` (newtons with every magnitude prefix)
//! - `dimensional::temperature` (kelvin, Celsius, Fahrenheit)
//! - `dimensional::angle` (radians, degrees, turns, trigonometry helpers)
//! - `dimensional::velocity` (metres per second, kilometres per hour, knots)
//! - `dimensional::ratio` (plain numbers, percent, decibels)
//!
//! Named dimensions live in `dimensional::quantities`, base-dimension tags in `dimensional::tags`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimensional-core`.
//! - `demo`: builds the `dimensional-tour` binary, which logs a walk through the engine with `tracing`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimensional = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Dimension mismatches are compile errors. Conversions and arithmetic are pure floating-point computations; they
//! do not panic on their own, and follow IEEE-754 behavior.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![recursion_limit = "256"]

pub use dimensional_core::*;

/// Derive macro used by `dimensional-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::conversion::Identity`, so it is intended for use inside
/// `dimensional-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use dimensional_derive::Unit;

pub use dimensional_core::units::angle;
pub use dimensional_core::units::current;
pub use dimensional_core::units::force;
pub use dimensional_core::units::length;
pub use dimensional_core::units::mass;
pub use dimensional_core::units::ratio;
pub use dimensional_core::units::temperature;
pub use dimensional_core::units::time;
pub use dimensional_core::units::velocity;

pub use dimensional_core::units::angle::*;
pub use dimensional_core::units::current::*;
pub use dimensional_core::units::force::*;
pub use dimensional_core::units::length::*;
pub use dimensional_core::units::mass::*;
pub use dimensional_core::units::ratio::*;
pub use dimensional_core::units::temperature::*;
pub use dimensional_core::units::time::*;
pub use dimensional_core::units::velocity::*;
