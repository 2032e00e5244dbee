//! Core type system for compile-time dimensional analysis.
//!
//! `dimensional-core` checks physical dimensions in the type system and converts between units at run time:
//!
//! - A *base dimension* is a zero-sized tag implementing [`BaseDimension`] (time, length, mass, ...).
//! - A *dimension* is a [`Dim`] wrapping a type-level list of [`Term`]s, each a tag raised to a signed integer
//!   exponent. Lists are compared after reduction, so `L·T·T^-1` and `L` are the same dimension.
//! - A *unit* is a zero-sized marker implementing [`Unit`]: a dimension plus a [`Conversion`] to the standard unit
//!   of that dimension.
//! - A value tagged with a unit is a [`Quantity<U, T>`], backed by any [`Real`] (`f64` by default).
//!
//! Most users should depend on `dimensional` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of adding, subtracting or converting values of different dimensions.
//! - Order-independent dimension equality (`M·L·T^-2` equals `T^-2·M·L`).
//! - Automatic result dimensions for products and quotients of quantities.
//! - Ratio, affine (temperature) and logarithmic (decibel) unit conversions.
//!
//! # What this crate does not try to solve
//!
//! - Exact or rational arithmetic; values are floating point.
//! - Fractional exponents.
//! - Run-time unit parsing.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use dimensional_core::units::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0_f64).abs() < 1e-12);
//! ```
//!
//! Derived dimensions come out of arithmetic and convert into named units:
//!
//! ```rust
//! use dimensional_core::units::length::Meters;
//! use dimensional_core::units::time::{Second, Seconds};
//! use dimensional_core::units::velocity::MetersPerSecond;
//!
//! let t = (Meters::new(100.0) / MetersPerSecond::new(20.0)).to::<Second>();
//! assert_eq!(t, Seconds::new(5.0));
//! ```
//!
//! Dimension checks are plain trait bounds:
//!
//! ```compile_fail
//! use dimensional_core::units::length::Meters;
//! use dimensional_core::units::time::Seconds;
//!
//! let _ = Meters::new(1.0) + Seconds::new(1.0); // length + time
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimensional-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimensional-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! Floating-point functions missing from `core` (logarithms, powers, trigonometry) then come from `libm` through
//! `num-traits`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//!
//! # Panics and errors
//!
//! Dimension mismatches are compile errors. Conversions and arithmetic are pure floating-point computations; they
//! do not panic, and follow IEEE-754 behavior (a decibel view of a non-positive ratio is `-inf` or NaN).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![recursion_limit = "256"]

#[macro_use]
mod macros;

// ─────────────────────────────────────────────────────────────────────────────
// Type-level dimension engine
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod equality;
mod list;
mod reduce;
mod tag;
mod term;

// ─────────────────────────────────────────────────────────────────────────────
// Units and values
// ─────────────────────────────────────────────────────────────────────────────

pub mod conversion;
mod quantity;
mod scalar;
pub mod unit;

pub use typenum;

pub use conversion::Conversion;
pub use dimension::{
    contains_term, has_base_dimension, same_dimension, Dim, Dimension, DimensionEq, Dimensionless, DivDim,
    HasBaseDimension, HasTerm, Inverse, MulDim, SameDimension,
};
pub use equality::{ListEq, Subset};
pub use list::{
    Append, Appended, Concat, Concatenated, ContainsTerm, Cons, HasTag, NegateTerms, Negated, Nil, Notation,
    TermList,
};
pub use quantity::Quantity;
pub use reduce::{Reduce, Reduced};
pub use scalar::Real;
pub use tag::{ids_are_distinct, tag_id, BaseDimension};
#[doc(hidden)]
pub use tag::DeclaredTag;
pub use term::{DimensionTerm, Term};
pub use unit::{Prefixed, Standard, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Catalogs
// ─────────────────────────────────────────────────────────────────────────────

pub mod quantities;
pub mod tags;

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `dimensional-core` so they can add inherent helpers on [`Quantity`] without running into
/// Rust's orphan rules.
pub mod units;

pub use units::angle;
pub use units::current;
pub use units::force;
pub use units::length;
pub use units::mass;
pub use units::ratio;
pub use units::temperature;
pub use units::time;
pub use units::velocity;
