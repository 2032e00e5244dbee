//! Predefined unit modules grouped by dimension.
//!
//! `dimensional-core` ships a small set of built-in units so that conversions and formatting work out of the box.
//! Every module declares the standard unit of its dimension, the scaled units derived from it, a `Quantity` alias
//! per unit (generic over the numeric type, `f64` by default) and pairwise `From` conversions.
//!
//! ## Modules
//!
//! - [`time`]: second with its submultiples, minute, hour.
//! - [`length`]: metre with its submultiples and the kilometre.
//! - [`mass`]: kilogram, gram, tonne.
//! - [`current`]: ampere with every magnitude prefix.
//! - [`force`]: newton with every magnitude prefix.
//! - [`temperature`]: kelvin, degree Celsius, degree Fahrenheit.
//! - [`angle`]: radian, degree, turn, plus trigonometric helpers.
//! - [`velocity`]: metre per second, kilometre per hour, knot.
//! - [`ratio`]: plain numbers, percent and decibels.

pub mod angle;
pub mod current;
pub mod force;
pub mod length;
pub mod mass;
pub mod ratio;
pub mod temperature;
pub mod time;
pub mod velocity;
