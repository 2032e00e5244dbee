//! Mass units.
//!
//! The standard unit of this dimension is the [`Kilogram`]: it is the base unit of the SI even though its name
//! carries a prefix, so grams and tonnes are plain ratios of it.

use crate::quantities::Mass;
use crate::Quantity;
use dimensional_derive::Unit;

ratio_conversion! {
    /// Kilograms per gram.
    pub struct GramScale: ratio = 1e-3;
    /// Kilograms per tonne.
    pub struct TonneScale: ratio = 1e3;
}

/// Kilogram (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = Mass)]
pub struct Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms<T = f64> = Quantity<Kilogram, T>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

/// Gram (`1e-3 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Mass, conversion = GramScale)]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams<T = f64> = Quantity<Gram, T>;

/// Tonne (`1000 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", dimension = Mass, conversion = TonneScale)]
pub struct Tonne;
/// A quantity measured in tonnes.
pub type Tonnes<T = f64> = Quantity<Tonne, T>;

impl_unit_conversions!(Kilogram, Gram, Tonne);
