//! Built-in base dimensions.
//!
//! The seven SI base dimensions plus currency and plane angle. Ids `1..=9` are taken by these tags; user-defined
//! tags must pick other ids.

use crate::tag::{ids_are_distinct, tag_id};
use typenum::{U1, U2, U3, U4, U5, U6, U7, U8, U9};

/// Time (`T`), measured in seconds.
pub enum Time {}
impl_base_dimension!(Time, id = U1, symbol = "T", unit = "s");

/// Length (`L`), measured in metres.
pub enum Length {}
impl_base_dimension!(Length, id = U2, symbol = "L", unit = "m");

/// Mass (`M`), measured in kilograms.
pub enum Mass {}
impl_base_dimension!(Mass, id = U3, symbol = "M", unit = "kg");

/// Electric current (`I`), measured in amperes.
pub enum Current {}
impl_base_dimension!(Current, id = U4, symbol = "I", unit = "A");

/// Thermodynamic temperature (`Θ`), measured in kelvins.
pub enum Temperature {}
impl_base_dimension!(Temperature, id = U5, symbol = "Θ", unit = "K");

/// Amount of substance (`N`), measured in moles.
pub enum Amount {}
impl_base_dimension!(Amount, id = U6, symbol = "N", unit = "mol");

/// Luminous intensity (`J`), measured in candelas.
pub enum Luminosity {}
impl_base_dimension!(Luminosity, id = U7, symbol = "J", unit = "cd");

/// Currency (`¤`).
pub enum Currency {}
impl_base_dimension!(Currency, id = U8, symbol = "¤", unit = "¤");

/// Plane angle (`A`), measured in radians.
pub enum Angle {}
impl_base_dimension!(Angle, id = U9, symbol = "A", unit = "rad");

const _: () = assert!(
    ids_are_distinct(&[
        tag_id::<Time>(),
        tag_id::<Length>(),
        tag_id::<Mass>(),
        tag_id::<Current>(),
        tag_id::<Temperature>(),
        tag_id::<Amount>(),
        tag_id::<Luminosity>(),
        tag_id::<Currency>(),
        tag_id::<Angle>(),
    ]),
    "built-in base dimensions must have distinct ids"
);
