//! Unit types and traits.

use crate::conversion::{Compose, Conversion, Identity, Prefix};
use crate::dimension::Dimension;
use crate::list::{Notation, TermList};
use core::fmt::{self, Debug, Display, Formatter};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `Dim` ties the unit to its [`Dimension`]. Two units can be converted into each other, added and subtracted
///   exactly when their dimensions are equal.
///
/// * `Conversion` maps values of this unit to and from the standard unit of the dimension (the unit whose scale
///   is the product of the base units: metre, kilogram, second, ...).
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"°C"`). Composite units such as [`Standard`] and
///   [`Prefixed`] compute their symbol and print it through [`Unit::fmt_symbol`]; their `SYMBOL` is empty.
///
/// Named units are declared with `#[derive(Unit)]`:
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
/// #[unit(symbol = "h", dimension = Time, conversion = HourScale)]
/// pub struct Hour;
/// ```
pub trait Unit: 'static {
    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Conversion from this unit to the standard unit of `Dim`.
    type Conversion: Conversion;

    /// Printable symbol.
    const SYMBOL: &'static str;

    /// Writes the symbol of this unit.
    fn fmt_symbol(f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(Self::SYMBOL)
    }

    /// Whether values of this unit print as bare numbers.
    fn is_unitless() -> bool {
        Self::SYMBOL.is_empty()
    }
}

/// Displays the symbol of `U`.
///
/// ```rust
/// use dimensional_core::units::force::Kilonewton;
/// use dimensional_core::unit::symbol;
///
/// assert_eq!(symbol::<Kilonewton>().to_string(), "kN");
/// ```
pub const fn symbol<U: Unit>() -> Symbol<U> {
    Symbol(PhantomData)
}

/// Display adapter returned by [`symbol`].
pub struct Symbol<U>(PhantomData<U>);

impl<U: Unit> Display for Symbol<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        U::fmt_symbol(f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Standard units
// ─────────────────────────────────────────────────────────────────────────────

/// The standard (unscaled) unit of dimension `D`.
///
/// Every dimension has one: the product of the base units raised to the exponents of `D`. Products and quotients
/// of quantities are expressed in it, and its symbol is spelled out from the base-unit symbols:
///
/// ```rust
/// use dimensional_core::quantities::Force;
/// use dimensional_core::unit::{symbol, Standard};
///
/// assert_eq!(symbol::<Standard<Force>>().to_string(), "kg·m·s^-2");
/// ```
pub struct Standard<D>(PhantomData<D>);

impl<D: Dimension> Unit for Standard<D> {
    type Dim = D;
    type Conversion = Identity;
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> fmt::Result {
        <D::Canonical as TermList>::fmt_terms(f, Notation::Unit)
    }

    fn is_unitless() -> bool {
        <D::Canonical as TermList>::LEN == 0
    }
}

impl<D> Clone for Standard<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Standard<D> {}

impl<D> PartialEq for Standard<D> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<D: Dimension> Debug for Standard<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Standard({})", symbol::<Self>())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Prefixed units
// ─────────────────────────────────────────────────────────────────────────────

/// Unit `U` scaled by the magnitude prefix `P`: `Prefixed<Meter, Kilo>` is the kilometre.
///
/// The prefix is applied on top of `U`'s own conversion, so prefixing a scaled unit works too.
pub struct Prefixed<U, P>(PhantomData<(U, P)>);

impl<U: Unit, P: Prefix> Unit for Prefixed<U, P> {
    type Dim = U::Dim;
    type Conversion = Compose<P, U::Conversion>;
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(P::PREFIX)?;
        U::fmt_symbol(f)
    }

    fn is_unitless() -> bool {
        false
    }
}

impl<U, P> Clone for Prefixed<U, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U, P> Copy for Prefixed<U, P> {}

impl<U, P> PartialEq for Prefixed<U, P> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<U: Unit, P: Prefix> Debug for Prefixed<U, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Prefixed({})", symbol::<Self>())
    }
}
