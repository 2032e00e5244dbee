//! Quantity type and its implementations.

use crate::conversion::Conversion;
use crate::dimension::{Dimension, DivDim, MulDim, SameDimension};
use crate::list::{Concat, NegateTerms, Negated};
use crate::scalar::Real;
use crate::unit::{symbol, Standard, Unit};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::marker::PhantomData;
use core::ops::*;

/// A quantity with a specific unit.
///
/// `Quantity<U, T>` wraps a value of the floating-point type `T` (by default `f64`) together with phantom type
/// information about its unit `U`. This enables compile-time dimensional analysis while maintaining zero runtime
/// cost.
///
/// Quantities of equal dimensions combine freely: the right operand of `+` and `-` is converted into the unit of
/// the left operand. Products and quotients are computed in the standard scale and expressed in the
/// [`Standard`] unit of the resulting dimension.
///
/// # Examples
///
/// ```rust
/// use dimensional_core::units::length::{Centimeters, Meter, Meters};
///
/// let x = Meters::new(1.5);
/// let y = Centimeters::new(20.0);
/// let sum = x + y;
/// assert!((sum.value() - 1.7_f64).abs() < 1e-12);
/// assert!((y.to::<Meter>().value() - 0.2_f64).abs() < 1e-12);
/// ```
///
/// Mixing dimensions is rejected at compile time:
///
/// ```compile_fail
/// use dimensional_core::units::length::Meters;
/// use dimensional_core::units::time::Seconds;
///
/// let _ = Meters::new(1.0) + Seconds::new(1.0);
/// ```
///
/// Both operands of `+` and `-` share the numeric type `T`; use [`cast`](Self::cast) to align them:
///
/// ```rust
/// use dimensional_core::units::length::Centimeters;
///
/// let sum = Centimeters::new(1.5_f64) + Centimeters::new(2.5_f32).cast();
/// assert_eq!(sum, Centimeters::new(4.0));
/// ```
pub struct Quantity<U: Unit, T: Real = f64>(T, PhantomData<U>);

impl<U: Unit, T: Real> Quantity<U, T> {
    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use dimensional_core::units::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value, expressed in `U`.
    #[inline]
    pub fn value(self) -> T {
        self.0
    }

    /// Mutable access to the raw value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Replaces the raw value.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.0 = value;
    }

    /// Consumes the quantity and returns the raw value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Returns the value expressed in the standard unit of the dimension.
    ///
    /// ```rust
    /// use dimensional_core::units::temperature::DegreesCelsius;
    ///
    /// let boiling = DegreesCelsius::new(100.0);
    /// assert!((boiling.standard_value() - 373.15_f64).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn standard_value(self) -> T {
        U::Conversion::to_standard(self.0)
    }

    /// Converts into the standard unit of the dimension.
    #[inline]
    pub fn to_standard(self) -> Quantity<Standard<U::Dim>, T> {
        Quantity::new(self.standard_value())
    }

    /// Builds a quantity from a value in the standard unit of the dimension.
    ///
    /// ```rust
    /// use dimensional_core::units::time::Minutes;
    ///
    /// assert_eq!(Minutes::from_standard(90.0).value(), 1.5);
    /// ```
    #[inline]
    pub fn from_standard(value: T) -> Self {
        Self::new(U::Conversion::from_standard(value))
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// ```rust
    /// use dimensional_core::units::time::{Hour, Minutes};
    ///
    /// let m = Minutes::new(90.0);
    /// assert_eq!(m.to::<Hour>().value(), 1.5);
    /// ```
    ///
    /// Units of another dimension are rejected:
    ///
    /// ```compile_fail
    /// use dimensional_core::units::time::Minutes;
    /// use dimensional_core::units::mass::Kilogram;
    ///
    /// let _ = Minutes::new(1.0).to::<Kilogram>();
    /// ```
    #[inline]
    pub fn to<V>(self) -> Quantity<V, T>
    where
        V: Unit,
        V::Dim: SameDimension<U::Dim>,
    {
        Quantity::new(V::Conversion::from_standard(self.standard_value()))
    }

    /// Changes the numeric type, keeping the unit.
    ///
    /// ```rust
    /// use dimensional_core::units::length::Meters;
    ///
    /// let narrow: Meters<f32> = Meters::new(2.5_f64).cast();
    /// assert_eq!(narrow.value(), 2.5_f32);
    /// ```
    #[inline]
    pub fn cast<T2: Real>(self) -> Quantity<U, T2> {
        Quantity::new(T2::from_f64(self.0.into_f64()))
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Returns the minimum of this quantity and another.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the maximum of this quantity and another.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Standard traits
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, T: Real> Clone for Quantity<U, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, T: Real> Copy for Quantity<U, T> {}

impl<U: Unit, T: Real> Default for Quantity<U, T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<U: Unit, T: Real> PartialEq for Quantity<U, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Unit, T: Real> PartialOrd for Quantity<U, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<U: Unit, T: Real> Debug for Quantity<U, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({:?} {})", self.0, symbol::<U>())
    }
}

impl<U: Unit, T: Real> Display for Quantity<U, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)?;
        if U::is_unitless() {
            return Ok(());
        }
        f.write_str(" ")?;
        U::fmt_symbol(f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U, V, T> Add<Quantity<V, T>> for Quantity<U, T>
where
    U: Unit,
    V: Unit,
    T: Real,
    U::Dim: SameDimension<V::Dim>,
{
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<V, T>) -> Self {
        Self::new(self.0 + rhs.to::<U>().0)
    }
}

impl<U, V, T> AddAssign<Quantity<V, T>> for Quantity<U, T>
where
    U: Unit,
    V: Unit,
    T: Real,
    U::Dim: SameDimension<V::Dim>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<V, T>) {
        self.0 = self.0 + rhs.to::<U>().0;
    }
}

impl<U, V, T> Sub<Quantity<V, T>> for Quantity<U, T>
where
    U: Unit,
    V: Unit,
    T: Real,
    U::Dim: SameDimension<V::Dim>,
{
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<V, T>) -> Self {
        Self::new(self.0 - rhs.to::<U>().0)
    }
}

impl<U, V, T> SubAssign<Quantity<V, T>> for Quantity<U, T>
where
    U: Unit,
    V: Unit,
    T: Real,
    U::Dim: SameDimension<V::Dim>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<V, T>) {
        self.0 = self.0 - rhs.to::<U>().0;
    }
}

impl<U, V, T> Mul<Quantity<V, T>> for Quantity<U, T>
where
    U: Unit,
    V: Unit,
    T: Real,
    <U::Dim as Dimension>::Terms: Concat<<V::Dim as Dimension>::Terms>,
    MulDim<U::Dim, V::Dim>: Dimension,
{
    type Output = Quantity<Standard<MulDim<U::Dim, V::Dim>>, T>;
    #[inline]
    fn mul(self, rhs: Quantity<V, T>) -> Self::Output {
        Quantity::new(self.standard_value() * rhs.standard_value())
    }
}

impl<U, V, T> Div<Quantity<V, T>> for Quantity<U, T>
where
    U: Unit,
    V: Unit,
    T: Real,
    <V::Dim as Dimension>::Terms: NegateTerms,
    <U::Dim as Dimension>::Terms: Concat<Negated<<V::Dim as Dimension>::Terms>>,
    DivDim<U::Dim, V::Dim>: Dimension,
{
    type Output = Quantity<Standard<DivDim<U::Dim, V::Dim>>, T>;
    #[inline]
    fn div(self, rhs: Quantity<V, T>) -> Self::Output {
        Quantity::new(self.standard_value() / rhs.standard_value())
    }
}

impl<U: Unit, T: Real> MulAssign<T> for Quantity<U, T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0 = self.0 * rhs;
    }
}

impl<U: Unit, T: Real> DivAssign<T> for Quantity<U, T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0 = self.0 / rhs;
    }
}

impl<U: Unit, T: Real> Neg for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// Scalar operands are implemented per concrete float type: a blanket `Mul<T>` would overlap with the
// quantity-by-quantity product.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<U: Unit> Mul<$t> for Quantity<U, $t> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    Self::new(self.0 * rhs)
                }
            }

            impl<U: Unit> Mul<Quantity<U, $t>> for $t {
                type Output = Quantity<U, $t>;
                #[inline]
                fn mul(self, rhs: Quantity<U, $t>) -> Self::Output {
                    rhs * self
                }
            }

            impl<U: Unit> Div<$t> for Quantity<U, $t> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Self::new(self.0 / rhs)
                }
            }

            impl<U: Unit> PartialEq<$t> for Quantity<U, $t> {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.0 == *other
                }
            }

            impl<U: Unit> From<$t> for Quantity<U, $t> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{Area, Force, Velocity};
    use crate::units::force::{Kilonewton, Newton, Newtons};
    use crate::units::length::{Centimeters, Kilometer, Kilometers, Meter, Meters};
    use crate::units::mass::{Grams, Kilograms};
    use crate::units::ratio::{Decibels, Unitless};
    use crate::units::temperature::{Celsius, DegreesCelsius, DegreesFahrenheit, Kelvin, Kelvins};
    use crate::units::time::{Hours, Minutes, Second, Seconds};
    use crate::units::velocity::{KilometersPerHour, MetersPerSecond};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and access
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn accessors() {
        let mut q = Meters::new(1.0);
        assert_eq!(q.value(), 1.0);
        *q.value_mut() += 2.0;
        assert_eq!(q.value(), 3.0);
        q.set_value(-4.0);
        assert_eq!(q.into_inner(), -4.0);
        assert_eq!(Meters::from(7.0).value(), 7.0);
        assert_eq!(Meters::<f64>::default().value(), 0.0);
    }

    #[test]
    fn abs_min_max() {
        let a = Meters::new(-3.0);
        let b = Meters::new(5.0);
        assert_eq!(a.abs().value(), 3.0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert!(a < b);
    }

    #[test]
    fn cast_changes_precision() {
        let q: Meters<f32> = Meters::new(1.25_f64).cast();
        assert_eq!(q.value(), 1.25_f32);
        let back: Meters = q.cast();
        assert_eq!(back.value(), 1.25);
    }

    #[test]
    fn cast_aligns_precision_before_adding() {
        let sum = Centimeters::new(168.0_f64) + Centimeters::new(15.0_f32).cast();
        assert_eq!(sum.value(), 183.0);
        let narrow = Centimeters::new(15.0_f32) + Centimeters::new(168.0_f64).cast();
        assert_eq!(narrow.value(), 183.0_f32);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ratio_conversion() {
        assert_abs_diff_eq!(Kilometers::new(1.25).to::<Meter>().value(), 1250.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Hours::new(2.0).to::<Second>().value(), 7200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Grams::new(1500.0).to_standard().value(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn linear_conversion() {
        assert_abs_diff_eq!(DegreesCelsius::new(0.0).to::<Kelvin>().value(), 273.15, epsilon = 1e-9);
        assert_abs_diff_eq!(DegreesFahrenheit::new(212.0).to::<Celsius>().value(), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Kelvins::new(0.0).to::<Celsius>().value(), -273.15, epsilon = 1e-9);
    }

    #[test]
    fn logarithmic_conversion() {
        assert_abs_diff_eq!(Decibels::new(30.0).to::<Unitless>().value(), 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Decibels::from_standard(100.0).value(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn conversion_to_equivalent_dimension_spelled_differently() {
        let v = KilometersPerHour::new(36.0);
        assert_abs_diff_eq!(v.to::<Standard<Velocity>>().value(), 10.0, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn addition_converts_rhs_into_lhs_unit() {
        let sum = Centimeters::new(168.0) + Centimeters::new(15.0);
        assert_abs_diff_eq!(sum.value(), 183.0);
        let mixed = Meters::new(1.0) + Centimeters::new(50.0);
        assert_abs_diff_eq!(mixed.value(), 1.5, epsilon = 1e-12);
        let mixed = Centimeters::new(50.0) + Meters::new(1.0);
        assert_abs_diff_eq!(mixed.value(), 150.0, epsilon = 1e-9);
    }

    #[test]
    fn subtraction_and_assignment() {
        let mut t = Minutes::new(10.0);
        t -= Seconds::new(30.0);
        assert_abs_diff_eq!(t.value(), 9.5, epsilon = 1e-12);
        t += Hours::new(1.0);
        assert_abs_diff_eq!(t.value(), 69.5, epsilon = 1e-9);
        assert_abs_diff_eq!((Minutes::new(2.0) - Seconds::new(60.0)).value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn addition_accepts_composed_dimension() {
        let f = Newtons::new(2.0);
        let product = Kilograms::new(1.0) * (MetersPerSecond::new(3.0) / Seconds::new(1.0));
        let total = f + product;
        assert_abs_diff_eq!(total.value(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(total.to::<Kilonewton>().value(), 0.005, epsilon = 1e-12);
    }

    #[test]
    fn products_are_standard() {
        let area = Centimeters::new(200.0) * Meters::new(3.0);
        assert_abs_diff_eq!(area.value(), 6.0, epsilon = 1e-12);
        let _: Quantity<Standard<Area>> = Meters::new(1.0) * Meters::new(1.0);
        let force: Quantity<Newton> = (Kilograms::new(2.0) * MetersPerSecond::new(4.0) / Seconds::new(2.0)).to();
        assert_abs_diff_eq!(force.value(), 4.0, epsilon = 1e-12);
        let _: Quantity<Standard<Force>> = force.to_standard();
    }

    #[test]
    fn quotient_converts_back_to_named_unit() {
        let time = (Meters::new(100.0) / MetersPerSecond::new(20.0)).to::<Second>();
        assert_abs_diff_eq!(time.value(), 5.0, epsilon = 1e-12);
        let ratio = Kilometers::new(1.0) / Meters::new(250.0);
        assert_abs_diff_eq!(ratio.to::<Unitless>().value(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn scalar_operations_keep_unit() {
        let m = Kilograms::new(2.0_f64);
        assert_eq!((m * 3.0).value(), 6.0);
        assert_eq!((3.0 * m).value(), 6.0);
        assert_eq!((m / 4.0).value(), 0.5);
        let mut n = m;
        n *= 5.0;
        n /= 2.0;
        assert_eq!(n, 5.0);
        assert_eq!((-m).value(), -2.0);
        let single = Meters::new(2.0_f32) * 2.0_f32;
        assert_eq!(single.value(), 4.0_f32);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_with_symbol() {
        assert_eq!(Meters::new(1.5).to_string(), "1.5 m");
        assert_eq!(Kilometers::new(2.0).to_string(), "2 km");
        assert_eq!(format!("{:.1}", DegreesCelsius::new(21.456)), "21.5 °C");
        assert_eq!((Meters::new(2.0) * Meters::new(3.0)).to_string(), "6 m^2");
        assert_eq!(Quantity::<Unitless>::new(0.25).to_string(), "0.25");
        assert_eq!(Decibels::new(3.0).to_string(), "3 dB");
        assert_eq!(format!("{:?}", Quantity::<Kilometer>::new(1.0)), "Quantity(1.0 km)");
    }

    #[test]
    fn dimensionless_products_print_as_numbers() {
        let ratio = Meters::new(3.0) / Meters::new(2.0);
        assert_eq!(ratio.to_string(), "1.5");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn to_and_back_round_trips(x in -1e9..1e9f64) {
            let there = Meters::new(x).to::<Kilometer>();
            assert_relative_eq!(there.to::<Meter>().value(), x, max_relative = 1e-12);
            let hot = DegreesCelsius::new(x / 1e3).to::<Kelvin>();
            assert_abs_diff_eq!(hot.to::<Celsius>().value(), x / 1e3, epsilon = 1e-6);
        }

        #[test]
        fn mixed_addition_matches_standard_sum(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let sum = Meters::new(a) + Centimeters::new(b);
            assert_relative_eq!(sum.value(), a + b / 100.0, epsilon = 1e-9, max_relative = 1e-12);
        }
    }
}
