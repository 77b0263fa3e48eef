// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use crate::{
    supports_value_type_conversion, Dimension, DynamicUnits, InvalidArgument, Scalar, Significant,
};
use approx::{AbsDiffEq, RelativeEq};
use std::{
    fmt,
    fmt::Debug,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A named way of writing down a quantity of some dimension.
pub trait Unit: Copy + Debug + Default + Eq + Ord + 'static {
    type Dimension: Dimension;

    const UNIT_NAME: &'static str;
    const UNIT_SHORT_NAME: &'static str;
    const UNIT_SUFFIX: &'static str;

    /// Canonical units in one of this unit.
    const CANONICAL_IN_UNIT: f64;
    /// Canonical value of this unit's zero; only affine units set this.
    const CANONICAL_OFFSET: f64 = 0.;

    fn to_canonical(v: Significant) -> Significant {
        let scaled = v * Significant::exact(Self::CANONICAL_IN_UNIT);
        if Self::CANONICAL_OFFSET == 0. {
            return scaled;
        }
        scaled + Significant::exact(Self::CANONICAL_OFFSET)
    }

    fn from_canonical(v: Significant) -> Significant {
        let scale = Significant::exact(Self::CANONICAL_IN_UNIT);
        if Self::CANONICAL_OFFSET == 0. {
            return v / scale;
        }
        (v - Significant::exact(Self::CANONICAL_OFFSET)) / scale
    }
}

/// A measurement of `U::Dimension`, presented in `U`.
///
/// The magnitude is held in the dimension's canonical unit, so any two units
/// of one dimension add, subtract and compare directly. Different dimensions
/// do not:
///
/// ```compile_fail
/// use absolute_unit::{celsius, pascals};
/// let _ = celsius!(15) + pascals!(101_325);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Quantity<U: Unit> {
    v: Significant, // canonical
    phantom: PhantomData<U>,
}

impl<U: Unit> Quantity<U> {
    pub(crate) fn from_canonical(v: Significant) -> Self {
        Self {
            v,
            phantom: PhantomData,
        }
    }

    pub fn canonical(&self) -> Significant {
        self.v
    }

    /// The value in `U`.
    pub fn significant(&self) -> Significant {
        U::from_canonical(self.v)
    }

    pub fn f64(self) -> f64 {
        f64::from(self)
    }

    pub fn f32(self) -> f32 {
        f32::from(self)
    }

    pub fn is_finite(&self) -> bool {
        self.v.is_finite()
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new::<U::Dimension>(self.v)
    }

    /// Check that this quantity can stand in for the argument `name`.
    pub fn require(self, name: &'static str) -> Result<Self, InvalidArgument> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(InvalidArgument::new(
                name,
                format!(
                    "no {} value given in {}",
                    <U::Dimension as Dimension>::DIMENSION_NAME,
                    U::UNIT_NAME
                ),
            ))
        }
    }
}

impl<U> fmt::Display for Quantity<U>
where
    U: Unit,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.significant(), f)?;
        write!(f, "{}", U::UNIT_SUFFIX)
    }
}

impl<'a, A, B> From<&'a Quantity<B>> for Quantity<A>
where
    A: Unit,
    B: Unit<Dimension = A::Dimension>,
{
    fn from(v: &'a Quantity<B>) -> Self {
        Self::from_canonical(v.v)
    }
}

impl<U> TryFrom<Option<f64>> for Quantity<U>
where
    U: Unit,
{
    type Error = InvalidArgument;

    fn try_from(v: Option<f64>) -> Result<Self, Self::Error> {
        match v {
            Some(v) => Self::from(v).require("value"),
            None => {
                let dimension = <U::Dimension as Dimension>::DIMENSION_NAME;
                Err(InvalidArgument::new(
                    "value",
                    format!("no {} value given", dimension),
                ))
            }
        }
    }
}

impl<U> AbsDiffEq for Quantity<U>
where
    U: Unit,
{
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.f64().abs_diff_eq(&other.f64(), epsilon)
    }
}

impl<U> RelativeEq for Quantity<U>
where
    U: Unit,
{
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.f64().relative_eq(&other.f64(), epsilon, max_relative)
    }
}

/// Linear ops are defined between all units of a dimension.
impl<A, B> Add<Quantity<B>> for Quantity<A>
where
    A: Unit,
    B: Unit<Dimension = A::Dimension>,
{
    type Output = Quantity<A>;

    fn add(self, rhs: Quantity<B>) -> Self::Output {
        Self::from_canonical(self.v + rhs.v)
    }
}

impl<A, B> AddAssign<Quantity<B>> for Quantity<A>
where
    A: Unit,
    B: Unit<Dimension = A::Dimension>,
{
    fn add_assign(&mut self, rhs: Quantity<B>) {
        self.v += rhs.v;
    }
}

impl<A, B> Sub<Quantity<B>> for Quantity<A>
where
    A: Unit,
    B: Unit<Dimension = A::Dimension>,
{
    type Output = Quantity<A>;

    fn sub(self, rhs: Quantity<B>) -> Self::Output {
        Self::from_canonical(self.v - rhs.v)
    }
}

impl<A, B> SubAssign<Quantity<B>> for Quantity<A>
where
    A: Unit,
    B: Unit<Dimension = A::Dimension>,
{
    fn sub_assign(&mut self, rhs: Quantity<B>) {
        self.v -= rhs.v;
    }
}

impl<A, B> Div<Quantity<B>> for Quantity<A>
where
    A: Unit,
    B: Unit<Dimension = A::Dimension>,
{
    type Output = Scalar;

    fn div(self, rhs: Quantity<B>) -> Self::Output {
        Scalar::from(self.v / rhs.v)
    }
}

impl<U> Neg for Quantity<U>
where
    U: Unit,
{
    type Output = Quantity<U>;

    fn neg(self) -> Self::Output {
        Self::from_canonical(-self.v)
    }
}

/// Scaling happens on the canonical magnitude, so for an affine unit like
/// celsius this scales the absolute temperature, not the celsius reading.
impl<U> Mul<Scalar> for Quantity<U>
where
    U: Unit,
{
    type Output = Quantity<U>;

    fn mul(self, s: Scalar) -> Self::Output {
        Self::from_canonical(self.v * s.significant())
    }
}

impl<U> Mul<Quantity<U>> for Scalar
where
    U: Unit,
{
    type Output = Quantity<U>;

    fn mul(self, q: Quantity<U>) -> Self::Output {
        Quantity::from_canonical(q.v * self.significant())
    }
}

impl<U> MulAssign<Scalar> for Quantity<U>
where
    U: Unit,
{
    fn mul_assign(&mut self, s: Scalar) {
        self.v *= s.significant();
    }
}

impl<U> Div<Scalar> for Quantity<U>
where
    U: Unit,
{
    type Output = Quantity<U>;

    fn div(self, s: Scalar) -> Self::Output {
        Self::from_canonical(self.v / s.significant())
    }
}

impl<U> DivAssign<Scalar> for Quantity<U>
where
    U: Unit,
{
    fn div_assign(&mut self, s: Scalar) {
        self.v /= s.significant();
    }
}

impl<U> From<Significant> for Quantity<U>
where
    U: Unit,
{
    fn from(v: Significant) -> Self {
        Self::from_canonical(U::to_canonical(v))
    }
}

impl<U> From<&Significant> for Quantity<U>
where
    U: Unit,
{
    fn from(v: &Significant) -> Self {
        Self::from_canonical(U::to_canonical(*v))
    }
}

impl<U> From<Quantity<U>> for Significant
where
    U: Unit,
{
    fn from(v: Quantity<U>) -> Significant {
        v.significant()
    }
}

macro_rules! impl_quantity_for_numeric_type {
    ($Num:ty) => {
        impl<U> From<$Num> for Quantity<U>
        where
            U: Unit,
        {
            fn from(v: $Num) -> Self {
                Self::from_canonical(U::to_canonical(Significant::from(v)))
            }
        }

        impl<U> From<&$Num> for Quantity<U>
        where
            U: Unit,
        {
            fn from(v: &$Num) -> Self {
                Self::from_canonical(U::to_canonical(Significant::from(*v)))
            }
        }

        impl<U> From<Quantity<U>> for $Num
        where
            U: Unit,
        {
            fn from(v: Quantity<U>) -> $Num {
                v.significant().f64() as $Num
            }
        }
    };
}
supports_value_type_conversion!(impl_quantity_for_numeric_type);

#[cfg(test)]
mod test {
    use crate::{
        celsius, kelvin, kelvins_per_meter, kilograms_per_mole, meters, pascals, scalar, Celsius,
        InvalidArgument, Kelvin, Meters, Quantity, Significant,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_canonical_is_shared_between_units() {
        let c = celsius!(15);
        assert_abs_diff_eq!(c.canonical().f64(), 288.15, epsilon = 1e-12);
        assert_abs_diff_eq!(kelvin!(c).f64(), 288.15, epsilon = 1e-12);
        assert_eq!(kelvin!(c), kelvin!(288.15));
    }

    #[test]
    fn test_conversion_keeps_digits() {
        let lapse = kelvins_per_meter!(Significant::exact(0.0065));
        assert!(lapse.canonical().is_exact());
        assert!(lapse.significant().is_exact());
        let m = kilograms_per_mole!(Significant::from(1.2345e-18));
        assert_eq!(m.canonical().digits(), 5);
        assert_eq!(m.significant().digits(), 5);
        // 288.65, known to the tenth
        assert_eq!(celsius!(15.5).canonical().digits(), 4);
    }

    #[test]
    fn test_mixed_unit_arithmetic() {
        let t = celsius!(15) - kelvin!(6.5);
        assert_abs_diff_eq!(t, celsius!(8.5), epsilon = 1e-9);
        let mut t = kelvin!(200);
        t += celsius!(-273.15);
        assert_abs_diff_eq!(t, kelvin!(200), epsilon = 1e-9);
        assert!(kelvin!(celsius!(1)) > kelvin!(274));
    }

    #[test]
    fn test_scalar_ops() {
        let p = pascals!(1_000) * scalar!(2.5);
        assert_abs_diff_eq!(p, pascals!(2_500));
        let p = scalar!(2) * p / scalar!(5);
        assert_abs_diff_eq!(p, pascals!(1_000));
        assert_abs_diff_eq!((pascals!(300) / pascals!(100)).f64(), 3.);
        assert_abs_diff_eq!(-meters!(3), meters!(-3));
    }

    #[test]
    fn test_absent_value() {
        let err = Quantity::<Meters>::try_from(None::<f64>).unwrap_err();
        assert_eq!(err.name(), "value");
        assert!(Quantity::<Kelvin>::try_from(Some(f64::NAN)).is_err());
        let t = Quantity::<Celsius>::try_from(Some(15f64)).unwrap();
        assert_abs_diff_eq!(t, celsius!(15));
    }

    #[test]
    fn test_require() {
        assert!(meters!(10).require("altitude").is_ok());
        let err: InvalidArgument = meters!(f64::INFINITY).require("altitude").unwrap_err();
        assert_eq!(err.name(), "altitude");
        println!("{}", err);
    }

    #[test]
    fn test_display_uses_significant_digits() {
        assert_eq!(format!("{}", pascals!(611.21)), "611.21Pa");
        assert_eq!(format!("{}", pascals!(2.5) * scalar!(3.14159)), "7.9Pa");
    }
}
