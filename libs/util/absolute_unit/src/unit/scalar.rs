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
use crate::{DynamicUnits, Significant};
use num_traits::{One, Zero};
use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Scalar(pub(crate) Significant);

impl Scalar {
    pub fn f64(self) -> f64 {
        self.0.f64()
    }

    pub fn into_inner(self) -> f64 {
        self.0.f64()
    }

    pub fn significant(self) -> Significant {
        self.0
    }

    pub fn as_dyn(&self) -> DynamicUnits {
        DynamicUnits::new::<crate::dimension::Scalar>(self.0)
    }

    pub fn exp(self) -> Self {
        Self(self.0.exp())
    }

    pub fn powf(self, exponent: Scalar) -> Self {
        Self(self.0.powf(exponent.0))
    }

    pub fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub<Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div<Scalar> for Scalar {
    type Output = Scalar;

    fn div(self, rhs: Scalar) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Self(Significant::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Scalar {
    fn one() -> Self {
        Self(Significant::one())
    }
}

impl From<Significant> for Scalar {
    fn from(v: Significant) -> Self {
        Scalar(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar(Significant::from(v))
    }
}

#[macro_export]
macro_rules! scalar {
    ($num:expr) => {
        $crate::Scalar::from($crate::Significant::from($num))
    };
}

#[cfg(test)]
mod test {
    use crate::Scalar;
    use approx::assert_abs_diff_eq;
    use num_traits::{One, Zero};

    #[test]
    fn test_scalar_arithmetic() {
        let v = scalar!(1) - scalar!(0.25) * scalar!(2);
        assert_abs_diff_eq!(v.f64(), 0.5);
        assert_abs_diff_eq!((scalar!(2).powf(scalar!(10)) / scalar!(4)).f64(), 256.);
        assert_abs_diff_eq!(scalar!(0).exp().f64(), 1.);
        assert_eq!(Scalar::one() + Scalar::zero(), scalar!(1));
    }
}
