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
use num_traits::{One, Zero};
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// The most digits an f64 can carry through a round trip.
pub const MAX_SIGNIFICANT_DIGITS: u8 = 17;

/// A number that remembers how many of its digits were measured.
///
/// The value itself is never rounded while it flows through a computation;
/// only the digit count is carried along, following the usual rules for
/// significant figures. Rounding happens on the way out, in `rounded` and
/// `Display`.
#[derive(Clone, Copy, Debug)]
pub struct Significant {
    v: OrderedFloat<f64>,
    digits: u8,
}

impl Significant {
    /// A defined value, e.g. a conversion factor, that limits nothing.
    pub fn exact(v: f64) -> Self {
        Self::with_digits(v, MAX_SIGNIFICANT_DIGITS)
    }

    pub fn with_digits(v: f64, digits: u8) -> Self {
        Self {
            v: OrderedFloat(v),
            digits: digits.clamp(1, MAX_SIGNIFICANT_DIGITS),
        }
    }

    pub fn f64(self) -> f64 {
        self.v.0
    }

    pub fn f32(self) -> f32 {
        self.v.0 as f32
    }

    pub fn ordered_float(self) -> OrderedFloat<f64> {
        self.v
    }

    pub fn digits(self) -> u8 {
        self.digits
    }

    pub fn is_exact(self) -> bool {
        self.digits == MAX_SIGNIFICANT_DIGITS
    }

    pub fn is_finite(self) -> bool {
        self.v.0.is_finite()
    }

    /// The value rounded to the digits it actually has.
    pub fn rounded(self) -> f64 {
        if self.is_exact() || !self.is_finite() || self.v.0 == 0. {
            return self.v.0;
        }
        let scale = 10f64.powi(self.digits as i32 - 1 - exponent_of(self.v.0));
        (self.v.0 * scale).round() / scale
    }

    pub fn abs(self) -> Self {
        Self::with_digits(self.v.0.abs(), self.digits)
    }

    pub fn exp(self) -> Self {
        Self::with_digits(self.v.0.exp(), self.digits)
    }

    pub fn powf(self, exponent: Significant) -> Self {
        Self::with_digits(
            self.v.0.powf(exponent.v.0),
            self.digits.min(exponent.digits),
        )
    }

    pub fn sqrt(self) -> Self {
        Self::with_digits(self.v.0.sqrt(), self.digits)
    }

    // Power of ten of the last digit we trust.
    fn decimal_place(self) -> i32 {
        exponent_of(self.v.0) - self.digits as i32 + 1
    }

    // A zero operand has no decimal place of its own; it takes the other's.
    fn summed(self, other: Self, v: f64) -> Self {
        if self.is_exact() && other.is_exact() {
            return Self::exact(v);
        }
        let place = match (self.v.0 == 0., other.v.0 == 0.) {
            (true, true) => return Self::with_digits(v, self.digits.min(other.digits)),
            (true, false) => other.decimal_place(),
            (false, true) => self.decimal_place(),
            (false, false) => self.decimal_place().max(other.decimal_place()),
        };
        let digits = (exponent_of(v) - place + 1).clamp(1, MAX_SIGNIFICANT_DIGITS as i32);
        Self::with_digits(v, digits as u8)
    }
}

fn exponent_of(v: f64) -> i32 {
    if v == 0. || !v.is_finite() {
        0
    } else {
        v.abs().log10().floor() as i32
    }
}

// The shortest round-trip form carries no padding, so its digits are exactly
// the ones the author wrote down.
fn digits_in(lower_exp: &str) -> u8 {
    let mantissa = lower_exp.split('e').next().unwrap_or_default();
    let count = mantissa.chars().filter(char::is_ascii_digit).count();
    count.clamp(1, MAX_SIGNIFICANT_DIGITS as usize) as u8
}

impl Default for Significant {
    fn default() -> Self {
        Self::exact(0.)
    }
}

impl PartialEq for Significant {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v
    }
}

impl Eq for Significant {}

impl PartialOrd for Significant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Significant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.v.cmp(&other.v)
    }
}

impl fmt::Display for Significant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.rounded(), f)
    }
}

impl From<f64> for Significant {
    fn from(v: f64) -> Self {
        Self::with_digits(v, digits_in(&format!("{:e}", v)))
    }
}

impl From<f32> for Significant {
    fn from(v: f32) -> Self {
        Self::with_digits(v as f64, digits_in(&format!("{:e}", v)))
    }
}

impl From<Significant> for f64 {
    fn from(v: Significant) -> f64 {
        v.f64()
    }
}

impl From<Significant> for f32 {
    fn from(v: Significant) -> f32 {
        v.f32()
    }
}

macro_rules! impl_significant_for_integer {
    ($Num:ty) => {
        impl From<$Num> for Significant {
            fn from(v: $Num) -> Self {
                Self::exact(v as f64)
            }
        }
    };
}
impl_significant_for_integer!(isize);
impl_significant_for_integer!(i64);
impl_significant_for_integer!(i32);
impl_significant_for_integer!(i16);
impl_significant_for_integer!(i8);

impl Neg for Significant {
    type Output = Self;

    fn neg(self) -> Self {
        Self::with_digits(-self.v.0, self.digits)
    }
}

impl Add for Significant {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.summed(rhs, self.v.0 + rhs.v.0)
    }
}

impl Sub for Significant {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.summed(rhs, self.v.0 - rhs.v.0)
    }
}

impl Mul for Significant {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::with_digits(self.v.0 * rhs.v.0, self.digits.min(rhs.digits))
    }
}

impl Div for Significant {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::with_digits(self.v.0 / rhs.v.0, self.digits.min(rhs.digits))
    }
}

impl AddAssign for Significant {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Significant {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Significant {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Significant {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Zero for Significant {
    fn zero() -> Self {
        Self::exact(0.)
    }

    fn is_zero(&self) -> bool {
        self.v.0 == 0.
    }
}

impl One for Significant {
    fn one() -> Self {
        Self::exact(1.)
    }
}
