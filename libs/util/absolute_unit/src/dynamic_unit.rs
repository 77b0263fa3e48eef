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
use crate::{BaseUnit, Dimension, InvalidArgument, Quantity, Scalar, Significant, Unit};
use hashbag::HashBag;
use std::{
    any::TypeId,
    ops::{Div, Mul},
};

/// A canonical magnitude whose base units are tracked at runtime.
///
/// Formulas that run through several dimensions on the way to an answer
/// lift their terms in here with `as_dyn`, combine them freely, and come back
/// out through `into_quantity` or `into_scalar`, which check that what is
/// left over is exactly the dimension asked for.
///
/// Dimensionless dimensions other than `Scalar`, like relative humidity, have
/// no base units to tell them apart, so they are tagged by type instead. Any
/// combination with another dimension drops the tag.
#[derive(Default, Debug, Clone)]
pub struct DynamicUnits {
    numerator: HashBag<BaseUnit>,
    denominator: HashBag<BaseUnit>,
    tag: Option<(TypeId, &'static str)>,
    v: Significant,
}

impl DynamicUnits {
    pub fn new<D: Dimension>(v: Significant) -> Self {
        Self {
            numerator: D::NUMERATOR.iter().copied().collect(),
            denominator: D::DENOMINATOR.iter().copied().collect(),
            tag: Self::tag_of::<D>(),
            v,
        }
    }

    fn tag_of<D: Dimension>() -> Option<(TypeId, &'static str)> {
        let tagged = D::NUMERATOR.is_empty()
            && D::DENOMINATOR.is_empty()
            && TypeId::of::<D>() != TypeId::of::<crate::dimension::Scalar>();
        tagged.then(|| (TypeId::of::<D>(), D::DIMENSION_NAME))
    }

    pub fn significant(&self) -> Significant {
        self.v
    }

    pub fn f64(&self) -> f64 {
        self.v.f64()
    }

    pub fn is_dimension<D: Dimension>(&self) -> bool {
        let numerator: HashBag<BaseUnit> = D::NUMERATOR.iter().copied().collect();
        let denominator: HashBag<BaseUnit> = D::DENOMINATOR.iter().copied().collect();
        let tag = Self::tag_of::<D>().map(|(id, _)| id);
        self.numerator == numerator
            && self.denominator == denominator
            && self.tag.map(|(id, _)| id) == tag
    }

    /// True only for plain scalars, not for tagged ratios like humidity.
    pub fn is_dimensionless(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty() && self.tag.is_none()
    }

    pub fn into_scalar(self) -> Result<Scalar, InvalidArgument> {
        if !self.is_dimensionless() {
            let expected = <crate::dimension::Scalar as Dimension>::DIMENSION_NAME;
            return Err(self.mismatch(expected));
        }
        Ok(Scalar::from(self.v))
    }

    pub fn into_quantity<U: Unit>(self) -> Result<Quantity<U>, InvalidArgument> {
        if !self.is_dimension::<U::Dimension>() {
            return Err(self.mismatch(<U::Dimension as Dimension>::DIMENSION_NAME));
        }
        Ok(Quantity::from_canonical(self.v))
    }

    /// Every base unit must appear an even number of times.
    pub fn sqrt(self) -> Result<Self, InvalidArgument> {
        Ok(Self {
            numerator: Self::halve(&self.numerator).ok_or_else(|| self.mismatch("square"))?,
            denominator: Self::halve(&self.denominator).ok_or_else(|| self.mismatch("square"))?,
            tag: None,
            v: self.v.sqrt(),
        })
    }

    fn halve(bag: &HashBag<BaseUnit>) -> Option<HashBag<BaseUnit>> {
        let mut out = HashBag::new();
        for (unit, count) in bag.set_iter() {
            if count % 2 != 0 {
                return None;
            }
            for _ in 0..count / 2 {
                out.insert(*unit);
            }
        }
        Some(out)
    }

    fn cancel(mut self) -> Self {
        let numerator = self.numerator.iter().copied().collect::<Vec<_>>();
        for unit in numerator {
            if self.denominator.remove(&unit) > 0 {
                self.numerator.remove(&unit);
            }
        }
        self
    }

    // Scaling a tagged value by a plain scalar keeps the tag; anything else drops it.
    fn combined_tag(&self, rhs: &Self, is_mul: bool) -> Option<(TypeId, &'static str)> {
        if rhs.is_dimensionless() {
            self.tag
        } else if is_mul && self.is_dimensionless() {
            rhs.tag
        } else {
            None
        }
    }

    fn mismatch(&self, expected: &str) -> InvalidArgument {
        let found = match self.tag {
            Some((_, name)) => name.to_owned(),
            None => format!(
                "{:?} / {:?}",
                self.numerator.iter().collect::<Vec<_>>(),
                self.denominator.iter().collect::<Vec<_>>()
            ),
        };
        InvalidArgument::new("units", format!("expected {}, found {}", expected, found))
    }
}

impl Mul<DynamicUnits> for DynamicUnits {
    type Output = DynamicUnits;

    fn mul(mut self, rhs: DynamicUnits) -> Self::Output {
        self.tag = self.combined_tag(&rhs, true);
        for unit in rhs.numerator.iter() {
            self.numerator.insert(*unit);
        }
        for unit in rhs.denominator.iter() {
            self.denominator.insert(*unit);
        }
        self.v *= rhs.v;
        self.cancel()
    }
}

impl Div<DynamicUnits> for DynamicUnits {
    type Output = DynamicUnits;

    fn div(mut self, rhs: DynamicUnits) -> Self::Output {
        self.tag = self.combined_tag(&rhs, false);
        for unit in rhs.numerator.iter() {
            self.denominator.insert(*unit);
        }
        for unit in rhs.denominator.iter() {
            self.numerator.insert(*unit);
        }
        self.v /= rhs.v;
        self.cancel()
    }
}

impl Mul<Scalar> for DynamicUnits {
    type Output = DynamicUnits;

    fn mul(mut self, rhs: Scalar) -> Self::Output {
        self.v *= rhs.significant();
        self
    }
}

#[cfg(test)]
mod test {
    use crate::{
        dimension, humidity_percent, humidity_ratio, joules_per_kilogram_kelvin, kelvin,
        kilograms_per_meter3, meters, meters_per_second, pascals, scalar, HumidityPercent,
        HumidityRatio, KilogramsPerMeter3, Pascals,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cancels_to_density() {
        let p = pascals!(101_325);
        let r = joules_per_kilogram_kelvin!(287.0528);
        let t = kelvin!(288.15);
        let rho = (p.as_dyn() / (r.as_dyn() * t.as_dyn()))
            .into_quantity::<KilogramsPerMeter3>()
            .unwrap();
        assert_abs_diff_eq!(rho, kilograms_per_meter3!(1.225), epsilon = 0.000_1);
    }

    #[test]
    fn test_mismatch_is_invalid_argument() {
        let wrong = (meters!(3).as_dyn() * kelvin!(2).as_dyn()).into_quantity::<Pascals>();
        let err = wrong.unwrap_err();
        assert_eq!(err.name(), "units");
        assert!(meters!(3).as_dyn().into_scalar().is_err());
    }

    #[test]
    fn test_scalar_is_not_humidity() {
        let ratio = meters!(3).as_dyn() / meters!(1).as_dyn();
        let err = ratio.into_quantity::<HumidityPercent>().unwrap_err();
        assert_eq!(err.name(), "units");
        assert!(humidity_percent!(40).as_dyn().into_scalar().is_err());
        assert!(!humidity_percent!(40).as_dyn().is_dimensionless());
    }

    #[test]
    fn test_humidity_survives_scaling() {
        let rh = (humidity_percent!(40).as_dyn() * scalar!(2))
            .into_quantity::<HumidityRatio>()
            .unwrap();
        assert_abs_diff_eq!(rh, humidity_ratio!(0.8), epsilon = 1e-12);
        let rh = (humidity_percent!(40).as_dyn() / scalar!(2).as_dyn())
            .into_quantity::<HumidityPercent>()
            .unwrap();
        assert_abs_diff_eq!(rh, humidity_percent!(20), epsilon = 1e-12);
        let squared = humidity_percent!(40).as_dyn() * humidity_percent!(40).as_dyn();
        assert!(squared.clone().into_quantity::<HumidityRatio>().is_err());
        assert!(squared.into_scalar().is_ok());
    }

    #[test]
    fn test_ratio_is_scalar() {
        let s = (meters!(10).as_dyn() / meters!(4).as_dyn()).into_scalar().unwrap();
        assert_abs_diff_eq!(s.f64(), 2.5);
        assert!((meters!(1).as_dyn() / meters!(1).as_dyn()).is_dimension::<dimension::Scalar>());
    }

    #[test]
    fn test_sqrt() {
        let r = joules_per_kilogram_kelvin!(287.0528);
        let t = kelvin!(288.15);
        let c = (r.as_dyn() * t.as_dyn() * scalar!(1.4))
            .sqrt()
            .unwrap()
            .into_quantity::<crate::MetersPerSecond>()
            .unwrap();
        assert_abs_diff_eq!(c, meters_per_second!(340.294), epsilon = 0.001);
        assert!(t.as_dyn().sqrt().is_err());
    }
}
