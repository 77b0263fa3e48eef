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
use crate::{Dimension, Quantity, Unit};

/// Declares that a rate of this dimension accumulated over `Rhs` yields
/// `Output`, e.g. a temperature lapse over a length is a temperature.
pub trait Integral<Rhs: Dimension>: Dimension {
    type Output: Dimension;
}

/// Multiply the canonical magnitudes of a rate and an extent and read the
/// product as the declared output dimension, presented in `C`.
///
/// The product is a difference, not a reading on a scale, so `C` must not be
/// an affine unit: ask for kelvin, not celsius, and add the result to an
/// absolute value. Debug builds panic on an affine `C`.
///
/// Only pairs with an `Integral` declaration are accepted:
///
/// ```compile_fail
/// use absolute_unit::{integrate, kelvin, pascals, Kelvin, Pascals};
/// let _ = integrate::<Pascals, Kelvin, Kelvin>(pascals!(1), kelvin!(1));
/// ```
pub fn integrate<A, B, C>(rate: Quantity<A>, extent: Quantity<B>) -> Quantity<C>
where
    A: Unit,
    B: Unit,
    C: Unit,
    A::Dimension: Integral<B::Dimension, Output = C::Dimension>,
{
    debug_assert!(
        C::CANONICAL_OFFSET == 0.,
        "integrate into {}, an affine unit",
        C::UNIT_NAME
    );
    Quantity::from_canonical(rate.canonical() * extent.canonical())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        celsius, dimension, feet, kelvins_per_kilometer, kelvins_per_meter, meters, Celsius, Kelvin,
        KelvinsPerMeter, Meters,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lapse_over_length() {
        let delta = integrate::<_, _, Kelvin>(kelvins_per_meter!(0.0065), meters!(1_000));
        assert_abs_diff_eq!(delta.f64(), 6.5, epsilon = 1e-12);
    }

    #[test]
    fn test_integrate_works_in_canonical_units() {
        let delta = integrate::<_, _, Kelvin>(kelvins_per_kilometer!(6.5), feet!(1_000));
        assert_abs_diff_eq!(delta.f64(), 1.9812, epsilon = 1e-9);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_affine_output_is_rejected() {
        let _ = integrate::<_, _, Celsius>(kelvins_per_meter!(0.0065), meters!(1_000));
    }

    #[test]
    fn test_delta_adds_to_affine_temperature() {
        let delta = integrate::<_, _, Kelvin>(kelvins_per_meter!(0.0065), meters!(1_000));
        assert_abs_diff_eq!(celsius!(15) - delta, celsius!(8.5), epsilon = 1e-9);
    }

    #[test]
    fn test_declared_output_matches_base_units() {
        let product = kelvins_per_meter!(1).as_dyn() * meters!(1).as_dyn();
        assert!(product.is_dimension::<<dimension::TemperatureLapse as Integral<
            dimension::Length,
        >>::Output>());
        let _: Quantity<Kelvin> = integrate::<KelvinsPerMeter, Meters, Kelvin>(
            kelvins_per_meter!(1),
            meters!(1),
        );
    }
}
