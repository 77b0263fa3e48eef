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
use crate::{dimension, Integral, Quantity, Unit};

pub trait TemperatureLapseUnit: Unit<Dimension = dimension::TemperatureLapse> {}
impl<T> TemperatureLapseUnit for T where T: Unit<Dimension = dimension::TemperatureLapse> {}

/// Change in temperature per unit of height, stored in K/m.
pub type TemperatureLapse<Unit> = Quantity<Unit>;

// A lapse accumulated over a height is a temperature difference.
impl Integral<dimension::Length> for dimension::TemperatureLapse {
    type Output = dimension::Temperature;
}

#[cfg(test)]
mod test {
    use crate::{
        feet, integrate, kelvin, kelvins_per_kilometer, kelvins_per_meter, Kelvin, KelvinsPerMeter,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lapse_units() {
        let l = kelvins_per_meter!(0.0065);
        println!("{}", l);
        assert_abs_diff_eq!(kelvins_per_kilometer!(l).f64(), 6.5, epsilon = 1e-12);
        for v in [0., 0.0065, -0.001, 0.0098] {
            assert_abs_diff_eq!(
                kelvins_per_meter!(kelvins_per_kilometer!(kelvins_per_meter!(v))).f64(),
                v,
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_lapse_over_height() {
        // Dry adiabatic lapse over 5000ft
        let delta = integrate::<KelvinsPerMeter, _, Kelvin>(kelvins_per_meter!(0.0098), feet!(5_000));
        assert_abs_diff_eq!(delta, kelvin!(14.935_2), epsilon = 1e-9);
    }
}
