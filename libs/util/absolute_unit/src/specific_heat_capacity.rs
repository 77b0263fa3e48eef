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
use crate::{dimension, Quantity, Unit};

pub trait SpecificHeatCapacityUnit: Unit<Dimension = dimension::SpecificHeatCapacity> {}
impl<T> SpecificHeatCapacityUnit for T where T: Unit<Dimension = dimension::SpecificHeatCapacity> {}

pub trait MolarHeatCapacityUnit: Unit<Dimension = dimension::MolarHeatCapacity> {}
impl<T> MolarHeatCapacityUnit for T where T: Unit<Dimension = dimension::MolarHeatCapacity> {}

// Gas constants are written in these: J/(kg*K) for a specific gas and
// J/(mol*K) for the universal constant.
pub type SpecificHeatCapacity<Unit> = Quantity<Unit>;
pub type MolarHeatCapacity<Unit> = Quantity<Unit>;

#[cfg(test)]
mod test {
    use crate::{
        grams_per_mole, joules_per_kilogram_kelvin, joules_per_mole_kelvin, JoulesPerKilogramKelvin,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_specific_from_molar() {
        // R / M
        let r = joules_per_mole_kelvin!(8.314_462_618);
        let m = grams_per_mole!(28.969_68);
        let specific = (r.as_dyn() / m.as_dyn())
            .into_quantity::<JoulesPerKilogramKelvin>()
            .unwrap();
        assert_abs_diff_eq!(
            specific,
            joules_per_kilogram_kelvin!(287.005_7),
            epsilon = 0.001
        );
    }
}
