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

pub trait MolarMassUnit: Unit<Dimension = dimension::MolarMass> {}
impl<T> MolarMassUnit for T where T: Unit<Dimension = dimension::MolarMass> {}

/// Stored in kg/mol.
pub type MolarMass<Unit> = Quantity<Unit>;

#[cfg(test)]
mod test {
    use crate::{grams_per_mole, kilograms_per_mole};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_molar_mass() {
        let water = grams_per_mole!(18.015_28);
        assert_abs_diff_eq!(kilograms_per_mole!(water).f64(), 0.018_015_28, epsilon = 1e-15);
        assert_abs_diff_eq!(
            grams_per_mole!(kilograms_per_mole!(0.028_969_68)).f64(),
            28.969_68,
            epsilon = 1e-10
        );
    }
}
