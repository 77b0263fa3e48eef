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

pub trait DensityUnit: Unit<Dimension = dimension::Density> {}
impl<T> DensityUnit for T where T: Unit<Dimension = dimension::Density> {}

// mass / length^3, stored in kg/m^3
pub type Density<Unit> = Quantity<Unit>;

#[cfg(test)]
mod test {
    use crate::{kilograms_per_meter3, slugs_per_foot3};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_density() {
        let s_p_f3 = slugs_per_foot3!(100f64);
        let kg_p_m3 = kilograms_per_meter3!(s_p_f3);
        println!("{}", s_p_f3);
        println!("{}", kg_p_m3);
        assert_abs_diff_eq!(s_p_f3, slugs_per_foot3!(kg_p_m3), epsilon = 0.000_000_1);
    }

    #[test]
    fn test_sea_level_density() {
        assert_abs_diff_eq!(
            slugs_per_foot3!(kilograms_per_meter3!(1.225)),
            slugs_per_foot3!(0.002_376_89),
            epsilon = 0.000_000_1
        );
    }
}
