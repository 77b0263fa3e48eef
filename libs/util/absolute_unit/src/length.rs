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

pub trait LengthUnit: Unit<Dimension = dimension::Length> {}
impl<T> LengthUnit for T where T: Unit<Dimension = dimension::Length> {}

/// Stored in meters.
pub type Length<Unit> = Quantity<Unit>;

#[cfg(test)]
mod test {
    use crate::{feet, kilometers, meters};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_meters_to_feet() {
        let m = meters!(1);
        println!("m : {}", m);
        println!("ft: {}", feet!(m));
        assert_abs_diff_eq!(feet!(m).f64(), 3.280_839_895, epsilon = 1e-9);
    }

    #[test]
    fn test_length_shift() {
        let l = kilometers!(11) + meters!(500) - feet!(1_000);
        assert_abs_diff_eq!(meters!(l), meters!(11_195.2), epsilon = 1e-9);
    }

    #[test]
    fn test_length_round_trip() {
        for v in [0., 1., 11_000., 36_089.24] {
            assert_abs_diff_eq!(feet!(meters!(feet!(v))).f64(), v, epsilon = 1e-9);
            assert_abs_diff_eq!(kilometers!(v).f64(), v, epsilon = 1e-12);
        }
    }
}
