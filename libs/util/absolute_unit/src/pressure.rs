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

pub trait PressureUnit: Unit<Dimension = dimension::Pressure> {}
impl<T> PressureUnit for T where T: Unit<Dimension = dimension::Pressure> {}

/// Stored in pascals.
pub type Pressure<Unit> = Quantity<Unit>;

#[cfg(test)]
mod test {
    use crate::{hectopascals, pascals, psf};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pressure() {
        let psf = psf!(2_116.22f32);
        let pas = pascals!(101_325f32);
        println!("{}", psf);
        println!("{}", pas);
        assert_abs_diff_eq!(psf, psf!(pas), epsilon = 0.01);
    }

    #[test]
    fn test_pressure_round_trip() {
        for v in [0., 611.21, 22_632.1, 101_325.] {
            assert_abs_diff_eq!(pascals!(v).f64(), v, epsilon = 1e-9);
            assert_abs_diff_eq!(pascals!(hectopascals!(pascals!(v))).f64(), v, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(hectopascals!(pascals!(101_325)).f64(), 1_013.25, epsilon = 1e-9);
    }

    #[test]
    fn test_pressure_ratio() {
        assert_abs_diff_eq!((hectopascals!(500) / pascals!(100_000)).f64(), 0.5);
    }
}
