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

pub trait TemperatureUnit: Unit<Dimension = dimension::Temperature> {}
impl<T> TemperatureUnit for T where T: Unit<Dimension = dimension::Temperature> {}

/// Stored in kelvin. A temperature may also stand for a difference of
/// temperatures; read those through an offset-free unit (kelvin, rankine).
pub type Temperature<Unit> = Quantity<Unit>;

#[cfg(test)]
mod test {
    use crate::{celsius, fahrenheit, kelvin, rankine};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_temperature_conversions() {
        let f = fahrenheit!(100);
        println!("f: {}", f);
        println!("c: {}", celsius!(f));
        println!("r: {}", rankine!(f));
        println!("k: {}", kelvin!(f));
        assert_abs_diff_eq!(celsius!(f), celsius!(37.777_777_8), epsilon = 1e-6);
        assert_abs_diff_eq!(rankine!(f), rankine!(559.67), epsilon = 1e-9);
        assert_abs_diff_eq!(kelvin!(celsius!(0)), kelvin!(273.15), epsilon = 1e-12);
    }

    #[test]
    fn test_celsius_round_trip() {
        for v in [-56.5, 0., 15., 36.6, 1_000.] {
            assert_abs_diff_eq!(celsius!(kelvin!(celsius!(v))).f64(), v, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_fahrenheit_round_trip() {
        for v in [-40., 32., 59., 451.] {
            assert_abs_diff_eq!(fahrenheit!(v).f64(), v, epsilon = 1e-10);
        }
        assert_abs_diff_eq!(celsius!(fahrenheit!(-40)), celsius!(-40), epsilon = 1e-10);
    }
}
