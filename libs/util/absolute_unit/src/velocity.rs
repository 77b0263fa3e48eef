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

pub trait VelocityUnit: Unit<Dimension = dimension::Velocity> {}
impl<T> VelocityUnit for T where T: Unit<Dimension = dimension::Velocity> {}

/// Stored in m/s.
pub type Velocity<Unit> = Quantity<Unit>;

#[cfg(test)]
mod test {
    use crate::{feet_per_second, knots, meters_per_second};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_velocity() {
        let m_p_s = meters_per_second!(340.294);
        let kt = knots!(m_p_s);
        println!("m/s: {}", m_p_s);
        println!("kt : {}", kt);
        assert_abs_diff_eq!(kt.f64(), 661.479, epsilon = 0.001);
        assert_abs_diff_eq!(m_p_s, meters_per_second!(kt), epsilon = 1e-9);
    }

    #[test]
    fn test_velocity_cancel() {
        assert_abs_diff_eq!(
            2.,
            (feet_per_second!(6f64) / feet_per_second!(3f64)).f64(),
            epsilon = 1e-12
        )
    }
}
