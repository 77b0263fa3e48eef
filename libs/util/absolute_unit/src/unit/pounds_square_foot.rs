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
use crate::{dimension, Unit};

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct PoundsSquareFoot;
impl Unit for PoundsSquareFoot {
    type Dimension = dimension::Pressure;
    const UNIT_NAME: &'static str = "pounds per square foot";
    const UNIT_SHORT_NAME: &'static str = "psf";
    const UNIT_SUFFIX: &'static str = "lb/ft^2";
    // lbf / ft^2
    const CANONICAL_IN_UNIT: f64 = 4.448_221_615_260_5 / (0.304_8 * 0.304_8);
}

#[macro_export]
macro_rules! psf {
    ($num:expr) => {
        $crate::quantity_in!($crate::PoundsSquareFoot, $num)
    };
}
