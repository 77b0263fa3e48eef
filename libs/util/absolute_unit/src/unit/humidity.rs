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

/// Fraction of saturation; 1 is fully saturated.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct HumidityRatio;
impl Unit for HumidityRatio {
    type Dimension = dimension::RelativeHumidity;
    const UNIT_NAME: &'static str = "relative humidity ratio";
    const UNIT_SHORT_NAME: &'static str = "";
    const UNIT_SUFFIX: &'static str = "";
    const CANONICAL_IN_UNIT: f64 = 1.0;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct HumidityPercent;
impl Unit for HumidityPercent {
    type Dimension = dimension::RelativeHumidity;
    const UNIT_NAME: &'static str = "percent relative humidity";
    const UNIT_SHORT_NAME: &'static str = "%";
    const UNIT_SUFFIX: &'static str = "%";
    const CANONICAL_IN_UNIT: f64 = 0.01;
}

#[macro_export]
macro_rules! humidity_ratio {
    ($num:expr) => {
        $crate::quantity_in!($crate::HumidityRatio, $num)
    };
}

#[macro_export]
macro_rules! humidity_percent {
    ($num:expr) => {
        $crate::quantity_in!($crate::HumidityPercent, $num)
    };
}
