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

const METERS_IN_FOOT: f64 = 0.304_8;

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Feet;
impl Unit for Feet {
    type Dimension = dimension::Length;
    const UNIT_NAME: &'static str = "feet";
    const UNIT_SHORT_NAME: &'static str = "ft";
    const UNIT_SUFFIX: &'static str = "'";
    const CANONICAL_IN_UNIT: f64 = METERS_IN_FOOT;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct FeetPerSecond;
impl Unit for FeetPerSecond {
    type Dimension = dimension::Velocity;
    const UNIT_NAME: &'static str = "feet per second";
    const UNIT_SHORT_NAME: &'static str = "ft/s";
    const UNIT_SUFFIX: &'static str = "ft/s";
    const CANONICAL_IN_UNIT: f64 = METERS_IN_FOOT;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct FeetPerSecond2;
impl Unit for FeetPerSecond2 {
    type Dimension = dimension::Acceleration;
    const UNIT_NAME: &'static str = "feet per second squared";
    const UNIT_SHORT_NAME: &'static str = "ft/s^2";
    const UNIT_SUFFIX: &'static str = "ft/s^2";
    const CANONICAL_IN_UNIT: f64 = METERS_IN_FOOT;
}

#[macro_export]
macro_rules! feet {
    ($num:expr) => {
        $crate::quantity_in!($crate::Feet, $num)
    };
}

#[macro_export]
macro_rules! feet_per_second {
    ($num:expr) => {
        $crate::quantity_in!($crate::FeetPerSecond, $num)
    };
}

#[macro_export]
macro_rules! feet_per_second2 {
    ($num:expr) => {
        $crate::quantity_in!($crate::FeetPerSecond2, $num)
    };
}
