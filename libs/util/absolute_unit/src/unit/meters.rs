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
pub struct Meters;
impl Unit for Meters {
    type Dimension = dimension::Length;
    const UNIT_NAME: &'static str = "meters";
    const UNIT_SHORT_NAME: &'static str = "m";
    const UNIT_SUFFIX: &'static str = "m";
    const CANONICAL_IN_UNIT: f64 = 1.0;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct MetersPerSecond;
impl Unit for MetersPerSecond {
    type Dimension = dimension::Velocity;
    const UNIT_NAME: &'static str = "meters per second";
    const UNIT_SHORT_NAME: &'static str = "m/s";
    const UNIT_SUFFIX: &'static str = "m/s";
    const CANONICAL_IN_UNIT: f64 = 1.0;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct MetersPerSecond2;
impl Unit for MetersPerSecond2 {
    type Dimension = dimension::Acceleration;
    const UNIT_NAME: &'static str = "meters per second squared";
    const UNIT_SHORT_NAME: &'static str = "m/s^2";
    const UNIT_SUFFIX: &'static str = "m/s^2";
    const CANONICAL_IN_UNIT: f64 = 1.0;
}

#[macro_export]
macro_rules! meters {
    ($num:expr) => {
        $crate::quantity_in!($crate::Meters, $num)
    };
}

#[macro_export]
macro_rules! meters_per_second {
    ($num:expr) => {
        $crate::quantity_in!($crate::MetersPerSecond, $num)
    };
}

#[macro_export]
macro_rules! meters_per_second2 {
    ($num:expr) => {
        $crate::quantity_in!($crate::MetersPerSecond2, $num)
    };
}
