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
pub struct Kelvin;
impl Unit for Kelvin {
    type Dimension = dimension::Temperature;
    const UNIT_NAME: &'static str = "kelvin";
    const UNIT_SHORT_NAME: &'static str = "K";
    const UNIT_SUFFIX: &'static str = "K";
    const CANONICAL_IN_UNIT: f64 = 1.0;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct KelvinsPerMeter;
impl Unit for KelvinsPerMeter {
    type Dimension = dimension::TemperatureLapse;
    const UNIT_NAME: &'static str = "kelvins per meter";
    const UNIT_SHORT_NAME: &'static str = "K/m";
    const UNIT_SUFFIX: &'static str = "K/m";
    const CANONICAL_IN_UNIT: f64 = 1.0;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct KelvinsPerKilometer;
impl Unit for KelvinsPerKilometer {
    type Dimension = dimension::TemperatureLapse;
    const UNIT_NAME: &'static str = "kelvins per kilometer";
    const UNIT_SHORT_NAME: &'static str = "K/km";
    const UNIT_SUFFIX: &'static str = "K/km";
    const CANONICAL_IN_UNIT: f64 = 0.001;
}

#[macro_export]
macro_rules! kelvin {
    ($num:expr) => {
        $crate::quantity_in!($crate::Kelvin, $num)
    };
}

#[macro_export]
macro_rules! kelvins_per_meter {
    ($num:expr) => {
        $crate::quantity_in!($crate::KelvinsPerMeter, $num)
    };
}

#[macro_export]
macro_rules! kelvins_per_kilometer {
    ($num:expr) => {
        $crate::quantity_in!($crate::KelvinsPerKilometer, $num)
    };
}
