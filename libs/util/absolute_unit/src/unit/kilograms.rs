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
pub struct KilogramsPerMeter3;
impl Unit for KilogramsPerMeter3 {
    type Dimension = dimension::Density;
    const UNIT_NAME: &'static str = "kilograms per cubic meter";
    const UNIT_SHORT_NAME: &'static str = "kg/m^3";
    const UNIT_SUFFIX: &'static str = "kg/m^3";
    const CANONICAL_IN_UNIT: f64 = 1.0;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct KilogramsPerMole;
impl Unit for KilogramsPerMole {
    type Dimension = dimension::MolarMass;
    const UNIT_NAME: &'static str = "kilograms per mole";
    const UNIT_SHORT_NAME: &'static str = "kg/mol";
    const UNIT_SUFFIX: &'static str = "kg/mol";
    const CANONICAL_IN_UNIT: f64 = 1.0;
}

#[macro_export]
macro_rules! kilograms_per_meter3 {
    ($num:expr) => {
        $crate::quantity_in!($crate::KilogramsPerMeter3, $num)
    };
}

#[macro_export]
macro_rules! kilograms_per_mole {
    ($num:expr) => {
        $crate::quantity_in!($crate::KilogramsPerMole, $num)
    };
}
