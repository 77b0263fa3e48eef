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
pub struct SlugsPerFoot3;
impl Unit for SlugsPerFoot3 {
    type Dimension = dimension::Density;
    const UNIT_NAME: &'static str = "slugs per cubic foot";
    const UNIT_SHORT_NAME: &'static str = "sl/ft^3";
    const UNIT_SUFFIX: &'static str = "sl/ft^3";
    const CANONICAL_IN_UNIT: f64 = 14.593_902_937_206_4 / (0.304_8 * 0.304_8 * 0.304_8);
}

#[macro_export]
macro_rules! slugs_per_foot3 {
    ($num:expr) => {
        $crate::quantity_in!($crate::SlugsPerFoot3, $num)
    };
}
