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
use crate::{dimension, Quantity, Scalar, Unit};

pub trait RelativeHumidityUnit: Unit<Dimension = dimension::RelativeHumidity> {}
impl<T> RelativeHumidityUnit for T where T: Unit<Dimension = dimension::RelativeHumidity> {}

/// Partial pressure of water vapor over its saturation pressure. Stored as a
/// ratio, where 1 is fully saturated; `HumidityPercent` reads it as 0..=100.
pub type RelativeHumidity<Unit> = Quantity<Unit>;

impl<U> Quantity<U>
where
    U: RelativeHumidityUnit,
{
    /// The saturation fraction, for scaling pressures.
    pub fn as_scalar(&self) -> Scalar {
        Scalar::from(self.canonical())
    }
}
