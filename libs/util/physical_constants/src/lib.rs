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
mod atmosphere;
mod earth;

pub use atmosphere::{
    AtmosphereSample, StandardAtmosphere, DENSITY_AT_SEA_LEVEL, HEAT_CAPACITY_RATIO_OF_DRY_AIR,
    HUMIDITY_AT_SEA_LEVEL, MOLAR_MASS_OF_DRY_AIR, MOLAR_MASS_OF_WATER_VAPOR, PRESSURE_AT_SEA_LEVEL,
    SPECIFIC_GAS_CONSTANT_OF_DRY_AIR, SPECIFIC_GAS_CONSTANT_OF_HUMID_AIR, TEMPERATURE_AT_SEA_LEVEL,
    TEMPERATURE_LAPSE,
};
pub use earth::{geopotential_altitude, EARTH_RADIUS, STANDARD_GRAVITY};

use absolute_unit::{joules_per_mole_kelvin, JoulesPerMoleKelvin, MolarHeatCapacity, Significant};
use once_cell::sync::Lazy;

// CODATA 2018, exact by definition of the SI.
pub static MOLAR_GAS_CONSTANT: Lazy<MolarHeatCapacity<JoulesPerMoleKelvin>> =
    Lazy::new(|| joules_per_mole_kelvin!(Significant::exact(8.314_462_618_153_24)));
