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

//! A system of quantities with units.
//!
//! Every quantity is a `Quantity<U>`, where the unit `U` names the dimension
//! it measures. Values are held in the dimension's canonical unit as
//! `Significant` numbers, so they carry their significant figures through
//! arithmetic. Units of one dimension mix freely; different dimensions only
//! meet through an `Integral` declaration or through `DynamicUnits`, which
//! checks at runtime that a formula's units cancel to what was asked for.
pub mod dimension;
pub(crate) mod dynamic_unit;
pub(crate) mod error;
pub(crate) mod generic;
pub(crate) mod integral;
pub(crate) mod quantity;
pub(crate) mod significant;
pub(crate) mod unit;

pub(crate) mod acceleration;
pub(crate) mod density;
pub(crate) mod length;
pub(crate) mod molar_mass;
pub(crate) mod pressure;
pub(crate) mod relative_humidity;
pub(crate) mod specific_heat_capacity;
pub(crate) mod temperature;
pub(crate) mod temperature_lapse;
pub(crate) mod velocity;

pub use crate::{
    acceleration::{Acceleration, AccelerationUnit},
    density::{Density, DensityUnit},
    dimension::{BaseUnit, Dimension},
    dynamic_unit::DynamicUnits,
    error::InvalidArgument,
    integral::{integrate, Integral},
    length::{Length, LengthUnit},
    molar_mass::{MolarMass, MolarMassUnit},
    pressure::{Pressure, PressureUnit},
    quantity::{Quantity, Unit},
    relative_humidity::{RelativeHumidity, RelativeHumidityUnit},
    significant::{Significant, MAX_SIGNIFICANT_DIGITS},
    specific_heat_capacity::{
        MolarHeatCapacity, MolarHeatCapacityUnit, SpecificHeatCapacity, SpecificHeatCapacityUnit,
    },
    temperature::{Temperature, TemperatureUnit},
    temperature_lapse::{TemperatureLapse, TemperatureLapseUnit},
    unit::{
        celsius::Celsius,
        fahrenheit::Fahrenheit,
        feet::{Feet, FeetPerSecond, FeetPerSecond2},
        grams::GramsPerMole,
        humidity::{HumidityPercent, HumidityRatio},
        joules::{JoulesPerKilogramKelvin, JoulesPerMoleKelvin},
        kelvin::{Kelvin, KelvinsPerKilometer, KelvinsPerMeter},
        kilograms::{KilogramsPerMeter3, KilogramsPerMole},
        kilometers::Kilometers,
        knots::Knots,
        meters::{Meters, MetersPerSecond, MetersPerSecond2},
        pascals::{Hectopascals, Pascals},
        pounds_square_foot::PoundsSquareFoot,
        rankine::Rankine,
        scalar::Scalar,
        slugs::SlugsPerFoot3,
    },
    velocity::{Velocity, VelocityUnit},
};

pub use approx;
pub use ordered_float;
