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
use std::fmt::Debug;

/// SI base units that our dimensions are built from.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum BaseUnit {
    Meter,
    Kilogram,
    Second,
    Kelvin,
    Mole,
}

/// A physical category of measurement. Quantities of different dimensions
/// do not mix, except where a dimension declares how.
///
/// The base unit lists must already be cancelled: no unit may appear in both.
pub trait Dimension: Copy + Debug + Default + Eq + Ord + 'static {
    const DIMENSION_NAME: &'static str;
    const NUMERATOR: &'static [BaseUnit];
    const DENOMINATOR: &'static [BaseUnit];
}

macro_rules! make_dimension {
    ($Name:ident, $name:expr, [$($num:ident),*], [$($den:ident),*]) => {
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $Name;
        impl Dimension for $Name {
            const DIMENSION_NAME: &'static str = $name;
            const NUMERATOR: &'static [BaseUnit] = &[$(BaseUnit::$num),*];
            const DENOMINATOR: &'static [BaseUnit] = &[$(BaseUnit::$den),*];
        }
    };
}

make_dimension!(Scalar, "scalar", [], []);
make_dimension!(Length, "length", [Meter], []);
make_dimension!(Temperature, "temperature", [Kelvin], []);
// Force / Area => Mass / (Length * Time * Time)
make_dimension!(Pressure, "pressure", [Kilogram], [Meter, Second, Second]);
make_dimension!(Density, "density", [Kilogram], [Meter, Meter, Meter]);
make_dimension!(MolarMass, "molar mass", [Kilogram], [Mole]);
// J / (kg * K) => m^2 / (s^2 * K)
make_dimension!(
    SpecificHeatCapacity,
    "specific heat capacity",
    [Meter, Meter],
    [Second, Second, Kelvin]
);
// J / (mol * K) => kg * m^2 / (s^2 * mol * K)
make_dimension!(
    MolarHeatCapacity,
    "molar heat capacity",
    [Kilogram, Meter, Meter],
    [Second, Second, Mole, Kelvin]
);
make_dimension!(Acceleration, "acceleration", [Meter], [Second, Second]);
make_dimension!(Velocity, "velocity", [Meter], [Second]);
// A ratio of vapor pressures, so it carries no base units. It is still kept
// apart from a plain scalar, at compile time by type and in DynamicUnits by tag.
make_dimension!(RelativeHumidity, "relative humidity", [], []);
make_dimension!(TemperatureLapse, "temperature lapse", [Kelvin], [Meter]);
