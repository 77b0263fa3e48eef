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

// Unitless
pub(crate) mod scalar;

// Distance
pub(crate) mod feet;
pub(crate) mod kilometers;
pub(crate) mod meters;

// Velocity
pub(crate) mod knots;

// Temperature
pub(crate) mod celsius;
pub(crate) mod fahrenheit;
pub(crate) mod kelvin;
pub(crate) mod rankine;

// Pressure
pub(crate) mod pascals;
pub(crate) mod pounds_square_foot;

// Density and molar mass
pub(crate) mod grams;
pub(crate) mod kilograms;
pub(crate) mod slugs;

// Energy per amount
pub(crate) mod joules;

// Moisture
pub(crate) mod humidity;
