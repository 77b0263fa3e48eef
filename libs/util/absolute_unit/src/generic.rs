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

/// Expand `$it` once for every native number type we convert to and from.
#[macro_export]
macro_rules! supports_value_type_conversion {
    ($it:tt) => {
        $it!(f64);
        $it!(f32);
        $it!(isize);
        $it!(i64);
        $it!(i32);
        $it!(i16);
        $it!(i8);
    };
}

/// Build a quantity from a raw number given in `$Unit`.
#[macro_export]
macro_rules! quantity_in {
    ($Unit:ty, $num:expr) => {
        $crate::Quantity::<$Unit>::from(&$num)
    };
}
