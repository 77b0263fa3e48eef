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
use absolute_unit::{
    meters, meters_per_second2, Acceleration, InvalidArgument, Length, LengthUnit, Meters,
    MetersPerSecond2, Significant,
};
use anyhow::Result;
use log::debug;
use once_cell::sync::Lazy;

pub static STANDARD_GRAVITY: Lazy<Acceleration<MetersPerSecond2>> =
    Lazy::new(|| meters_per_second2!(Significant::exact(9.806_65)));

// The radius used to define geopotential height in the standard atmosphere.
pub static EARTH_RADIUS: Lazy<Length<Meters>> = Lazy::new(|| meters!(6_356_766));

/// The height in a uniform field of standard gravity that has the same
/// potential energy as `geometric_altitude` above the real Earth.
pub fn geopotential_altitude<L: LengthUnit>(geometric_altitude: Length<L>) -> Result<Length<Meters>> {
    let geometric_altitude = geometric_altitude.require("geometric_altitude")?;
    let radius = *EARTH_RADIUS;
    if meters!(geometric_altitude) <= -radius {
        debug!("geometric altitude {} is inside the earth", geometric_altitude);
        return Err(InvalidArgument::new(
            "geometric_altitude",
            format!("{} is at or below the center of the earth", geometric_altitude),
        )
        .into());
    }
    Ok(meters!(
        geometric_altitude * (radius / (radius + geometric_altitude))
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use absolute_unit::feet;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_geopotential_at_sea_level() {
        assert_abs_diff_eq!(geopotential_altitude(meters!(0)).unwrap(), meters!(0));
    }

    #[test]
    fn test_geopotential_is_lower() {
        let h = geopotential_altitude(meters!(11_000)).unwrap();
        assert_abs_diff_eq!(h, meters!(10_980.998), epsilon = 0.001);
        let h = geopotential_altitude(feet!(36_089.24)).unwrap();
        assert_abs_diff_eq!(h, meters!(10_981.0), epsilon = 0.1);
    }

    #[test]
    fn test_geopotential_requires_altitude() {
        let err = geopotential_altitude(meters!(f64::NAN)).unwrap_err();
        let err = err.downcast_ref::<InvalidArgument>().unwrap();
        assert_eq!(err.name(), "geometric_altitude");
    }

    #[test]
    fn test_geopotential_rejects_the_center_of_the_earth() {
        for h in [-*EARTH_RADIUS, meters!(-7_000_000)] {
            let err = geopotential_altitude(h).unwrap_err();
            let err = err.downcast_ref::<InvalidArgument>().unwrap();
            assert_eq!(err.name(), "geometric_altitude");
        }
        assert!(geopotential_altitude(meters!(-430)).unwrap() < meters!(-430));
    }

    #[test]
    fn test_standard_gravity() {
        assert_abs_diff_eq!(STANDARD_GRAVITY.f64(), 9.806_65);
    }
}
