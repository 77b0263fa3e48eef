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
use crate::{geopotential_altitude, MOLAR_GAS_CONSTANT, STANDARD_GRAVITY};
use absolute_unit::{
    celsius, grams_per_mole, humidity_percent, integrate, joules_per_kilogram_kelvin, kelvin,
    kelvins_per_meter, kilograms_per_meter3, kilograms_per_mole, meters, pascals, scalar, Celsius,
    Density, GramsPerMole, HumidityPercent, InvalidArgument, JoulesPerKilogramKelvin, Kelvin,
    KelvinsPerMeter, KilogramsPerMeter3, KilogramsPerMole, Length, LengthUnit, Meters,
    MetersPerSecond, MolarMass, Pascals, Pressure, RelativeHumidity, RelativeHumidityUnit, Scalar,
    Significant, SpecificHeatCapacity, Temperature, TemperatureLapse, TemperatureUnit, Velocity,
};
use anyhow::Result;
use log::{debug, trace};
use once_cell::sync::Lazy;

// International Standard Atmosphere, ISO 2533:1975. These are definitions,
// so they do not limit the precision of anything computed from them.
pub static PRESSURE_AT_SEA_LEVEL: Lazy<Pressure<Pascals>> = Lazy::new(|| pascals!(101_325));
pub static TEMPERATURE_AT_SEA_LEVEL: Lazy<Temperature<Celsius>> = Lazy::new(|| celsius!(15));
pub static DENSITY_AT_SEA_LEVEL: Lazy<Density<KilogramsPerMeter3>> =
    Lazy::new(|| kilograms_per_meter3!(Significant::exact(1.225)));
pub static HUMIDITY_AT_SEA_LEVEL: Lazy<RelativeHumidity<HumidityPercent>> =
    Lazy::new(|| humidity_percent!(0));
pub static TEMPERATURE_LAPSE: Lazy<TemperatureLapse<KelvinsPerMeter>> =
    Lazy::new(|| kelvins_per_meter!(Significant::exact(0.0065)));
pub static MOLAR_MASS_OF_DRY_AIR: Lazy<MolarMass<KilogramsPerMole>> =
    Lazy::new(|| kilograms_per_mole!(Significant::exact(0.028_969_68)));
pub static MOLAR_MASS_OF_WATER_VAPOR: Lazy<MolarMass<GramsPerMole>> =
    Lazy::new(|| grams_per_mole!(Significant::exact(18.015_28)));
pub static SPECIFIC_GAS_CONSTANT_OF_DRY_AIR: Lazy<SpecificHeatCapacity<JoulesPerKilogramKelvin>> =
    Lazy::new(|| joules_per_kilogram_kelvin!(Significant::exact(287.052_8)));
pub static SPECIFIC_GAS_CONSTANT_OF_HUMID_AIR: Lazy<SpecificHeatCapacity<JoulesPerKilogramKelvin>> =
    Lazy::new(|| joules_per_kilogram_kelvin!(Significant::exact(461.495)));
pub static HEAT_CAPACITY_RATIO_OF_DRY_AIR: Lazy<Scalar> =
    Lazy::new(|| Scalar::from(Significant::exact(1.4)));

/// Everything the model knows about one altitude.
#[derive(Clone, Copy, Debug)]
pub struct AtmosphereSample {
    pub geometric_altitude: Length<Meters>,
    pub geopotential_altitude: Length<Meters>,
    pub temperature: Temperature<Kelvin>,
    pub pressure: Pressure<Pascals>,
    pub density: Density<KilogramsPerMeter3>,
    pub speed_of_sound: Velocity<MetersPerSecond>,
}

/// The troposphere of the ISA: a linear lapse from the sea level state. Every
/// model is a pure function of its arguments, so it may be called from any
/// number of threads at once.
pub struct StandardAtmosphere;

impl StandardAtmosphere {
    /// Saturation pressure of water vapor over a flat water surface, from
    /// the Magnus form of the Arden Buck equation.
    pub fn saturated_vapor_pressure<T: TemperatureUnit>(
        temperature: Temperature<T>,
    ) -> Result<Pressure<Pascals>> {
        let temperature = temperature.require("temperature")?;
        let t = celsius!(temperature).significant();
        let magnus = (Significant::from(18.678) - t / Significant::from(234.5))
            * (t / (Significant::from(257.14) + t));
        let p = pascals!(Significant::from(611.21) * magnus.exp());
        trace!("saturated vapor pressure at {}: {}", temperature, p);
        Ok(p)
    }

    /// Partial pressure of water vapor at the given saturation.
    pub fn vapor_pressure<T: TemperatureUnit, H: RelativeHumidityUnit>(
        temperature: Temperature<T>,
        humidity: RelativeHumidity<H>,
    ) -> Result<Pressure<Pascals>> {
        let humidity = humidity.require("humidity")?;
        let saturation = humidity.as_scalar();
        if saturation < scalar!(0) || saturation > scalar!(1) {
            debug!("relative humidity out of range: {}", humidity);
            return Err(InvalidArgument::new(
                "humidity",
                format!("{} is not between 0% and 100%", humidity_percent!(humidity)),
            )
            .into());
        }
        Ok(Self::saturated_vapor_pressure(temperature)? * saturation)
    }

    pub fn temperature_at_altitude<L: LengthUnit>(
        geometric_altitude: Length<L>,
    ) -> Result<Temperature<Kelvin>> {
        let geometric_altitude = geometric_altitude.require("geometric_altitude")?;
        let geopotential = geopotential_altitude(geometric_altitude)?;
        let lapsed = integrate::<KelvinsPerMeter, Meters, Kelvin>(*TEMPERATURE_LAPSE, geopotential);
        let temperature = kelvin!(*TEMPERATURE_AT_SEA_LEVEL) - lapsed;
        if temperature <= kelvin!(0) {
            debug!(
                "temperature at {} would be {}; outside the linear lapse",
                geometric_altitude, temperature
            );
            return Err(InvalidArgument::new(
                "geometric_altitude",
                format!("{} is above the linear lapse region", geometric_altitude),
            )
            .into());
        }
        trace!("temperature at {}: {}", geometric_altitude, temperature);
        Ok(temperature)
    }

    pub fn pressure_at_altitude<L: LengthUnit>(
        geometric_altitude: Length<L>,
    ) -> Result<Pressure<Pascals>> {
        Self::barometric_formula(geometric_altitude.require("geometric_altitude")?)
    }

    /// P0 * (1 - L * h / T0) ^ (g * M / (R * L))
    pub fn barometric_formula<L: LengthUnit>(
        geometric_altitude: Length<L>,
    ) -> Result<Pressure<Pascals>> {
        let h = geometric_altitude.require("geometric_altitude")?;
        let fall = (TEMPERATURE_LAPSE.as_dyn() / TEMPERATURE_AT_SEA_LEVEL.as_dyn() * h.as_dyn())
            .into_scalar()?;
        let base = scalar!(1) - fall;
        if base <= scalar!(0) {
            debug!("barometric base at {} is {}", h, base);
            return Err(InvalidArgument::new(
                "geometric_altitude",
                format!("{} is above the linear lapse region", h),
            )
            .into());
        }
        let exponent = (STANDARD_GRAVITY.as_dyn() * MOLAR_MASS_OF_DRY_AIR.as_dyn()
            / (MOLAR_GAS_CONSTANT.as_dyn() * TEMPERATURE_LAPSE.as_dyn()))
        .into_scalar()?;
        let p = *PRESSURE_AT_SEA_LEVEL * base.powf(exponent);
        trace!("barometric pressure at {}: {}", h, p);
        Ok(p)
    }

    /// Dry air density from the ideal gas law.
    pub fn density_at_altitude<L: LengthUnit>(
        geometric_altitude: Length<L>,
    ) -> Result<Density<KilogramsPerMeter3>> {
        let geometric_altitude = geometric_altitude.require("geometric_altitude")?;
        let p = Self::pressure_at_altitude(geometric_altitude)?;
        let t = Self::temperature_at_altitude(geometric_altitude)?;
        let rho = (p.as_dyn() / (SPECIFIC_GAS_CONSTANT_OF_DRY_AIR.as_dyn() * t.as_dyn()))
            .into_quantity::<KilogramsPerMeter3>()?;
        trace!("density at {}: {}", geometric_altitude, rho);
        Ok(rho)
    }

    /// Density of a mix of dry air and water vapor, each at its own partial pressure.
    pub fn humid_density_at_altitude<L: LengthUnit, H: RelativeHumidityUnit>(
        geometric_altitude: Length<L>,
        humidity: RelativeHumidity<H>,
    ) -> Result<Density<KilogramsPerMeter3>> {
        let geometric_altitude = geometric_altitude.require("geometric_altitude")?;
        let p = Self::pressure_at_altitude(geometric_altitude)?;
        let t = Self::temperature_at_altitude(geometric_altitude)?;
        let p_vapor = Self::vapor_pressure(t, humidity)?;
        let p_dry = p - p_vapor;
        let rho_dry = (p_dry.as_dyn() / (SPECIFIC_GAS_CONSTANT_OF_DRY_AIR.as_dyn() * t.as_dyn()))
            .into_quantity::<KilogramsPerMeter3>()?;
        let rho_vapor = (p_vapor.as_dyn()
            / (SPECIFIC_GAS_CONSTANT_OF_HUMID_AIR.as_dyn() * t.as_dyn()))
        .into_quantity::<KilogramsPerMeter3>()?;
        let rho = rho_dry + rho_vapor;
        trace!("density at {} and {}: {}", geometric_altitude, humidity, rho);
        Ok(rho)
    }

    /// sqrt(gamma * R * T) for dry air.
    pub fn speed_of_sound_at_altitude<L: LengthUnit>(
        geometric_altitude: Length<L>,
    ) -> Result<Velocity<MetersPerSecond>> {
        let t = Self::temperature_at_altitude(geometric_altitude)?;
        let c = (SPECIFIC_GAS_CONSTANT_OF_DRY_AIR.as_dyn()
            * t.as_dyn()
            * *HEAT_CAPACITY_RATIO_OF_DRY_AIR)
            .sqrt()?
            .into_quantity::<MetersPerSecond>()?;
        Ok(c)
    }

    pub fn at_altitude<L: LengthUnit>(geometric_altitude: Length<L>) -> Result<AtmosphereSample> {
        let geometric_altitude = geometric_altitude.require("geometric_altitude")?;
        Ok(AtmosphereSample {
            geometric_altitude: meters!(geometric_altitude),
            geopotential_altitude: geopotential_altitude(geometric_altitude)?,
            temperature: Self::temperature_at_altitude(geometric_altitude)?,
            pressure: Self::pressure_at_altitude(geometric_altitude)?,
            density: Self::density_at_altitude(geometric_altitude)?,
            speed_of_sound: Self::speed_of_sound_at_altitude(geometric_altitude)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::EARTH_RADIUS;
    use absolute_unit::{feet, humidity_ratio, meters_per_second, Feet};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::thread;

    fn invalid_name(err: anyhow::Error) -> &'static str {
        err.downcast_ref::<InvalidArgument>()
            .expect("invalid argument")
            .name()
    }

    #[test]
    fn test_constants_are_ready() {
        assert_abs_diff_eq!(PRESSURE_AT_SEA_LEVEL.f64(), 101_325.);
        assert_abs_diff_eq!(kelvin!(*TEMPERATURE_AT_SEA_LEVEL).f64(), 288.15, epsilon = 1e-9);
        assert_abs_diff_eq!(DENSITY_AT_SEA_LEVEL.f64(), 1.225);
        assert_abs_diff_eq!(HUMIDITY_AT_SEA_LEVEL.f64(), 0.);
        assert_abs_diff_eq!(TEMPERATURE_LAPSE.f64(), 0.0065);
        assert_abs_diff_eq!(MOLAR_MASS_OF_DRY_AIR.f64(), 0.028_969_68);
        assert_abs_diff_eq!(MOLAR_MASS_OF_WATER_VAPOR.f64(), 18.015_28);
        assert_abs_diff_eq!(HEAT_CAPACITY_RATIO_OF_DRY_AIR.f64(), 1.4);
        assert!(TEMPERATURE_LAPSE.canonical().is_exact());
    }

    #[test]
    fn test_sea_level() {
        let t = StandardAtmosphere::temperature_at_altitude(meters!(0)).unwrap();
        assert_abs_diff_eq!(t, kelvin!(*TEMPERATURE_AT_SEA_LEVEL), epsilon = 1e-9);
        let p = StandardAtmosphere::pressure_at_altitude(meters!(0)).unwrap();
        assert_abs_diff_eq!(p, *PRESSURE_AT_SEA_LEVEL, epsilon = 1e-9);
        let rho = StandardAtmosphere::density_at_altitude(meters!(0)).unwrap();
        assert_abs_diff_eq!(rho, *DENSITY_AT_SEA_LEVEL, epsilon = 1e-6);
    }

    #[test]
    fn test_decreases_with_altitude() {
        let mut prior = StandardAtmosphere::at_altitude(meters!(0)).unwrap();
        for h in (500..=11_000).step_by(500) {
            let sample = StandardAtmosphere::at_altitude(meters!(h)).unwrap();
            assert!(sample.temperature < prior.temperature);
            assert!(sample.pressure < prior.pressure);
            assert!(sample.density < prior.density);
            assert!(sample.speed_of_sound < prior.speed_of_sound);
            prior = sample;
        }
    }

    #[test]
    fn test_known_values() {
        let t = StandardAtmosphere::temperature_at_altitude(meters!(11_000)).unwrap();
        assert_abs_diff_eq!(t, kelvin!(216.7735), epsilon = 0.001);
        let p = StandardAtmosphere::pressure_at_altitude(meters!(1_000)).unwrap();
        assert_abs_diff_eq!(p, pascals!(89_872.79), epsilon = 0.01);
        let p = StandardAtmosphere::pressure_at_altitude(meters!(11_000)).unwrap();
        assert_abs_diff_eq!(p, pascals!(22_632), epsilon = 10.);
    }

    #[test]
    fn test_units_of_altitude_do_not_matter() {
        let a = StandardAtmosphere::pressure_at_altitude(feet!(10_000)).unwrap();
        let b = StandardAtmosphere::pressure_at_altitude(meters!(3_048)).unwrap();
        assert_relative_eq!(a, b, max_relative = 1e-12);
        let a = StandardAtmosphere::temperature_at_altitude(feet!(10_000)).unwrap();
        let b = StandardAtmosphere::temperature_at_altitude(meters!(3_048)).unwrap();
        assert_relative_eq!(a, b, max_relative = 1e-12);
    }

    #[test]
    fn test_saturated_vapor_pressure() {
        let p = StandardAtmosphere::saturated_vapor_pressure(celsius!(0)).unwrap();
        assert_abs_diff_eq!(p, pascals!(611.21), epsilon = 1e-9);
        let p = StandardAtmosphere::saturated_vapor_pressure(celsius!(20)).unwrap();
        assert_abs_diff_eq!(p, pascals!(2_338.34), epsilon = 0.01);
        let p = StandardAtmosphere::saturated_vapor_pressure(kelvin!(293.15)).unwrap();
        assert_abs_diff_eq!(p, pascals!(2_338.34), epsilon = 0.01);
    }

    #[test]
    fn test_vapor_pressure() {
        let saturated = StandardAtmosphere::saturated_vapor_pressure(celsius!(20)).unwrap();
        let p = StandardAtmosphere::vapor_pressure(celsius!(20), humidity_percent!(50)).unwrap();
        assert_abs_diff_eq!(p, saturated / scalar!(2), epsilon = 1e-9);
        let err = StandardAtmosphere::vapor_pressure(celsius!(20), humidity_ratio!(1.5)).unwrap_err();
        assert_eq!(invalid_name(err), "humidity");
    }

    #[test]
    fn test_humid_air_is_lighter() {
        let dry = StandardAtmosphere::density_at_altitude(meters!(0)).unwrap();
        let still_dry =
            StandardAtmosphere::humid_density_at_altitude(meters!(0), *HUMIDITY_AT_SEA_LEVEL)
                .unwrap();
        assert_abs_diff_eq!(dry, still_dry, epsilon = 1e-12);
        let humid =
            StandardAtmosphere::humid_density_at_altitude(meters!(0), humidity_percent!(100))
                .unwrap();
        assert!(humid < dry);
        assert_abs_diff_eq!(humid, kilograms_per_meter3!(1.2172), epsilon = 0.000_1);
    }

    #[test]
    fn test_speed_of_sound() {
        let c = StandardAtmosphere::speed_of_sound_at_altitude(meters!(0)).unwrap();
        assert_abs_diff_eq!(c, meters_per_second!(340.294), epsilon = 0.001);
    }

    #[test]
    fn test_gas_constants_agree() {
        let r_v = (MOLAR_GAS_CONSTANT.as_dyn() / MOLAR_MASS_OF_WATER_VAPOR.as_dyn())
            .into_quantity::<JoulesPerKilogramKelvin>()
            .unwrap();
        assert_relative_eq!(r_v, *SPECIFIC_GAS_CONSTANT_OF_HUMID_AIR, max_relative = 0.001);
        let r_d = (MOLAR_GAS_CONSTANT.as_dyn() / MOLAR_MASS_OF_DRY_AIR.as_dyn())
            .into_quantity::<JoulesPerKilogramKelvin>()
            .unwrap();
        assert_relative_eq!(r_d, *SPECIFIC_GAS_CONSTANT_OF_DRY_AIR, max_relative = 0.001);
    }

    #[test]
    fn test_missing_arguments() {
        let nan = meters!(f64::NAN);
        let errs = [
            StandardAtmosphere::temperature_at_altitude(nan).unwrap_err(),
            StandardAtmosphere::pressure_at_altitude(nan).unwrap_err(),
            StandardAtmosphere::barometric_formula(nan).unwrap_err(),
            StandardAtmosphere::density_at_altitude(nan).unwrap_err(),
            StandardAtmosphere::speed_of_sound_at_altitude(nan).unwrap_err(),
            StandardAtmosphere::at_altitude(nan).unwrap_err(),
        ];
        for err in errs {
            assert_eq!(invalid_name(err), "geometric_altitude");
        }
        let err = StandardAtmosphere::saturated_vapor_pressure(celsius!(f64::NAN)).unwrap_err();
        assert_eq!(invalid_name(err), "temperature");
        let err =
            StandardAtmosphere::humid_density_at_altitude(meters!(0), humidity_percent!(f64::NAN))
                .unwrap_err();
        assert_eq!(invalid_name(err), "humidity");
    }

    #[test]
    fn test_above_the_lapse_region() {
        let err = StandardAtmosphere::pressure_at_altitude(meters!(50_000)).unwrap_err();
        assert_eq!(invalid_name(err), "geometric_altitude");
        let err = StandardAtmosphere::temperature_at_altitude(meters!(50_000)).unwrap_err();
        assert_eq!(invalid_name(err), "geometric_altitude");
        assert!(StandardAtmosphere::density_at_altitude(feet!(200_000)).is_err());
    }

    #[test]
    fn test_below_the_center_of_the_earth() {
        let err = StandardAtmosphere::temperature_at_altitude(-*EARTH_RADIUS).unwrap_err();
        assert_eq!(invalid_name(err), "geometric_altitude");
        let err = StandardAtmosphere::at_altitude(meters!(-7_000_000)).unwrap_err();
        assert_eq!(invalid_name(err), "geometric_altitude");
    }

    #[test]
    fn test_concurrent_callers() {
        let expect = StandardAtmosphere::pressure_at_altitude(meters!(2_500)).unwrap();
        let handles = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    StandardAtmosphere::pressure_at_altitude(Length::<Feet>::from(&meters!(2_500)))
                        .unwrap()
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            let p = handle.join().unwrap();
            assert_relative_eq!(p, expect, max_relative = 1e-12);
        }
    }
}
