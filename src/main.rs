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
    celsius, feet, humidity_percent, meters, HumidityPercent, Length, LengthUnit,
    RelativeHumidity, Significant,
};
use anyhow::{ensure, Context, Result};
use log::debug;
use physical_constants::StandardAtmosphere;
use structopt::StructOpt;

/// Print International Standard Atmosphere tables for the troposphere
#[derive(Debug, StructOpt)]
struct Opt {
    /// Lowest altitude in the table
    #[structopt(short, long, default_value = "0")]
    from: f64,

    /// Highest altitude in the table
    #[structopt(short, long, default_value = "11000")]
    to: f64,

    /// Altitude between rows
    #[structopt(short, long, default_value = "500")]
    step: f64,

    /// Read altitudes in feet instead of meters
    #[structopt(long)]
    feet: bool,

    /// Relative humidity in percent for the humid density column
    #[structopt(short = "H", long, default_value = "0")]
    humidity: f64,

    /// Print temperatures in celsius instead of kelvin
    #[structopt(short, long)]
    celsius: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    ensure!(opt.step > 0., "--step must be positive, not {}", opt.step);
    ensure!(
        opt.from <= opt.to,
        "--from {} is above --to {}",
        opt.from,
        opt.to
    );
    ensure!(
        (0. ..=100.).contains(&opt.humidity),
        "--humidity {} is not a percentage",
        opt.humidity
    );

    // Table rows are exact positions on a grid, not measurements.
    let humidity = humidity_percent!(Significant::exact(opt.humidity));
    let rows = ((opt.to - opt.from) / opt.step).floor() as usize + 1;
    debug!("printing {} rows from {} by {}", rows, opt.from, opt.step);

    print_header(&opt);
    for i in 0..rows {
        let altitude = Significant::exact(opt.from + i as f64 * opt.step);
        if opt.feet {
            print_row(feet!(altitude), humidity, opt.celsius)?;
        } else {
            print_row(meters!(altitude), humidity, opt.celsius)?;
        }
    }
    Ok(())
}

fn print_header(opt: &Opt) {
    let altitude = if opt.feet { "ft" } else { "m" };
    let temperature = if opt.celsius { "C" } else { "K" };
    println!(
        "{:>10} {:>12} {:>9} {:>11} {:>10} {:>10} {:>8}",
        format!("h ({})", altitude),
        "H (m)",
        format!("T ({})", temperature),
        "P (Pa)",
        "rho",
        "rho humid",
        "c (m/s)"
    );
}

fn print_row<L: LengthUnit>(
    altitude: Length<L>,
    humidity: RelativeHumidity<HumidityPercent>,
    in_celsius: bool,
) -> Result<()> {
    let sample = StandardAtmosphere::at_altitude(altitude).with_context(|| {
        format!("no atmosphere at {}{}", altitude.f64(), L::UNIT_SHORT_NAME)
    })?;
    let humid = StandardAtmosphere::humid_density_at_altitude(altitude, humidity)?;
    let temperature = if in_celsius {
        celsius!(sample.temperature).f64()
    } else {
        sample.temperature.f64()
    };
    println!(
        "{:>10.1} {:>12.1} {:>9.2} {:>11.2} {:>10.5} {:>10.5} {:>8.2}",
        altitude.f64(),
        sample.geopotential_altitude.f64(),
        temperature,
        sample.pressure.f64(),
        sample.density.f64(),
        humid.f64(),
        sample.speed_of_sound.f64()
    );
    Ok(())
}
