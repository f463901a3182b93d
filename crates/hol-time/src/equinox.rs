//! March and September equinoxes.
//!
//! Follows Meeus, *Astronomical Algorithms* (2nd ed.), chapter 27: a mean
//! equinox from the polynomial of table 27.A (years before 1000) or 27.B
//! (1000 onward), corrected by the 24 periodic terms of table 27.C. The
//! result is a Julian Ephemeris Day; the difference between TT and UT
//! (about a minute today) is ignored.
//!
//! Japan's Vernal and Autumnal Equinox Days are the calendar day of the
//! equinox in Japan Standard Time, see [`equinox_date`].
//!
//! The polynomials drift without bound away from J2000. Inside
//! [`EQUINOX_YEARS`] every equinox lands in March or September of its own
//! year; outside it [`equinox_date`] refuses to answer.

use std::ops::RangeInclusive;

use hol_core::errors::{Error, Result};

use crate::date::Date;

/// Which equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equinox {
    /// Northward (vernal) equinox, around March 20.
    March,
    /// Southward (autumnal) equinox, around September 22.
    September,
}

/// Years for which [`equinox_date`] is defined.
pub const EQUINOX_YEARS: RangeInclusive<i32> = -4000..=8000;

/// Julian Day of 1970-01-01 00:00 UT.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day of J2000.0.
const J2000: f64 = 2_451_545.0;

/// Japan Standard Time offset from UT, in days.
pub const JST_OFFSET_DAYS: f64 = 9.0 / 24.0;

/// Table 27.C: amplitude `A`, phase `B` (degrees), rate `C` (degrees per
/// Julian century).
const PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1934.136),
    (203.0, 337.23, 32964.467),
    (199.0, 342.08, 20.186),
    (182.0, 27.85, 445267.112),
    (156.0, 73.14, 45036.886),
    (136.0, 171.52, 22518.443),
    (77.0, 222.54, 65928.934),
    (74.0, 296.72, 3034.906),
    (70.0, 243.58, 9037.513),
    (58.0, 119.81, 33718.147),
    (52.0, 297.17, 150.678),
    (50.0, 21.02, 2281.226),
    (45.0, 247.54, 29929.562),
    (44.0, 325.15, 31555.956),
    (29.0, 60.93, 4443.417),
    (18.0, 155.12, 67555.328),
    (17.0, 288.79, 4562.452),
    (16.0, 198.04, 62894.029),
    (14.0, 199.76, 31436.921),
    (12.0, 95.39, 14577.848),
    (12.0, 287.11, 31931.756),
    (12.0, 320.81, 34777.259),
    (9.0, 227.73, 1222.114),
    (8.0, 15.45, 16859.074),
];

fn polynomial(coefficients: [f64; 5], y: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * y + c)
}

/// Mean equinox (JDE0), tables 27.A / 27.B.
fn mean_equinox(year: i32, which: Equinox) -> f64 {
    if year < 1000 {
        let y = year as f64 / 1000.0;
        let c = match which {
            Equinox::March => [1_721_139.29189, 365_242.13740, 0.06134, 0.00111, -0.00071],
            Equinox::September => [1_721_325.70455, 365_242.49558, -0.11677, -0.00297, 0.00074],
        };
        polynomial(c, y)
    } else {
        let y = (year as f64 - 2000.0) / 1000.0;
        let c = match which {
            Equinox::March => [2_451_623.80984, 365_242.37404, 0.05169, -0.00411, -0.00057],
            Equinox::September => [2_451_810.21715, 365_242.01767, -0.11575, 0.00337, 0.00078],
        };
        polynomial(c, y)
    }
}

/// Instant of the equinox in `year`, as a Julian Ephemeris Day.
pub fn equinox_jde(year: i32, which: Equinox) -> f64 {
    let jde0 = mean_equinox(year, which);
    let t = (jde0 - J2000) / 36_525.0;
    let w = (35_999.373 * t - 2.47).to_radians();
    let dl = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
    let s: f64 = PERIODIC_TERMS
        .iter()
        .map(|&(a, b, c)| a * (b + c * t).to_radians().cos())
        .sum();
    jde0 + 0.00001 * s / dl
}

/// Calendar day on which the equinox falls, at the given UT offset (days).
///
/// # Errors
/// Returns `Error::Date` if `year` is outside [`EQUINOX_YEARS`].
pub fn equinox_date(year: i32, which: Equinox, utc_offset_days: f64) -> Result<Date> {
    if !EQUINOX_YEARS.contains(&year) {
        return Err(Error::Date(format!(
            "{which:?} equinox of {year} is outside the model range {}..={}",
            EQUINOX_YEARS.start(),
            EQUINOX_YEARS.end()
        )));
    }
    let local = equinox_jde(year, which) + utc_offset_days;
    Date::from_serial((local - UNIX_EPOCH_JD).floor() as i32)
}
