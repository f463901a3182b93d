//! Gregorian Easter and the dates derived from it.
//!
//! Easter Sunday is found with Gauss's method: the golden number places the
//! year in the 19-year lunar cycle, the century corrections account for the
//! Gregorian leap-year rule and the drift of the lunar tables, and the epact
//! gives the age of the moon on January 1. The paschal full moon is then
//! advanced to the following Sunday.
//!
//! Every function here clamps its input with [`ComputusYear::clamped`], so
//! the result always lies between March 22 and April 25 of a year in
//! `[1583, 4099]`.

use crate::date::Date;
use crate::year_domain::ComputusYear;

/// Easter Sunday for `year` (clamped to the computus domain).
pub fn easter_sunday(year: i32) -> Date {
    let yyyy = ComputusYear::clamped(year).get();

    let golden = yyyy % 19 + 1;
    let century = yyyy / 100 + 1;
    // leap-year correction
    let x = (3 * century) / 4 - 12;
    // lunar correction
    let y = (8 * century + 5) / 25 - 5;
    // anchors the weekday of March 21
    let z = (5 * yyyy) / 4 - x - 10;

    let mut epact = (11 * golden + 20 + y - x) % 30;
    if epact == 24 {
        epact += 1;
    }
    if epact == 25 && golden > 11 {
        epact += 1;
    }

    let mut moon = 44 - epact;
    if moon < 21 {
        moon += 30;
    }

    let day = (moon + 7) - ((z + moon) % 7);
    if day > 31 {
        Date::from_ymd_unchecked(yyyy, 4, (day - 31) as u8)
    } else {
        Date::from_ymd_unchecked(yyyy, 3, day as u8)
    }
}

/// Good Friday: Easter Sunday − 2 days.
pub fn good_friday(year: i32) -> Date {
    easter_sunday(year) - 2
}

/// Easter Monday: Easter Sunday + 1 day.
pub fn easter_monday(year: i32) -> Date {
    easter_sunday(year) + 1
}

/// Ascension: Easter Sunday + 40 days.
pub fn ascension(year: i32) -> Date {
    easter_sunday(year) + 40
}

/// Whit Monday (Pentecost Monday): Easter Sunday + 50 days.
pub fn whit_monday(year: i32) -> Date {
    easter_sunday(year) + 50
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        let known = [
            (1583, 4, 10),
            (1818, 3, 22), // earliest possible
            (1943, 4, 25), // latest possible
            (1954, 4, 18), // epact 25 with golden number > 11
            (1981, 4, 19), // epact 24
            (2000, 4, 23),
            (2019, 4, 21),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2038, 4, 25),
        ];
        for (y, m, d) in known {
            assert_eq!(easter_sunday(y), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn derived_dates_2024() {
        assert_eq!(good_friday(2024), date(2024, 3, 29));
        assert_eq!(easter_monday(2024), date(2024, 4, 1));
        assert_eq!(ascension(2024), date(2024, 5, 10));
        assert_eq!(whit_monday(2024), date(2024, 5, 20));
        assert_eq!(good_friday(2024).weekday(), Weekday::Friday);
        assert_eq!(easter_monday(2024).weekday(), Weekday::Monday);
        assert_eq!(whit_monday(2024).weekday(), Weekday::Monday);
    }

    #[test]
    fn out_of_domain_years_are_clamped() {
        assert_eq!(easter_sunday(1000), easter_sunday(1583));
        assert_eq!(easter_sunday(-5), easter_sunday(1583));
        assert_eq!(easter_sunday(9999), easter_sunday(4099));
        assert_eq!(good_friday(i32::MAX), good_friday(4099));
    }
}
