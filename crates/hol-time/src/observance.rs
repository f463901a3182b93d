//! Observance rules: where a holiday is taken off when its nominal date is
//! not a working day.
//!
//! Two single-date policies cover most calendars:
//! * [`shift_weekend_to_monday`] never moves a holiday backward. Saturday and
//!   Sunday both go to the following Monday.
//! * [`shift_weekend_to_nearest_weekday`] moves Saturday back to Friday and
//!   Sunday forward to Monday (US Veterans Day, US Christmas).
//!
//! Christmas and the day after it are resolved jointly by
//! [`christmas_pair`], since shifting one may collide with the other.

use hol_core::errors::Result;

use crate::date::Date;
use crate::weekday::Weekday;

/// Saturday → following Monday (+2), Sunday → following Monday (+1).
pub fn shift_weekend_to_monday(date: Date) -> Date {
    match date.weekday() {
        Weekday::Saturday => date + 2,
        Weekday::Sunday => date + 1,
        Weekday::Monday
        | Weekday::Tuesday
        | Weekday::Wednesday
        | Weekday::Thursday
        | Weekday::Friday => date,
    }
}

/// Saturday → previous Friday (−1), Sunday → following Monday (+1).
pub fn shift_weekend_to_nearest_weekday(date: Date) -> Date {
    match date.weekday() {
        Weekday::Saturday => date - 1,
        Weekday::Sunday => date + 1,
        Weekday::Monday
        | Weekday::Tuesday
        | Weekday::Wednesday
        | Weekday::Thursday
        | Weekday::Friday => date,
    }
}

/// Sunday → following Monday; every other day unchanged.
pub fn shift_sunday_to_monday(date: Date) -> Date {
    if date.weekday() == Weekday::Sunday {
        date + 1
    } else {
        date
    }
}

/// Sunday → previous Saturday; every other day unchanged.
pub fn shift_sunday_to_saturday(date: Date) -> Date {
    if date.weekday() == Weekday::Sunday {
        date - 1
    } else {
        date
    }
}

/// Observed Christmas Day and the holiday that follows it (Boxing Day,
/// ECB Christmas Holiday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChristmasPair {
    /// Observed Christmas Day.
    pub christmas_day: Date,
    /// Observed day-after-Christmas holiday.
    pub second_day: Date,
}

/// Forward-only Christmas pair used by the UK and the ECB.
///
/// | Dec 25    | Christmas | Second day |
/// |-----------|-----------|------------|
/// | Friday    | Dec 25    | Dec 28 (Mon) |
/// | Saturday  | Dec 27    | Dec 28 (Tue) |
/// | Sunday    | Dec 26    | Dec 27 (Tue) |
/// | otherwise | Dec 25    | Dec 26     |
pub fn christmas_pair(year: i32) -> Result<ChristmasPair> {
    let dec = |day| Date::from_ymd(year, 12, day);
    let (christmas_day, second_day) = match dec(25)?.weekday() {
        Weekday::Friday => (dec(25)?, dec(28)?),
        Weekday::Saturday => (dec(27)?, dec(28)?),
        Weekday::Sunday => (dec(26)?, dec(27)?),
        Weekday::Monday | Weekday::Tuesday | Weekday::Wednesday | Weekday::Thursday => {
            (dec(25)?, dec(26)?)
        }
    };
    Ok(ChristmasPair {
        christmas_day,
        second_day,
    })
}

/// US Christmas Day: Saturday → Friday, Sunday → Monday. There is no
/// second-day holiday.
pub fn us_christmas(year: i32) -> Result<Date> {
    Ok(shift_weekend_to_nearest_weekday(Date::from_ymd(year, 12, 25)?))
}
