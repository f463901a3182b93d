//! Domain-wide checks of the shared holiday rules.
//!
//! Exhaustive where the domain is small (every computus year), `proptest`
//! where it is not.

use hol_time::date::days_in_month;
use hol_time::easter::{easter_sunday, good_friday};
use hol_time::locator::{first_weekday, last_weekday, nth_weekday, second_weekday};
use hol_time::observance::{shift_weekend_to_monday, shift_weekend_to_nearest_weekday};
use hol_time::{Date, Month, Weekday, FIRST_GREGORIAN_YEAR, LAST_COMPUTUS_YEAR};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Easter ───────────────────────────────────────────────────────────────────

#[test]
fn easter_is_a_sunday_between_march_22_and_april_25() {
    for y in FIRST_GREGORIAN_YEAR..=LAST_COMPUTUS_YEAR {
        let e = easter_sunday(y);
        assert_eq!(e.year(), y);
        assert_eq!(e.weekday(), Weekday::Sunday, "Easter {y} = {e}");
        assert!(e >= date(y, 3, 22) && e <= date(y, 4, 25), "Easter {y} = {e}");
    }
}

#[test]
fn easter_fixed_points() {
    assert_eq!(easter_sunday(2024), date(2024, 3, 31));
    assert_eq!(easter_sunday(2025), date(2025, 4, 20));
}

proptest! {
    #[test]
    fn clamped_easter_stays_in_domain(y in any::<i32>()) {
        let e = easter_sunday(y);
        prop_assert!((FIRST_GREGORIAN_YEAR..=LAST_COMPUTUS_YEAR).contains(&e.year()));
        prop_assert_eq!(good_friday(y), e - 2);
    }
}

// ─── Observance ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn weekend_to_monday_lands_on_a_weekday_and_is_idempotent(serial in -200_000i32..200_000) {
        let d = Date::from_serial(serial).unwrap();
        let once = shift_weekend_to_monday(d);
        prop_assert!(once.weekday().is_weekday());
        prop_assert_eq!(shift_weekend_to_monday(once), once);
        prop_assert!(once >= d && once - d <= 2);
        if d.weekday().is_weekday() {
            prop_assert_eq!(once, d);
        }
    }

    #[test]
    fn nearest_weekday_moves_at_most_one_day(serial in -200_000i32..200_000) {
        let d = Date::from_serial(serial).unwrap();
        let shifted = shift_weekend_to_nearest_weekday(d);
        prop_assert!(shifted.weekday().is_weekday());
        prop_assert!((shifted - d).abs() <= 1);
    }
}

// ─── Locators ─────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn locators_stay_in_month(y in 1583i32..4100, m in 1u8..=12, w in 1u8..=7) {
        let month = Month::from_number(m).unwrap();
        let weekday = Weekday::from_ordinal(w).unwrap();

        let first = first_weekday(y, month, weekday).unwrap();
        prop_assert_eq!(first.weekday(), weekday);
        prop_assert_eq!((first.year(), first.month()), (y, m));
        prop_assert!(first.day_of_month() <= 7);

        let second = second_weekday(y, month, weekday).unwrap();
        prop_assert_eq!(second - first, 7);

        let last = last_weekday(y, month, weekday).unwrap();
        prop_assert_eq!(last.weekday(), weekday);
        prop_assert_eq!(last.month(), m);
        prop_assert!(last.day_of_month() + 7 > days_in_month(y, m));
    }

    #[test]
    fn fourth_thursday_follows_offset_table(y in 1583i32..4100, m in 1u8..=12) {
        let month = Month::from_number(m).unwrap();
        let d = nth_weekday(y, month, Weekday::Thursday, 4).unwrap();
        prop_assert_eq!(d.weekday(), Weekday::Thursday);
        prop_assert!((19..=25).contains(&d.day_of_month()));
        // Months starting Friday to Sunday get the third Thursday.
        let first = Date::from_ymd(y, m, 1).unwrap().weekday();
        let third = matches!(first, Weekday::Friday | Weekday::Saturday | Weekday::Sunday);
        let expected = first_weekday(y, month, Weekday::Thursday).unwrap()
            + if third { 14 } else { 21 };
        prop_assert_eq!(d, expected);
    }

    #[test]
    fn date_components_roundtrip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
    }
}

#[test]
fn third_monday_follows_offset_table() {
    // Months starting Monday..Saturday give a real third Monday.
    for (y, m) in [(2024, 1), (2024, 10), (2024, 5), (2024, 2), (2024, 3), (2024, 6)] {
        let d = nth_weekday(y, Month::from_number(m).unwrap(), Weekday::Monday, 3).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday, "{y}-{m:02}");
        assert!((15..=21).contains(&d.day_of_month()));
    }
    // September 2024 starts on a Sunday: the table lands on the 17th.
    let d = nth_weekday(2024, Month::September, Weekday::Monday, 3).unwrap();
    assert_eq!(d, date(2024, 9, 17));
}
