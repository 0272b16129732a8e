//! Pure calendar arithmetic shared by the recurrence and holiday engines.
//!
//! Everything here is a stateless function over proleptic Gregorian dates.
//! Week-based helpers take a configurable week-start day; week 1 of a year is
//! the first week containing at least four days of that year, generalizing
//! the ISO 8601 rule to any week start.

use chrono::{Datelike, Days, NaiveDate};

use crate::ordinal::SignedOrdinal;
use crate::weekday::Weekday;

/// Gregorian leap-year test: divisible by 4, not by 100 unless also by 400.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month.
///
/// ## Panics
///
/// Panics if `month` is outside `1..=12`.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("month out of range"),
    }
}

/// Number of days in the given year.
#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Day of the week for a date.
#[must_use]
pub fn day_of_week(date: NaiveDate) -> Weekday {
    Weekday::from(date.weekday())
}

/// Resolves the nth occurrence of a weekday inside the inclusive date range.
///
/// Positive ordinals count forward from `first`, negative ordinals backward
/// from `last`. Returns `None` when the requested occurrence does not exist
/// in the range (for example the fifth Monday of a four-Monday month).
#[must_use]
pub fn nth_weekday_in_range(
    first: NaiveDate,
    last: NaiveDate,
    weekday: Weekday,
    ordinal: SignedOrdinal,
) -> Option<NaiveDate> {
    if last < first {
        return None;
    }
    let steps = u64::from(ordinal.magnitude()).checked_sub(1)?;
    let candidate = if ordinal.is_from_end() {
        let back = day_of_week(last).days_since(weekday);
        last.checked_sub_days(Days::new(u64::from(back)))?
            .checked_sub_days(Days::new(7 * steps))?
    } else {
        let forward = weekday.days_since(day_of_week(first));
        first
            .checked_add_days(Days::new(u64::from(forward)))?
            .checked_add_days(Days::new(7 * steps))?
    };
    (candidate >= first && candidate <= last).then_some(candidate)
}

/// Every occurrence of a weekday inside the inclusive date range, ascending.
#[must_use]
pub fn weekdays_in_range(first: NaiveDate, last: NaiveDate, weekday: Weekday) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let forward = weekday.days_since(day_of_week(first));
    let Some(mut cursor) = first.checked_add_days(Days::new(u64::from(forward))) else {
        return dates;
    };
    while cursor <= last {
        dates.push(cursor);
        match cursor.checked_add_days(Days::new(7)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    dates
}

/// Resolves the nth occurrence of a weekday within a month.
///
/// Ordinals `1..=5` count forward from the 1st, negative ordinals backward
/// from the last day. Returns `None` when the occurrence does not exist in
/// that month.
#[must_use]
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    ordinal: SignedOrdinal,
) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
    nth_weekday_in_range(first, last, weekday, ordinal)
}

/// Start of the week containing `date`, for a week beginning on `week_start`.
#[must_use]
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> Option<NaiveDate> {
    let offset = day_of_week(date).days_since(week_start);
    date.checked_sub_days(Days::new(u64::from(offset)))
}

/// Start date of week 1 of the given year.
///
/// Week 1 is the first week (beginning on `week_start`) with at least four
/// days in the new year; its start may fall in the previous December.
#[must_use]
pub fn first_week_start(year: i32, week_start: Weekday) -> Option<NaiveDate> {
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = day_of_week(jan_first).days_since(week_start);
    let start = jan_first.checked_sub_days(Days::new(u64::from(offset)))?;
    if 7 - offset >= 4 {
        Some(start)
    } else {
        start.checked_add_days(Days::new(7))
    }
}

/// Number of numbered weeks in the given year (52 or 53).
#[must_use]
pub fn weeks_in_year(year: i32, week_start: Weekday) -> Option<u32> {
    let this_year = first_week_start(year, week_start)?;
    let next_year = first_week_start(year.checked_add(1)?, week_start)?;
    let days = next_year.signed_duration_since(this_year).num_days();
    u32::try_from(days / 7).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ordinal(value: i16) -> SignedOrdinal {
        SignedOrdinal::new(value).unwrap()
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
    }

    #[test]
    fn weekday_of_known_dates() {
        assert_eq!(day_of_week(date(2024, 5, 27)), Weekday::Monday);
        assert_eq!(day_of_week(date(2000, 1, 1)), Weekday::Saturday);
    }

    #[test]
    fn nth_weekday_forward_and_backward() {
        // May 2024: Mondays fall on 6, 13, 20, 27.
        assert_eq!(
            nth_weekday_of_month(2024, 5, Weekday::Monday, ordinal(1)),
            Some(date(2024, 5, 6))
        );
        assert_eq!(
            nth_weekday_of_month(2024, 5, Weekday::Monday, ordinal(-1)),
            Some(date(2024, 5, 27))
        );
        assert_eq!(
            nth_weekday_of_month(2024, 5, Weekday::Monday, ordinal(5)),
            None
        );
        // May 2024 has five Wednesdays.
        assert_eq!(
            nth_weekday_of_month(2024, 5, Weekday::Wednesday, ordinal(5)),
            Some(date(2024, 5, 29))
        );
    }

    #[test]
    fn weekdays_in_month_range() {
        let mondays = weekdays_in_range(date(2024, 5, 1), date(2024, 5, 31), Weekday::Monday);
        assert_eq!(
            mondays,
            vec![
                date(2024, 5, 6),
                date(2024, 5, 13),
                date(2024, 5, 20),
                date(2024, 5, 27)
            ]
        );
    }

    #[test]
    fn week_start_resolution() {
        // 2024-05-29 is a Wednesday.
        assert_eq!(
            week_start_of(date(2024, 5, 29), Weekday::Monday),
            Some(date(2024, 5, 27))
        );
        assert_eq!(
            week_start_of(date(2024, 5, 29), Weekday::Sunday),
            Some(date(2024, 5, 26))
        );
    }

    #[test]
    fn week_numbering_matches_iso_for_monday_weeks() {
        // ISO: week 1 of 2020 starts 2019-12-30 and 2020 has 53 weeks.
        assert_eq!(
            first_week_start(2020, Weekday::Monday),
            Some(date(2019, 12, 30))
        );
        assert_eq!(weeks_in_year(2020, Weekday::Monday), Some(53));
        // ISO: week 1 of 2021 starts 2021-01-04.
        assert_eq!(
            first_week_start(2021, Weekday::Monday),
            Some(date(2021, 1, 4))
        );
        assert_eq!(weeks_in_year(2021, Weekday::Monday), Some(52));
    }
}
