//! Computus: the Easter-date algorithm family.

use chrono::NaiveDate;

use crate::model::EasterMethod;

/// ## Summary
/// Computes Easter Sunday for the given year using the requested method.
///
/// Returns `None` for non-positive years and for results outside the
/// representable date range. For [`EasterMethod::Julian`] the returned
/// month/day are a date in the Julian calendar, carried uninterpreted;
/// [`EasterMethod::Orthodox`] converts that date to the Gregorian calendar.
#[must_use]
pub fn easter_sunday(method: EasterMethod, year: i32) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }
    match method {
        EasterMethod::Gregorian => gregorian(year),
        EasterMethod::Julian => {
            let (month, day) = julian_month_day(year);
            NaiveDate::from_ymd_opt(year, month, day)
        }
        EasterMethod::Orthodox => {
            let (month, day) = julian_month_day(year);
            julian_to_gregorian(year, month, day)
        }
    }
}

/// Meeus/Jones/Butcher Gregorian computus.
#[expect(
    clippy::many_single_char_names,
    reason = "variable names follow the published algorithm"
)]
fn gregorian(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// Julian computus (Meeus). The result is a month/day in the Julian
/// calendar.
#[expect(
    clippy::many_single_char_names,
    reason = "variable names follow the published algorithm"
)]
fn julian_month_day(year: i32) -> (u32, u32) {
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    (
        u32::try_from(month).unwrap_or_default(),
        u32::try_from(day).unwrap_or_default(),
    )
}

/// Converts a Julian-calendar date to the Gregorian calendar via Julian day
/// numbers.
#[expect(
    clippy::many_single_char_names,
    reason = "variable names follow the published algorithm"
)]
fn julian_to_gregorian(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    // Julian day number of a Julian-calendar date.
    let month = i64::from(month);
    let day = i64::from(day);
    let a = (14 - month) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = month + 12 * a - 3;
    let jdn = day + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083;

    // Gregorian calendar date from the Julian day number.
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let g_day = e - (153 * m + 2) / 5 + 1;
    let g_month = m + 3 - 12 * (m / 10);
    let g_year = 100 * b + d - 4800 + m / 10;
    NaiveDate::from_ymd_opt(
        i32::try_from(g_year).ok()?,
        u32::try_from(g_month).ok()?,
        u32::try_from(g_day).ok()?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn gregorian_easter_known_years() {
        assert_eq!(
            easter_sunday(EasterMethod::Gregorian, 2024),
            Some(date(2024, 3, 31))
        );
        assert_eq!(
            easter_sunday(EasterMethod::Gregorian, 2025),
            Some(date(2025, 4, 20))
        );
        assert_eq!(
            easter_sunday(EasterMethod::Gregorian, 2000),
            Some(date(2000, 4, 23))
        );
        assert_eq!(
            easter_sunday(EasterMethod::Gregorian, 1961),
            Some(date(1961, 4, 2))
        );
    }

    #[test]
    fn julian_easter_is_a_julian_calendar_date() {
        // 2024: Julian computus lands on April 22 (Julian reckoning).
        assert_eq!(
            easter_sunday(EasterMethod::Julian, 2024),
            Some(date(2024, 4, 22))
        );
    }

    #[test]
    fn orthodox_easter_known_years() {
        // Orthodox Easter: Julian computus expressed in the Gregorian
        // calendar (13-day shift in the 20th/21st centuries).
        assert_eq!(
            easter_sunday(EasterMethod::Orthodox, 2024),
            Some(date(2024, 5, 5))
        );
        assert_eq!(
            easter_sunday(EasterMethod::Orthodox, 2025),
            Some(date(2025, 4, 20))
        );
        assert_eq!(
            easter_sunday(EasterMethod::Orthodox, 2016),
            Some(date(2016, 5, 1))
        );
    }

    #[test]
    fn non_positive_years_yield_nothing() {
        assert_eq!(easter_sunday(EasterMethod::Gregorian, 0), None);
        assert_eq!(easter_sunday(EasterMethod::Julian, -5), None);
    }
}
