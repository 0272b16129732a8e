//! Holiday rule expansion.

use std::ops::RangeInclusive;

use cadence_core::{Occurrence, OccurrenceSet, calendar};
use chrono::{Datelike, Days, NaiveDate};

use super::easter::easter_sunday;
use crate::model::{HolidayKind, HolidayRule};

impl HolidayRule {
    /// ## Summary
    /// Resolves the rule to its concrete date in `year`, if any.
    ///
    /// Returns `None` when the year is outside the rule's bounds, when the
    /// date does not exist that year (February 29 in a common year, a fifth
    /// weekday occurrence in a four-occurrence month), or when the computus
    /// has no result for the year.
    #[must_use]
    pub fn occurrence_in(&self, year: i32) -> Option<Occurrence> {
        if !self.applies_to(year) {
            return None;
        }
        let date = match &self.kind {
            HolidayKind::Fixed { month, day } => NaiveDate::from_ymd_opt(year, *month, *day)?,
            HolidayKind::Floating {
                month,
                weekday,
                occurrence,
            } => calendar::nth_weekday_of_month(year, *month, *weekday, *occurrence)?,
            HolidayKind::EasterRelative {
                method,
                offset_days,
            } => easter_sunday(*method, year)?
                .checked_add_signed(chrono::TimeDelta::days(i64::from(*offset_days)))?,
        };
        let date = if self.adjust_for_weekend() {
            adjust_for_weekend(date)?
        } else {
            date
        };
        Some(Occurrence::date(date).with_description(self.description()))
    }
}

/// ## Summary
/// Expands every rule over an inclusive year range into a single ordered
/// occurrence set, with each occurrence carrying its rule's description.
///
/// Years outside a rule's own bounds are skipped per rule; absent dates
/// contribute nothing. When two rules land on the same date, the first
/// rule's description is kept.
#[must_use]
#[tracing::instrument(skip(rules), fields(rule_count = rules.len()))]
pub fn expand_holidays(rules: &[HolidayRule], years: RangeInclusive<i32>) -> OccurrenceSet {
    let mut set = OccurrenceSet::new();
    for year in years {
        for rule in rules {
            if let Some(occurrence) = rule.occurrence_in(year) {
                set.insert(occurrence);
            }
        }
    }
    tracing::debug!(count = set.len(), "holiday expansion complete");
    set
}

/// Shifts weekend dates to the adjacent workday: Saturday to the preceding
/// Friday, Sunday to the following Monday. Crosses month and year boundaries
/// when the arithmetic requires it.
fn adjust_for_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        chrono::Weekday::Sat => date.checked_sub_days(Days::new(1)),
        chrono::Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EasterMethod;
    use cadence_core::Weekday;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn fixed_holiday_resolves_directly() {
        let christmas = HolidayRule::fixed("Christmas Day", 12, 25).unwrap();
        let occurrence = christmas.occurrence_in(2024).unwrap();
        assert_eq!(occurrence.naive_date(), date(2024, 12, 25));
        assert!(!occurrence.has_time());
        assert_eq!(occurrence.description(), Some("Christmas Day"));
    }

    #[test]
    fn fixed_leap_day_skips_common_years() {
        let leap_day = HolidayRule::fixed("Leap Day", 2, 29).unwrap();
        assert!(leap_day.occurrence_in(2024).is_some());
        assert!(leap_day.occurrence_in(2023).is_none());
    }

    #[test]
    fn floating_last_monday_of_may() {
        let memorial = HolidayRule::floating("Memorial Day", 5, Weekday::Monday, -1).unwrap();
        assert_eq!(
            memorial.occurrence_in(2024).unwrap().naive_date(),
            date(2024, 5, 27)
        );
        assert_eq!(
            memorial.occurrence_in(2025).unwrap().naive_date(),
            date(2025, 5, 26)
        );
        assert_eq!(
            memorial.occurrence_in(2026).unwrap().naive_date(),
            date(2026, 5, 25)
        );
    }

    #[test]
    fn floating_fifth_occurrence_can_be_absent() {
        // May 2024 has four Mondays but five Wednesdays.
        let fifth_monday = HolidayRule::floating("x", 5, Weekday::Monday, 5).unwrap();
        assert!(fifth_monday.occurrence_in(2024).is_none());
        let fifth_wednesday = HolidayRule::floating("x", 5, Weekday::Wednesday, 5).unwrap();
        assert_eq!(
            fifth_wednesday.occurrence_in(2024).unwrap().naive_date(),
            date(2024, 5, 29)
        );
    }

    #[test]
    fn easter_relative_offsets() {
        let good_friday =
            HolidayRule::easter_relative("Good Friday", EasterMethod::Gregorian, -2);
        assert_eq!(
            good_friday.occurrence_in(2024).unwrap().naive_date(),
            date(2024, 3, 29)
        );
        let easter_monday =
            HolidayRule::easter_relative("Easter Monday", EasterMethod::Gregorian, 1);
        assert_eq!(
            easter_monday.occurrence_in(2025).unwrap().naive_date(),
            date(2025, 4, 21)
        );
    }

    #[test]
    fn weekend_adjustment_shifts_saturday_back_and_sunday_forward() {
        // 2022-12-25 was a Sunday; 2021-12-25 was a Saturday.
        let christmas = HolidayRule::fixed("Christmas Day", 12, 25)
            .unwrap()
            .with_weekend_adjustment();
        assert_eq!(
            christmas.occurrence_in(2022).unwrap().naive_date(),
            date(2022, 12, 26)
        );
        assert_eq!(
            christmas.occurrence_in(2021).unwrap().naive_date(),
            date(2021, 12, 24)
        );
    }

    #[test]
    fn weekend_adjustment_crosses_year_boundaries() {
        // 2022-01-01 was a Saturday: observed on 2021-12-31.
        let new_years = HolidayRule::fixed("New Year's Day", 1, 1)
            .unwrap()
            .with_weekend_adjustment();
        assert_eq!(
            new_years.occurrence_in(2022).unwrap().naive_date(),
            date(2021, 12, 31)
        );
        // 2023-12-31 was a Sunday: observed on 2024-01-01.
        let new_years_eve = HolidayRule::fixed("New Year's Eve", 12, 31)
            .unwrap()
            .with_weekend_adjustment();
        assert_eq!(
            new_years_eve.occurrence_in(2023).unwrap().naive_date(),
            date(2024, 1, 1)
        );
    }

    #[test]
    fn expand_respects_year_bounds_and_sorts() {
        let rules = vec![
            HolidayRule::fixed("Christmas Day", 12, 25).unwrap(),
            HolidayRule::fixed("New Year's Day", 1, 1)
                .unwrap()
                .with_year_range(Some(2025), None)
                .unwrap(),
            HolidayRule::floating("Memorial Day", 5, Weekday::Monday, -1).unwrap(),
        ];
        let set = expand_holidays(&rules, 2024..=2025);
        let dates: Vec<_> = set.iter().map(Occurrence::naive_date).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 5, 27),
                date(2024, 12, 25),
                date(2025, 1, 1),
                date(2025, 5, 26),
                date(2025, 12, 25),
            ]
        );
    }
}
