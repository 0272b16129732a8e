//! Recurrence pattern expansion.
//!
//! Expansion is two-phase: step forward through periods of `interval` units
//! of the pattern frequency starting at the seed, then build the candidate
//! date/times implied by the BY rules inside each period. Candidates are
//! position-filtered (BYSETPOS), given their time of day, checked against
//! the seed, the end condition and the caller's window, and accumulated in
//! ascending order. Explicit additions and exclusions are merged at the end.

use cadence_core::{Occurrence, OccurrenceSet, Weekday, calendar};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::error::{RecurError, RecurResult};
use crate::model::{EndCondition, Frequency, RecurrencePattern, RecurrenceSet};

/// Consecutive candidate-free periods tolerated before a rule is declared
/// exhausted. Large enough never to truncate a legitimate rule (the longest
/// real gap, a leap-day rule stepped daily, is about 2 900 empty periods)
/// while still bounding pathological rules like a February 31st.
const MAX_EMPTY_PERIODS: u32 = 100_000;

/// Options for a single expansion call.
#[derive(Debug, Clone)]
pub struct ExpansionOptions {
    /// Maximum number of occurrences to generate.
    pub max_instances: usize,

    /// Start of the expansion window (inclusive). Occurrences before this
    /// are still generated, and still count toward a `Count` end condition,
    /// but are not returned.
    pub range_start: Option<NaiveDateTime>,

    /// End of the expansion window (inclusive). Required when the pattern
    /// itself is unbounded.
    pub range_end: Option<NaiveDateTime>,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            max_instances: 1000,
            range_start: None,
            range_end: None,
        }
    }
}

impl ExpansionOptions {
    /// Creates expansion options with an inclusive time window.
    #[must_use]
    pub fn with_range(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            range_start: Some(start),
            range_end: Some(end),
            ..Self::default()
        }
    }

    /// Sets the maximum number of instances.
    #[must_use]
    pub fn with_max_instances(mut self, max: usize) -> Self {
        self.max_instances = max;
        self
    }
}

/// Non-fatal annotation on an expansion result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionNote {
    /// The consecutive-empty-period cap was hit: the rule's constraints can
    /// no longer be satisfied and whatever was accumulated is the complete
    /// result.
    ExhaustedSearch,
    /// `max_instances` was reached before the pattern's own end condition.
    LimitReached,
}

/// Result of an expansion: the ordered occurrence set plus an optional
/// annotation. An empty set is a valid, non-error outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub dates: OccurrenceSet,
    pub note: Option<ExpansionNote>,
}

impl RecurrencePattern {
    /// ## Summary
    /// Expands the pattern into an ordered, duplicate-free occurrence set.
    ///
    /// Equivalent to expanding a [`RecurrenceSet`] with no addenda.
    ///
    /// ## Errors
    ///
    /// Returns [`RecurError::BoundsRequired`] when the pattern is unbounded
    /// and `options` carries no window end; generation must always be
    /// finite. No error is possible once generation has begun: degenerate
    /// rules yield an empty or short set, optionally annotated.
    #[tracing::instrument(skip_all, fields(frequency = %self.frequency, interval = self.interval))]
    pub fn expand(&self, options: &ExpansionOptions) -> RecurResult<Expansion> {
        let (occurrences, note) = Expander::new(self).run(options)?;
        let dates: OccurrenceSet = occurrences.into_iter().collect();
        tracing::debug!(count = dates.len(), "expansion complete");
        Ok(Expansion { dates, note })
    }
}

impl RecurrenceSet {
    /// ## Summary
    /// Expands the pattern and merges the addenda: the generated set is
    /// unioned with the explicit extra dates, then any occurrence produced
    /// by the exclusion rule over the same window is removed, then the
    /// explicit exclusion dates are removed.
    ///
    /// ## Errors
    ///
    /// Returns [`RecurError::BoundsRequired`] when the pattern is unbounded
    /// and `options` carries no window end.
    #[tracing::instrument(skip_all, fields(frequency = %self.pattern.frequency, interval = self.pattern.interval))]
    pub fn expand(&self, options: &ExpansionOptions) -> RecurResult<Expansion> {
        let (occurrences, mut note) = Expander::new(&self.pattern).run(options)?;
        let mut dates: OccurrenceSet = occurrences.into_iter().collect();

        for rdate in &self.rdates {
            if within_window(rdate.value(), options) {
                dates.insert(rdate.clone());
            }
        }

        if let Some(exrule) = &self.exrule
            && let Some(last) = dates.last()
        {
            // The exclusion rule is expanded over the same window, capped at
            // the last generated occurrence so an unbounded exclusion rule
            // stays finite.
            let exrule_options = ExpansionOptions {
                max_instances: options.max_instances,
                range_start: options.range_start,
                range_end: Some(last.value()),
            };
            let (excluded, _) = Expander::new(exrule).run(&exrule_options)?;
            for occurrence in excluded {
                dates.remove(&occurrence);
            }
        }

        for exdate in &self.exdates {
            dates.remove(exdate);
        }

        if dates.len() > options.max_instances {
            dates.truncate(options.max_instances);
            if note.is_none() {
                note = Some(ExpansionNote::LimitReached);
            }
        }
        tracing::debug!(count = dates.len(), "expansion complete");
        Ok(Expansion { dates, note })
    }
}

fn within_window(value: NaiveDateTime, options: &ExpansionOptions) -> bool {
    options.range_start.is_none_or(|start| value >= start)
        && options.range_end.is_none_or(|end| value <= end)
}

/// One period of the pattern frequency, anchored by the seed.
enum Period {
    Year(i32),
    Month(i32, u32),
    /// The date inside the week carrying the seed's weekday.
    Week(NaiveDate),
    Day(NaiveDate),
    Hour(NaiveDateTime),
    Minute(NaiveDateTime),
    Second(NaiveDateTime),
}

impl Period {
    /// Earliest date/time this period could produce. Periods are strictly
    /// increasing, so once a period starts past the effective end the loop
    /// can stop.
    fn start(&self, week_start: Weekday) -> Option<NaiveDateTime> {
        match *self {
            Self::Year(year) => Some(midnight(NaiveDate::from_ymd_opt(year, 1, 1)?)),
            Self::Month(year, month) => Some(midnight(NaiveDate::from_ymd_opt(year, month, 1)?)),
            Self::Week(cursor) => Some(midnight(calendar::week_start_of(cursor, week_start)?)),
            Self::Day(date) => Some(midnight(date)),
            Self::Hour(stamp) => stamp.with_minute(0)?.with_second(0),
            Self::Minute(stamp) => stamp.with_second(0),
            Self::Second(stamp) => Some(stamp),
        }
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Expander for a single validated pattern.
struct Expander<'a> {
    pattern: &'a RecurrencePattern,
    seed_value: NaiveDateTime,
    /// Whether produced occurrences carry a time component.
    timed: bool,
}

impl<'a> Expander<'a> {
    fn new(pattern: &'a RecurrencePattern) -> Self {
        Self {
            pattern,
            seed_value: pattern.seed.value(),
            timed: pattern.seed.has_time() || pattern.has_time_rules(),
        }
    }

    /// Runs the period loop and returns accumulated occurrences in
    /// ascending order.
    fn run(
        &self,
        options: &ExpansionOptions,
    ) -> RecurResult<(Vec<Occurrence>, Option<ExpansionNote>)> {
        if matches!(self.pattern.end, EndCondition::Unbounded) && options.range_end.is_none() {
            return Err(RecurError::BoundsRequired);
        }
        let until = match &self.pattern.end {
            EndCondition::Until(cutoff) => Some(cutoff.value()),
            EndCondition::Unbounded | EndCondition::Count(_) => None,
        };
        let count_target = match self.pattern.end {
            EndCondition::Count(count) => Some(usize::try_from(count).unwrap_or(usize::MAX)),
            EndCondition::Unbounded | EndCondition::Until(_) => None,
        };
        let hard_end = match (until, options.range_end) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        let mut results: Vec<Occurrence> = Vec::new();
        let mut counted: usize = 0;
        let mut empty_streak: u32 = 0;
        let mut note = None;
        let mut index: i64 = 0;

        'periods: loop {
            let Some(period) = self.period(index) else {
                break;
            };
            index += 1;
            let Some(start) = period.start(self.pattern.week_start) else {
                break;
            };
            if let Some(end) = hard_end
                && start > end
            {
                break;
            }

            let mut produced = false;
            for stamp in self.period_candidates(&period) {
                if stamp < self.seed_value {
                    continue;
                }
                if let Some(end) = hard_end
                    && stamp > end
                {
                    break 'periods;
                }
                counted += 1;
                produced = true;
                if options.range_start.is_none_or(|range_start| stamp >= range_start) {
                    results.push(self.occurrence(stamp));
                    if results.len() >= options.max_instances {
                        if count_target.is_none_or(|target| counted < target) {
                            note = Some(ExpansionNote::LimitReached);
                        }
                        break 'periods;
                    }
                }
                if let Some(target) = count_target
                    && counted >= target
                {
                    break 'periods;
                }
            }

            if produced {
                empty_streak = 0;
            } else {
                empty_streak += 1;
                if empty_streak >= MAX_EMPTY_PERIODS {
                    tracing::debug!(
                        periods = empty_streak,
                        "empty-period cap reached, declaring the rule exhausted"
                    );
                    note = Some(ExpansionNote::ExhaustedSearch);
                    break;
                }
            }
        }
        Ok((results, note))
    }

    /// Resolves the period at `index` steps of `interval` from the seed.
    ///
    /// Each period is derived from the index, not from the previous period,
    /// so a skipped short month cannot shift later periods.
    fn period(&self, index: i64) -> Option<Period> {
        let step = index.checked_mul(i64::from(self.pattern.interval))?;
        let seed = self.seed_value;
        match self.pattern.frequency {
            Frequency::Yearly => {
                let year = i32::try_from(i64::from(seed.date().year()) + step).ok()?;
                Some(Period::Year(year))
            }
            Frequency::Monthly => {
                let months =
                    i64::from(seed.date().year()) * 12 + i64::from(seed.date().month0()) + step;
                let year = i32::try_from(months.div_euclid(12)).ok()?;
                let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;
                Some(Period::Month(year, month))
            }
            Frequency::Weekly => Some(Period::Week(
                seed.date().checked_add_signed(TimeDelta::try_weeks(step)?)?,
            )),
            Frequency::Daily => Some(Period::Day(
                seed.date().checked_add_signed(TimeDelta::try_days(step)?)?,
            )),
            Frequency::Hourly => Some(Period::Hour(
                seed.checked_add_signed(TimeDelta::try_hours(step)?)?,
            )),
            Frequency::Minutely => Some(Period::Minute(
                seed.checked_add_signed(TimeDelta::try_minutes(step)?)?,
            )),
            Frequency::Secondly => Some(Period::Second(
                seed.checked_add_signed(TimeDelta::try_seconds(step)?)?,
            )),
        }
    }

    /// Candidate date/times of one period, sorted ascending, after BYSETPOS
    /// selection and time assignment.
    fn period_candidates(&self, period: &Period) -> Vec<NaiveDateTime> {
        match *period {
            Period::Year(year) => self.finish_dates(self.dates_in_year(year)),
            Period::Month(year, month) => self.finish_dates(self.dates_in_month(year, month)),
            Period::Week(cursor) => self.finish_dates(self.dates_in_week(cursor)),
            Period::Day(date) => self.finish_dates(self.dates_for_day(date)),
            Period::Hour(stamp) | Period::Minute(stamp) | Period::Second(stamp) => {
                let mut stamps = self.stamps_for_sub_daily(stamp);
                stamps.sort_unstable();
                stamps.dedup();
                self.apply_set_pos(stamps)
            }
        }
    }

    /// Sorts and de-duplicates date candidates, applies BYSETPOS, then
    /// cross-applies the time components.
    fn finish_dates(&self, mut dates: Vec<NaiveDate>) -> Vec<NaiveDateTime> {
        dates.sort_unstable();
        dates.dedup();
        let dates = self.apply_set_pos(dates);
        self.cross_times(&dates)
    }

    /// Keeps only the named 1-based positions of the sorted candidate set.
    /// A no-op unless some other rule produced more than one candidate.
    fn apply_set_pos<T: Copy>(&self, items: Vec<T>) -> Vec<T> {
        let positions = &self.pattern.by_set_pos;
        if positions.is_empty() || items.len() <= 1 {
            return items;
        }
        let length = u32::try_from(items.len()).unwrap_or(u32::MAX);
        let mut keep: Vec<u32> = positions
            .iter()
            .filter_map(|position| position.resolve(length))
            .collect();
        keep.sort_unstable();
        keep.dedup();
        keep.into_iter()
            .filter_map(|position| {
                let index = usize::try_from(position).ok()?.checked_sub(1)?;
                items.get(index).copied()
            })
            .collect()
    }

    /// Candidate dates of a yearly period.
    fn dates_in_year(&self, year: i32) -> Vec<NaiveDate> {
        let pattern = self.pattern;
        let mut dates: Vec<NaiveDate>;
        if !pattern.by_day.is_empty() {
            if !pattern.by_week_no.is_empty() {
                dates = self
                    .week_no_starts(year)
                    .into_iter()
                    .flat_map(|start| {
                        pattern.by_day.iter().filter_map(move |entry| {
                            let offset = entry.weekday.days_since(pattern.week_start);
                            start.checked_add_days(Days::new(u64::from(offset)))
                        })
                    })
                    .collect();
                dates.retain(|date| self.matches_by_month(date.month()));
            } else if pattern.by_month.is_empty() {
                dates = self.by_day_dates_in_year(year);
            } else {
                dates = pattern
                    .by_month
                    .iter()
                    .flat_map(|&month| self.by_day_dates_in_month(year, u32::from(month)))
                    .collect();
            }
            dates.retain(|date| self.matches_by_year_day(*date));
            dates.retain(|date| self.matches_by_month_day(*date));
        } else if !pattern.by_week_no.is_empty() {
            // Without BYDAY every day of each selected week qualifies.
            dates = self
                .week_no_starts(year)
                .into_iter()
                .flat_map(|start| {
                    (0..7_u64).filter_map(move |offset| start.checked_add_days(Days::new(offset)))
                })
                .collect();
            dates.retain(|date| {
                self.matches_by_month(date.month())
                    && self.matches_by_year_day(*date)
                    && self.matches_by_month_day(*date)
            });
        } else if !pattern.by_month.is_empty() {
            dates = pattern
                .by_month
                .iter()
                .flat_map(|&month| self.dates_in_month(year, u32::from(month)))
                .collect();
            dates.retain(|date| self.matches_by_year_day(*date));
        } else if !pattern.by_month_day.is_empty() {
            dates = (1..=12)
                .flat_map(|month| self.month_day_dates(year, month))
                .collect();
            dates.retain(|date| self.matches_by_year_day(*date));
        } else if !pattern.by_year_day.is_empty() {
            dates = self.year_day_dates(year);
        } else {
            // No date rule at all: the seed's month and day, skipped in
            // years where the date does not exist (a February 29 seed).
            let seed_date = self.seed_value.date();
            dates = NaiveDate::from_ymd_opt(year, seed_date.month(), seed_date.day())
                .into_iter()
                .collect();
        }
        dates
    }

    /// Candidate dates of a monthly period (also used per month at yearly
    /// frequency).
    fn dates_in_month(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        if !self.matches_by_month(month) {
            return Vec::new();
        }
        let pattern = self.pattern;
        if !pattern.by_month_day.is_empty() && pattern.by_day.is_empty() {
            self.month_day_dates(year, month)
        } else if pattern.by_day.is_empty() {
            // No date rule: the seed's day of month, skipped in months where
            // it does not exist.
            let day = self.seed_value.date().day();
            NaiveDate::from_ymd_opt(year, month, day)
                .into_iter()
                .collect()
        } else {
            let mut dates = self.by_day_dates_in_month(year, month);
            if !pattern.by_month_day.is_empty() {
                dates.retain(|date| self.matches_by_month_day(*date));
            }
            dates
        }
    }

    /// Candidate dates of a weekly period. `cursor` is the date carrying the
    /// seed's weekday inside the week.
    fn dates_in_week(&self, cursor: NaiveDate) -> Vec<NaiveDate> {
        let pattern = self.pattern;
        let mut dates = if pattern.by_day.is_empty() {
            vec![cursor]
        } else {
            let Some(start) = calendar::week_start_of(cursor, pattern.week_start) else {
                return Vec::new();
            };
            pattern
                .by_day
                .iter()
                .filter_map(|entry| {
                    let offset = entry.weekday.days_since(pattern.week_start);
                    start.checked_add_days(Days::new(u64::from(offset)))
                })
                .collect()
        };
        dates.retain(|date| self.matches_by_month(date.month()));
        dates
    }

    /// The daily period's sole candidate, if it passes the date filters.
    fn dates_for_day(&self, date: NaiveDate) -> Vec<NaiveDate> {
        if self.matches_by_month(date.month())
            && self.matches_by_month_day(date)
            && self.matches_weekday(date)
        {
            vec![date]
        } else {
            Vec::new()
        }
    }

    /// Candidate stamps of an hourly/minutely/secondly period.
    fn stamps_for_sub_daily(&self, cursor: NaiveDateTime) -> Vec<NaiveDateTime> {
        let date = cursor.date();
        if !(self.matches_by_month(date.month())
            && self.matches_by_year_day(date)
            && self.matches_by_month_day(date)
            && self.matches_weekday(date)
            && self.matches_by_hour(cursor.hour()))
        {
            return Vec::new();
        }
        match self.pattern.frequency {
            Frequency::Hourly => {
                let minutes = self.minute_values(cursor.minute());
                let seconds = self.second_values(cursor.second());
                let mut stamps = Vec::with_capacity(minutes.len() * seconds.len());
                for &minute in &minutes {
                    for &second in &seconds {
                        if let Some(time) =
                            NaiveTime::from_hms_opt(cursor.hour(), minute, second)
                        {
                            stamps.push(date.and_time(time));
                        }
                    }
                }
                stamps
            }
            Frequency::Minutely => {
                if !self.matches_by_minute(cursor.minute()) {
                    return Vec::new();
                }
                self.second_values(cursor.second())
                    .into_iter()
                    .filter_map(|second| {
                        NaiveTime::from_hms_opt(cursor.hour(), cursor.minute(), second)
                            .map(|time| date.and_time(time))
                    })
                    .collect()
            }
            Frequency::Secondly => {
                if self.matches_by_minute(cursor.minute())
                    && self.matches_by_second(cursor.second())
                {
                    vec![cursor]
                } else {
                    Vec::new()
                }
            }
            Frequency::Daily | Frequency::Weekly | Frequency::Monthly | Frequency::Yearly => {
                Vec::new()
            }
        }
    }

    /// Resolves BYMONTHDAY entries against one month.
    fn month_day_dates(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        let length = calendar::days_in_month(year, month);
        self.pattern
            .by_month_day
            .iter()
            .filter_map(|ordinal| {
                let day = ordinal.resolve(length)?;
                NaiveDate::from_ymd_opt(year, month, day)
            })
            .collect()
    }

    /// Resolves BYYEARDAY entries against one year.
    fn year_day_dates(&self, year: i32) -> Vec<NaiveDate> {
        let length = calendar::days_in_year(year);
        let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            return Vec::new();
        };
        self.pattern
            .by_year_day
            .iter()
            .filter_map(|ordinal| {
                let day = ordinal.resolve(length)?;
                first.checked_add_days(Days::new(u64::from(day) - 1))
            })
            .collect()
    }

    /// Start dates of the weeks named by BYWEEKNO.
    fn week_no_starts(&self, year: i32) -> Vec<NaiveDate> {
        let week_start = self.pattern.week_start;
        let Some(total) = calendar::weeks_in_year(year, week_start) else {
            return Vec::new();
        };
        let Some(first) = calendar::first_week_start(year, week_start) else {
            return Vec::new();
        };
        self.pattern
            .by_week_no
            .iter()
            .filter_map(|ordinal| {
                let week = ordinal.resolve(total)?;
                first.checked_add_days(Days::new(7 * (u64::from(week) - 1)))
            })
            .collect()
    }

    /// BYDAY expansion across a whole year (ordinals count within the year).
    fn by_day_dates_in_year(&self, year: i32) -> Vec<NaiveDate> {
        let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            return Vec::new();
        };
        let Some(last) = NaiveDate::from_ymd_opt(year, 12, 31) else {
            return Vec::new();
        };
        self.by_day_dates_in_range(first, last)
    }

    /// BYDAY expansion inside one month (ordinals count within the month).
    fn by_day_dates_in_month(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        let Some(last) = NaiveDate::from_ymd_opt(year, month, calendar::days_in_month(year, month))
        else {
            return Vec::new();
        };
        self.by_day_dates_in_range(first, last)
    }

    fn by_day_dates_in_range(&self, first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        for entry in &self.pattern.by_day {
            match entry.ordinal {
                Some(ordinal) => {
                    if let Some(date) =
                        calendar::nth_weekday_in_range(first, last, entry.weekday, ordinal)
                    {
                        dates.push(date);
                    }
                }
                None => dates.extend(calendar::weekdays_in_range(first, last, entry.weekday)),
            }
        }
        dates
    }

    /// Cross-applies the time components to date candidates. Without time
    /// rules every candidate inherits the seed's time of day.
    fn cross_times(&self, dates: &[NaiveDate]) -> Vec<NaiveDateTime> {
        let seed_time = self.seed_value.time();
        let hours = self.hour_values(seed_time.hour());
        let minutes = self.minute_values(seed_time.minute());
        let seconds = self.second_values(seed_time.second());
        let mut stamps = Vec::with_capacity(dates.len() * hours.len() * minutes.len());
        for &date in dates {
            for &hour in &hours {
                for &minute in &minutes {
                    for &second in &seconds {
                        if let Some(time) = NaiveTime::from_hms_opt(hour, minute, second) {
                            stamps.push(date.and_time(time));
                        }
                    }
                }
            }
        }
        stamps
    }

    fn hour_values(&self, inherited: u32) -> Vec<u32> {
        if self.pattern.by_hour.is_empty() {
            vec![inherited]
        } else {
            self.pattern.by_hour.iter().map(|&h| u32::from(h)).collect()
        }
    }

    fn minute_values(&self, inherited: u32) -> Vec<u32> {
        if self.pattern.by_minute.is_empty() {
            vec![inherited]
        } else {
            self.pattern
                .by_minute
                .iter()
                .map(|&m| u32::from(m))
                .collect()
        }
    }

    fn second_values(&self, inherited: u32) -> Vec<u32> {
        if self.pattern.by_second.is_empty() {
            vec![inherited]
        } else {
            self.pattern
                .by_second
                .iter()
                .map(|&s| u32::from(s))
                .collect()
        }
    }

    fn matches_by_month(&self, month: u32) -> bool {
        let list = &self.pattern.by_month;
        list.is_empty() || list.iter().any(|&m| u32::from(m) == month)
    }

    fn matches_by_month_day(&self, date: NaiveDate) -> bool {
        let list = &self.pattern.by_month_day;
        if list.is_empty() {
            return true;
        }
        let length = calendar::days_in_month(date.year(), date.month());
        list.iter()
            .any(|ordinal| ordinal.resolve(length) == Some(date.day()))
    }

    fn matches_by_year_day(&self, date: NaiveDate) -> bool {
        let list = &self.pattern.by_year_day;
        if list.is_empty() {
            return true;
        }
        let length = calendar::days_in_year(date.year());
        list.iter()
            .any(|ordinal| ordinal.resolve(length) == Some(date.ordinal()))
    }

    fn matches_weekday(&self, date: NaiveDate) -> bool {
        let list = &self.pattern.by_day;
        list.is_empty()
            || list
                .iter()
                .any(|entry| entry.weekday == calendar::day_of_week(date))
    }

    fn matches_by_hour(&self, hour: u32) -> bool {
        let list = &self.pattern.by_hour;
        list.is_empty() || list.iter().any(|&h| u32::from(h) == hour)
    }

    fn matches_by_minute(&self, minute: u32) -> bool {
        let list = &self.pattern.by_minute;
        list.is_empty() || list.iter().any(|&m| u32::from(m) == minute)
    }

    fn matches_by_second(&self, second: u32) -> bool {
        let list = &self.pattern.by_second;
        list.is_empty() || list.iter().any(|&s| u32::from(s) == second)
    }

    fn occurrence(&self, stamp: NaiveDateTime) -> Occurrence {
        if self.timed {
            Occurrence::date_time(stamp)
        } else {
            Occurrence::date(stamp.date())
        }
    }
}
