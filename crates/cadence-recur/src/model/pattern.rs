//! Recurrence pattern model.
//!
//! A [`RecurrencePattern`] is the immutable, validated description of an
//! RFC 5545-style recurrence rule: frequency, interval, end condition and
//! BY-filters, anchored at a seed date/time. Patterns are built through
//! [`PatternBuilder`], the single validation boundary; once a pattern exists
//! it satisfies every field invariant and the engines never re-check them.

use std::fmt;

use cadence_core::{Occurrence, SignedOrdinal, Weekday};
use serde::Serialize;

use crate::error::{RecurResult, ValidationError};

/// Recurrence frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secondly => "SECONDLY",
            Self::Minutely => "MINUTELY",
            Self::Hourly => "HOURLY",
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Parses a frequency from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "SECONDLY" => Self::Secondly,
            "MINUTELY" => Self::Minutely,
            "HOURLY" => Self::Hourly,
            "DAILY" => Self::Daily,
            "WEEKLY" => Self::Weekly,
            "MONTHLY" => Self::Monthly,
            "YEARLY" => Self::Yearly,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekday with optional signed ordinal (a BYDAY entry).
///
/// Examples:
/// - `MO` - every Monday in the period
/// - `1MO` - first Monday of the month/year
/// - `-1FR` - last Friday of the month/year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayNum {
    /// Optional occurrence ordinal within the period.
    pub ordinal: Option<SignedOrdinal>,
    /// The day of the week.
    pub weekday: Weekday,
}

impl WeekdayNum {
    /// Every occurrence of the weekday in the period.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    /// The nth occurrence of the weekday in the period.
    ///
    /// ## Errors
    ///
    /// Returns a validation error when `ordinal` is zero. Range limits
    /// depend on the pattern frequency and are checked at pattern build
    /// time.
    pub fn nth(ordinal: i16, weekday: Weekday) -> RecurResult<Self> {
        Ok(Self {
            ordinal: Some(SignedOrdinal::new(ordinal)?),
            weekday,
        })
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n}")?;
        }
        write!(f, "{}", self.weekday)
    }
}

/// How a recurrence ends: exactly one of never, after a fixed number of
/// occurrences, or at an inclusive cut-off value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EndCondition {
    /// No intrinsic end; expansion requires a caller-supplied window.
    Unbounded,
    /// Stop after this many occurrences (counted from the seed).
    Count(u32),
    /// Stop at this date/time, inclusive.
    Until(Occurrence),
}

/// Validated recurrence pattern.
///
/// Construct through [`RecurrencePattern::builder`]. All list fields except
/// BYDAY are held sorted and de-duplicated so expansion is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurrencePattern {
    pub(crate) frequency: Frequency,
    pub(crate) interval: u32,
    pub(crate) end: EndCondition,
    pub(crate) seed: Occurrence,
    pub(crate) week_start: Weekday,
    pub(crate) by_second: Vec<u8>,
    pub(crate) by_minute: Vec<u8>,
    pub(crate) by_hour: Vec<u8>,
    pub(crate) by_day: Vec<WeekdayNum>,
    pub(crate) by_month_day: Vec<SignedOrdinal>,
    pub(crate) by_year_day: Vec<SignedOrdinal>,
    pub(crate) by_week_no: Vec<SignedOrdinal>,
    pub(crate) by_month: Vec<u8>,
    pub(crate) by_set_pos: Vec<SignedOrdinal>,
}

impl RecurrencePattern {
    /// Returns a builder anchored at `seed`.
    ///
    /// The frequency and the seed are the only two required pieces of a
    /// pattern.
    #[must_use]
    pub fn builder(frequency: Frequency, seed: Occurrence) -> PatternBuilder {
        PatternBuilder::new(frequency, seed)
    }

    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    #[must_use]
    pub const fn end(&self) -> &EndCondition {
        &self.end
    }

    #[must_use]
    pub const fn seed(&self) -> &Occurrence {
        &self.seed
    }

    #[must_use]
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    #[must_use]
    pub fn by_second(&self) -> &[u8] {
        &self.by_second
    }

    #[must_use]
    pub fn by_minute(&self) -> &[u8] {
        &self.by_minute
    }

    #[must_use]
    pub fn by_hour(&self) -> &[u8] {
        &self.by_hour
    }

    #[must_use]
    pub fn by_day(&self) -> &[WeekdayNum] {
        &self.by_day
    }

    #[must_use]
    pub fn by_month_day(&self) -> &[SignedOrdinal] {
        &self.by_month_day
    }

    #[must_use]
    pub fn by_year_day(&self) -> &[SignedOrdinal] {
        &self.by_year_day
    }

    #[must_use]
    pub fn by_week_no(&self) -> &[SignedOrdinal] {
        &self.by_week_no
    }

    #[must_use]
    pub fn by_month(&self) -> &[u8] {
        &self.by_month
    }

    #[must_use]
    pub fn by_set_pos(&self) -> &[SignedOrdinal] {
        &self.by_set_pos
    }

    /// Whether any time-granularity BY rule is present. When none is, every
    /// occurrence inherits the seed's time of day (and all-day seeds stay
    /// all-day).
    #[must_use]
    pub fn has_time_rules(&self) -> bool {
        !self.by_hour.is_empty() || !self.by_minute.is_empty() || !self.by_second.is_empty()
    }
}

/// Builder for [`RecurrencePattern`].
///
/// `build` is where every invariant is enforced; the setters only collect
/// raw values.
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    frequency: Frequency,
    seed: Occurrence,
    interval: u32,
    end: EndCondition,
    week_start: Weekday,
    by_second: Vec<u8>,
    by_minute: Vec<u8>,
    by_hour: Vec<u8>,
    by_day: Vec<WeekdayNum>,
    by_month_day: Vec<i16>,
    by_year_day: Vec<i16>,
    by_week_no: Vec<i16>,
    by_month: Vec<u8>,
    by_set_pos: Vec<i16>,
}

impl PatternBuilder {
    fn new(frequency: Frequency, seed: Occurrence) -> Self {
        Self {
            frequency,
            seed,
            interval: 1,
            end: EndCondition::Unbounded,
            week_start: Weekday::Monday,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
            by_set_pos: Vec::new(),
        }
    }

    /// Sets the interval (step size in units of the frequency).
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Ends the recurrence after `count` occurrences.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.end = EndCondition::Count(count);
        self
    }

    /// Ends the recurrence at `until`, inclusive.
    #[must_use]
    pub fn with_until(mut self, until: Occurrence) -> Self {
        self.end = EndCondition::Until(until);
        self
    }

    /// Sets the week start day (default: Monday).
    #[must_use]
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Adds BYSECOND values (0-59).
    #[must_use]
    pub fn with_by_second(mut self, seconds: impl IntoIterator<Item = u8>) -> Self {
        self.by_second.extend(seconds);
        self
    }

    /// Adds BYMINUTE values (0-59).
    #[must_use]
    pub fn with_by_minute(mut self, minutes: impl IntoIterator<Item = u8>) -> Self {
        self.by_minute.extend(minutes);
        self
    }

    /// Adds BYHOUR values (0-23).
    #[must_use]
    pub fn with_by_hour(mut self, hours: impl IntoIterator<Item = u8>) -> Self {
        self.by_hour.extend(hours);
        self
    }

    /// Adds BYDAY entries.
    #[must_use]
    pub fn with_by_day(mut self, days: impl IntoIterator<Item = WeekdayNum>) -> Self {
        self.by_day.extend(days);
        self
    }

    /// Adds BYMONTHDAY values (1..=31 or -31..=-1).
    #[must_use]
    pub fn with_by_month_day(mut self, days: impl IntoIterator<Item = i16>) -> Self {
        self.by_month_day.extend(days);
        self
    }

    /// Adds BYYEARDAY values (1..=366 or -366..=-1).
    #[must_use]
    pub fn with_by_year_day(mut self, days: impl IntoIterator<Item = i16>) -> Self {
        self.by_year_day.extend(days);
        self
    }

    /// Adds BYWEEKNO values (1..=53 or -53..=-1, yearly frequency only).
    #[must_use]
    pub fn with_by_week_no(mut self, weeks: impl IntoIterator<Item = i16>) -> Self {
        self.by_week_no.extend(weeks);
        self
    }

    /// Adds BYMONTH values (1-12).
    #[must_use]
    pub fn with_by_month(mut self, months: impl IntoIterator<Item = u8>) -> Self {
        self.by_month.extend(months);
        self
    }

    /// Adds BYSETPOS values (1..=366 or -366..=-1).
    #[must_use]
    pub fn with_by_set_pos(mut self, positions: impl IntoIterator<Item = i16>) -> Self {
        self.by_set_pos.extend(positions);
        self
    }

    /// ## Summary
    /// Validates every field and field combination and produces the pattern.
    ///
    /// ## Errors
    ///
    /// Returns a [`ValidationError`] for any out-of-range value, zero
    /// ordinal, or BY rule used at a frequency that does not support it.
    #[expect(clippy::too_many_lines)]
    pub fn build(self) -> RecurResult<RecurrencePattern> {
        if self.interval < 1 {
            return Err(ValidationError::ZeroInterval.into());
        }
        if matches!(self.end, EndCondition::Count(0)) {
            return Err(ValidationError::ZeroCount.into());
        }

        let by_second = checked_unsigned("BYSECOND", self.by_second, 0, 59)?;
        let by_minute = checked_unsigned("BYMINUTE", self.by_minute, 0, 59)?;
        let by_hour = checked_unsigned("BYHOUR", self.by_hour, 0, 23)?;
        let by_month = checked_unsigned("BYMONTH", self.by_month, 1, 12)?;

        let by_month_day = checked_signed("BYMONTHDAY", self.by_month_day, 31)?;
        if !by_month_day.is_empty() && self.frequency == Frequency::Weekly {
            return Err(ValidationError::ByMonthDayAtWeekly.into());
        }

        let by_year_day = checked_signed("BYYEARDAY", self.by_year_day, 366)?;
        if !by_year_day.is_empty()
            && matches!(
                self.frequency,
                Frequency::Daily | Frequency::Weekly | Frequency::Monthly
            )
        {
            return Err(ValidationError::ByYearDayFrequency.into());
        }

        let by_week_no = checked_signed("BYWEEKNO", self.by_week_no, 53)?;
        if !by_week_no.is_empty() && self.frequency != Frequency::Yearly {
            return Err(ValidationError::ByWeekNoOutsideYearly.into());
        }

        for entry in &self.by_day {
            let Some(ordinal) = entry.ordinal else {
                continue;
            };
            if !matches!(self.frequency, Frequency::Yearly | Frequency::Monthly) {
                return Err(ValidationError::OrdinalByDayFrequency.into());
            }
            if !by_week_no.is_empty() {
                return Err(ValidationError::OrdinalByDayWithWeekNo.into());
            }
            // An ordinal is yearly-ranged only when it addresses a whole
            // year; with BYMONTH (or at monthly frequency) it addresses one
            // month.
            let max = if self.frequency == Frequency::Yearly && by_month.is_empty() {
                53
            } else {
                5
            };
            if i32::from(ordinal.magnitude()) > max {
                return Err(ValidationError::OutOfRange {
                    rule: "BYDAY ordinal",
                    value: i32::from(ordinal.get()),
                    min: -max,
                    max,
                }
                .into());
            }
        }

        let by_set_pos = checked_signed("BYSETPOS", self.by_set_pos, 366)?;
        if !by_set_pos.is_empty()
            && by_second.is_empty()
            && by_minute.is_empty()
            && by_hour.is_empty()
            && self.by_day.is_empty()
            && by_month_day.is_empty()
            && by_year_day.is_empty()
            && by_week_no.is_empty()
            && by_month.is_empty()
        {
            return Err(ValidationError::BySetPosAlone.into());
        }

        Ok(RecurrencePattern {
            frequency: self.frequency,
            interval: self.interval,
            end: self.end,
            seed: self.seed,
            week_start: self.week_start,
            by_second,
            by_minute,
            by_hour,
            by_day: self.by_day,
            by_month_day,
            by_year_day,
            by_week_no,
            by_month,
            by_set_pos,
        })
    }
}

fn checked_unsigned(
    rule: &'static str,
    mut values: Vec<u8>,
    min: u8,
    max: u8,
) -> Result<Vec<u8>, ValidationError> {
    for &value in &values {
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                rule,
                value: i32::from(value),
                min: i32::from(min),
                max: i32::from(max),
            });
        }
    }
    values.sort_unstable();
    values.dedup();
    Ok(values)
}

fn checked_signed(
    rule: &'static str,
    values: Vec<i16>,
    max: i16,
) -> Result<Vec<SignedOrdinal>, ValidationError> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        let Ok(ordinal) = SignedOrdinal::new(value) else {
            return Err(ValidationError::ZeroOrdinal { rule });
        };
        if ordinal.magnitude() > max.unsigned_abs() {
            return Err(ValidationError::OutOfRange {
                rule,
                value: i32::from(value),
                min: i32::from(-max),
                max: i32::from(max),
            });
        }
        out.push(ordinal);
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

/// A recurrence pattern together with its explicit addenda: extra dates,
/// excluded dates, and an optional generative exclusion rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurrenceSet {
    pub(crate) pattern: RecurrencePattern,
    pub(crate) rdates: Vec<Occurrence>,
    pub(crate) exdates: Vec<Occurrence>,
    pub(crate) exrule: Option<RecurrencePattern>,
}

impl RecurrenceSet {
    /// Wraps a pattern with no addenda.
    #[must_use]
    pub const fn new(pattern: RecurrencePattern) -> Self {
        Self {
            pattern,
            rdates: Vec::new(),
            exdates: Vec::new(),
            exrule: None,
        }
    }

    /// Sets explicit extra occurrences (not filtered by the pattern).
    #[must_use]
    pub fn set_rdates(mut self, rdates: Vec<Occurrence>) -> Self {
        self.rdates = rdates;
        self
    }

    /// Sets exact occurrences to remove from the result.
    #[must_use]
    pub fn set_exdates(mut self, exdates: Vec<Occurrence>) -> Self {
        self.exdates = exdates;
        self
    }

    /// Sets a second pattern whose occurrences are removed from the result.
    #[must_use]
    pub fn set_exrule(mut self, exrule: RecurrencePattern) -> Self {
        self.exrule = Some(exrule);
        self
    }

    #[must_use]
    pub const fn pattern(&self) -> &RecurrencePattern {
        &self.pattern
    }

    #[must_use]
    pub fn rdates(&self) -> &[Occurrence] {
        &self.rdates
    }

    #[must_use]
    pub fn exdates(&self) -> &[Occurrence] {
        &self.exdates
    }

    #[must_use]
    pub const fn exrule(&self) -> Option<&RecurrencePattern> {
        self.exrule.as_ref()
    }
}

impl From<RecurrencePattern> for RecurrenceSet {
    fn from(pattern: RecurrencePattern) -> Self {
        Self::new(pattern)
    }
}
