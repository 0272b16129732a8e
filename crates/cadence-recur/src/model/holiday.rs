//! Holiday rule model.
//!
//! A holiday rule describes one yearly observance: a fixed calendar date, a
//! floating weekday-and-ordinal date, or a date relative to Easter Sunday.
//! Rules are validated at construction and expanded per year by the holiday
//! engine.

use std::fmt;

use cadence_core::{SignedOrdinal, Weekday};
use serde::Serialize;

use crate::error::{RecurResult, ValidationError};

/// Computus algorithm used for Easter-relative rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EasterMethod {
    /// Gregorian computus (Meeus/Jones/Butcher).
    Gregorian,
    /// Julian computus; the result is a date in the Julian calendar.
    Julian,
    /// Julian computus converted to the Gregorian calendar.
    Orthodox,
}

impl EasterMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gregorian => "GREGORIAN",
            Self::Julian => "JULIAN",
            Self::Orthodox => "ORTHODOX",
        }
    }
}

impl fmt::Display for EasterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The date-selection part of a holiday rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HolidayKind {
    /// A fixed month and day of month.
    Fixed { month: u32, day: u32 },
    /// A weekday ordinal within a month, e.g. "first Monday of September".
    Floating {
        month: u32,
        weekday: Weekday,
        occurrence: SignedOrdinal,
    },
    /// A signed day offset from Easter Sunday.
    EasterRelative {
        method: EasterMethod,
        offset_days: i32,
    },
}

/// A validated yearly holiday definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRule {
    pub(crate) kind: HolidayKind,
    pub(crate) description: String,
    pub(crate) minimum_year: Option<i32>,
    pub(crate) maximum_year: Option<i32>,
    pub(crate) adjust_for_weekend: bool,
}

impl HolidayRule {
    /// Creates a fixed-date holiday rule.
    ///
    /// A day that does not exist in every year (February 29) is accepted;
    /// the rule simply produces no occurrence in years where the date is
    /// absent.
    ///
    /// ## Errors
    ///
    /// Returns a validation error when `month` is outside `1..=12` or `day`
    /// outside `1..=31`.
    pub fn fixed(description: impl Into<String>, month: u32, day: u32) -> RecurResult<Self> {
        check_month(month)?;
        if !(1..=31).contains(&day) {
            return Err(ValidationError::OutOfRange {
                rule: "holiday day of month",
                value: i32::try_from(day).unwrap_or(i32::MAX),
                min: 1,
                max: 31,
            }
            .into());
        }
        Ok(Self::new(HolidayKind::Fixed { month, day }, description))
    }

    /// Creates a floating holiday rule ("nth weekday of a month").
    ///
    /// ## Errors
    ///
    /// Returns a validation error when `month` is outside `1..=12` or
    /// `occurrence` is not `1..=5` or `-1`.
    pub fn floating(
        description: impl Into<String>,
        month: u32,
        weekday: Weekday,
        occurrence: i16,
    ) -> RecurResult<Self> {
        check_month(month)?;
        if !(1..=5).contains(&occurrence) && occurrence != -1 {
            return Err(ValidationError::FloatingOccurrence.into());
        }
        let occurrence = SignedOrdinal::new(occurrence)?;
        Ok(Self::new(
            HolidayKind::Floating {
                month,
                weekday,
                occurrence,
            },
            description,
        ))
    }

    /// Creates an Easter-relative holiday rule.
    #[must_use]
    pub fn easter_relative(
        description: impl Into<String>,
        method: EasterMethod,
        offset_days: i32,
    ) -> Self {
        Self::new(
            HolidayKind::EasterRelative {
                method,
                offset_days,
            },
            description,
        )
    }

    fn new(kind: HolidayKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            minimum_year: None,
            maximum_year: None,
            adjust_for_weekend: false,
        }
    }

    /// Restricts the rule to an inclusive year range.
    ///
    /// ## Errors
    ///
    /// Returns a validation error when both bounds are present and
    /// `minimum > maximum`.
    pub fn with_year_range(
        mut self,
        minimum: Option<i32>,
        maximum: Option<i32>,
    ) -> RecurResult<Self> {
        if let (Some(min), Some(max)) = (minimum, maximum)
            && min > max
        {
            return Err(ValidationError::YearRange {
                minimum: min,
                maximum: max,
            }
            .into());
        }
        self.minimum_year = minimum;
        self.maximum_year = maximum;
        Ok(self)
    }

    /// Enables weekend adjustment: a Saturday result shifts to the preceding
    /// Friday, a Sunday result to the following Monday.
    #[must_use]
    pub const fn with_weekend_adjustment(mut self) -> Self {
        self.adjust_for_weekend = true;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> &HolidayKind {
        &self.kind
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn minimum_year(&self) -> Option<i32> {
        self.minimum_year
    }

    #[must_use]
    pub const fn maximum_year(&self) -> Option<i32> {
        self.maximum_year
    }

    #[must_use]
    pub const fn adjust_for_weekend(&self) -> bool {
        self.adjust_for_weekend
    }

    /// Whether the rule is in effect for `year`.
    #[must_use]
    pub fn applies_to(&self, year: i32) -> bool {
        self.minimum_year.is_none_or(|min| year >= min)
            && self.maximum_year.is_none_or(|max| year <= max)
    }
}

fn check_month(month: u32) -> Result<(), ValidationError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            rule: "holiday month",
            value: i32::try_from(month).unwrap_or(i32::MAX),
            min: 1,
            max: 12,
        })
    }
}
