//! Recurrence and holiday occurrence generation.
//!
//! This crate expands RFC 5545-style recurrence patterns and yearly holiday
//! definitions into concrete, ordered date/time occurrences. It is a pure
//! computation library: callers (format parsers, editors, serializers)
//! construct validated models, the engines return occurrence sets, and any
//! timezone translation happens outside, before seeding or after
//! generation.
//!
//! ```
//! use cadence_core::Occurrence;
//! use cadence_recur::{ExpansionOptions, Frequency, RecurrencePattern};
//! use chrono::NaiveDate;
//!
//! let seed = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let pattern = RecurrencePattern::builder(Frequency::Daily, Occurrence::date_time(seed))
//!     .with_count(3)
//!     .build()
//!     .unwrap();
//! let expansion = pattern.expand(&ExpansionOptions::default()).unwrap();
//! assert_eq!(expansion.dates.len(), 3);
//! ```

pub mod error;
pub mod expand;
pub mod model;

pub use error::{RecurError, RecurResult, ValidationError};
pub use expand::{Expansion, ExpansionNote, ExpansionOptions, easter_sunday, expand_holidays};
pub use model::{
    EasterMethod, EndCondition, Frequency, HolidayKind, HolidayRule, PatternBuilder,
    RecurrencePattern, RecurrenceSet, WeekdayNum,
};
