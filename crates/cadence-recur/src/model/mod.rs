//! Validated, immutable rule models consumed by the engines.
//!
//! Producers (format parsers, editors) construct these after decoding text
//! or user input into typed fields; serializers read the fields back. The
//! engines only ever see instances that passed validation.

mod holiday;
mod pattern;

pub use holiday::{EasterMethod, HolidayKind, HolidayRule};
pub use pattern::{
    EndCondition, Frequency, PatternBuilder, RecurrencePattern, RecurrenceSet, WeekdayNum,
};
