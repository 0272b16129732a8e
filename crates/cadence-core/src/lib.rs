//! Shared foundation for the cadence occurrence engines.
//!
//! This crate holds the pieces both the recurrence engine and the holiday
//! engine are built on: the error taxonomy, the weekday and signed-ordinal
//! value types, pure calendar arithmetic, and the `Occurrence` /
//! `OccurrenceSet` output types. Everything here is pure data and pure
//! functions; no I/O, no shared state.

pub mod calendar;
pub mod error;
pub mod occurrence;
pub mod ordinal;
pub mod weekday;

pub use error::{CoreError, CoreResult};
pub use occurrence::{Occurrence, OccurrenceSet};
pub use ordinal::SignedOrdinal;
pub use weekday::Weekday;
