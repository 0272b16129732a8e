//! Expansion engines: recurrence patterns and holiday rules.
//!
//! Both engines are pure, synchronous and deterministic. They consume
//! validated models by reference and return freshly allocated occurrence
//! sets owned by the caller, so concurrent calls need no coordination.

mod easter;
mod holiday;
mod recurrence;

pub use easter::easter_sunday;
pub use holiday::expand_holidays;
pub use recurrence::{Expansion, ExpansionNote, ExpansionOptions};
