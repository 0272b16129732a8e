//! Occurrence values and the ordered occurrence set.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One concrete, dated result of expanding a recurrence or holiday rule.
///
/// An occurrence is a naive date/time value plus a flag recording whether a
/// time component is present. The flag participates in equality and ordering:
/// a date-only occurrence never equals a date-time occurrence at midnight of
/// the same day, so all-day and timed entries cannot collapse into each
/// other. The optional description (holiday rule metadata) never participates
/// in comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    value: NaiveDateTime,
    has_time: bool,
    description: Option<String>,
}

impl Occurrence {
    /// Creates a date-only (all-day) occurrence.
    #[must_use]
    pub fn date(date: NaiveDate) -> Self {
        Self {
            value: date.and_time(chrono::NaiveTime::MIN),
            has_time: false,
            description: None,
        }
    }

    /// Creates an occurrence with a time component.
    #[must_use]
    pub const fn date_time(value: NaiveDateTime) -> Self {
        Self {
            value,
            has_time: true,
            description: None,
        }
    }

    /// Attaches description metadata (used for holiday results).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The underlying date/time value. Date-only occurrences read as
    /// midnight.
    #[must_use]
    pub const fn value(&self) -> NaiveDateTime {
        self.value
    }

    /// The calendar date of this occurrence.
    #[must_use]
    pub const fn naive_date(&self) -> NaiveDate {
        self.value.date()
    }

    /// Whether this occurrence carries a time component.
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.has_time
    }

    /// Description metadata, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Occurrence {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.has_time == other.has_time
    }
}

impl Eq for Occurrence {}

impl PartialOrd for Occurrence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Occurrence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then(self.has_time.cmp(&other.has_time))
    }
}

impl Hash for Occurrence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.has_time.hash(state);
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_time {
            write!(f, "{}", self.value.format("%Y-%m-%dT%H:%M:%S"))
        } else {
            write!(f, "{}", self.value.format("%Y-%m-%d"))
        }
    }
}

/// Ordered, duplicate-free collection of occurrences.
///
/// Used both as the output of the engines and as the representation of
/// explicit addition/exclusion lists. Keys are occurrence values; on
/// duplicate insertion the first entry (and its description) wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceSet {
    entries: BTreeSet<Occurrence>,
}

impl OccurrenceSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an occurrence. Returns `false` if an equal value was already
    /// present (the existing entry is kept).
    pub fn insert(&mut self, occurrence: Occurrence) -> bool {
        if self.entries.contains(&occurrence) {
            return false;
        }
        self.entries.insert(occurrence)
    }

    /// Removes the occurrence equal to `occurrence`, if present.
    pub fn remove(&mut self, occurrence: &Occurrence) -> bool {
        self.entries.remove(occurrence)
    }

    /// Whether an equal occurrence is present.
    #[must_use]
    pub fn contains(&self, occurrence: &Occurrence) -> bool {
        self.entries.contains(occurrence)
    }

    /// Union: moves every occurrence of `other` into `self`.
    pub fn union_with(&mut self, other: Self) {
        for occurrence in other.entries {
            self.insert(occurrence);
        }
    }

    /// Set subtraction: removes every occurrence present in `other`.
    pub fn subtract(&mut self, other: &Self) {
        for occurrence in &other.entries {
            self.entries.remove(occurrence);
        }
    }

    /// Number of occurrences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest occurrence, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Occurrence> {
        self.entries.first()
    }

    /// Latest occurrence, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Occurrence> {
        self.entries.last()
    }

    /// Ascending iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Occurrence> {
        self.entries.iter()
    }

    /// Keeps only the earliest `max` occurrences.
    pub fn truncate(&mut self, max: usize) {
        while self.entries.len() > max {
            self.entries.pop_last();
        }
    }
}

impl FromIterator<Occurrence> for OccurrenceSet {
    fn from_iter<I: IntoIterator<Item = Occurrence>>(iter: I) -> Self {
        let mut set = Self::new();
        for occurrence in iter {
            set.insert(occurrence);
        }
        set
    }
}

impl Extend<Occurrence> for OccurrenceSet {
    fn extend<I: IntoIterator<Item = Occurrence>>(&mut self, iter: I) {
        for occurrence in iter {
            self.insert(occurrence);
        }
    }
}

impl IntoIterator for OccurrenceSet {
    type Item = Occurrence;
    type IntoIter = std::collections::btree_set::IntoIter<Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OccurrenceSet {
    type Item = &'a Occurrence;
    type IntoIter = std::collections::btree_set::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
