//! Signed "from the start / from the end" index.
//!
//! Day-of-month, day-of-year, week-number, set-position and floating-holiday
//! ordinals all share the same shape: a non-zero signed integer where `1` is
//! the first element of a period and `-1` the last. `SignedOrdinal` carries
//! that shape once, so the sign handling lives in a single `resolve` instead
//! of being repeated at every call site.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A non-zero signed ordinal, counted from the start (positive) or from the
/// end (negative) of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct SignedOrdinal(i16);

impl SignedOrdinal {
    /// Creates a signed ordinal.
    ///
    /// ## Errors
    ///
    /// Returns a validation error for zero, which has no direction and is
    /// never a valid ordinal.
    pub fn new(value: i16) -> CoreResult<Self> {
        if value == 0 {
            return Err(CoreError::ValidationError(
                "signed ordinal must not be zero".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw signed value.
    #[must_use]
    pub const fn get(self) -> i16 {
        self.0
    }

    /// Returns the magnitude of the ordinal.
    #[must_use]
    pub const fn magnitude(self) -> u16 {
        self.0.unsigned_abs()
    }

    /// Whether this ordinal counts from the end of the period.
    #[must_use]
    pub const fn is_from_end(self) -> bool {
        self.0 < 0
    }

    /// Resolves the ordinal against a period of `length` elements.
    ///
    /// Returns the 1-based index counted from the start, or `None` when the
    /// magnitude exceeds `length` (the ordinal does not exist in a period
    /// that short, and the caller must skip it).
    #[must_use]
    pub fn resolve(self, length: u32) -> Option<u32> {
        let magnitude = u32::from(self.0.unsigned_abs());
        if magnitude == 0 || magnitude > length {
            return None;
        }
        if self.0 > 0 {
            Some(magnitude)
        } else {
            Some(length - magnitude + 1)
        }
    }
}

impl TryFrom<i16> for SignedOrdinal {
    type Error = CoreError;

    fn try_from(value: i16) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<SignedOrdinal> for i16 {
    fn from(ordinal: SignedOrdinal) -> Self {
        ordinal.0
    }
}

impl std::fmt::Display for SignedOrdinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
