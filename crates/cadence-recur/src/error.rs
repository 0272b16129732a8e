use thiserror::Error;

/// Construction-time validation failure for a recurrence pattern or holiday
/// rule. Every variant is caught before a model instance exists, so the
/// engines never see an invalid rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("interval must be at least 1")]
    ZeroInterval,

    #[error("count must be at least 1")]
    ZeroCount,

    #[error("{rule} value {value} is out of range ({min}..={max})")]
    OutOfRange {
        rule: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("{rule} does not accept zero")]
    ZeroOrdinal { rule: &'static str },

    #[error("BYWEEKNO is only valid at yearly frequency")]
    ByWeekNoOutsideYearly,

    #[error("BYYEARDAY is not valid at daily, weekly or monthly frequency")]
    ByYearDayFrequency,

    #[error("BYMONTHDAY is not valid at weekly frequency")]
    ByMonthDayAtWeekly,

    #[error("an ordinal BYDAY entry is only valid at monthly or yearly frequency")]
    OrdinalByDayFrequency,

    #[error("an ordinal BYDAY entry cannot be combined with BYWEEKNO")]
    OrdinalByDayWithWeekNo,

    #[error("BYSETPOS requires at least one other BY rule")]
    BySetPosAlone,

    #[error("floating holiday occurrence must be 1..=5 or -1")]
    FloatingOccurrence,

    #[error("minimum year {minimum} exceeds maximum year {maximum}")]
    YearRange { minimum: i32, maximum: i32 },
}

/// Recurrence and holiday engine errors.
#[derive(Error, Debug)]
pub enum RecurError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An unbounded pattern was expanded without a window; generation must
    /// always be finite.
    #[error("an unbounded pattern requires an expansion window")]
    BoundsRequired,

    #[error(transparent)]
    Core(#[from] cadence_core::error::CoreError),
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
