use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced while constructing a policy, schedule, or household.
///
/// Every error is raised at construction time; once a value exists, its
/// computations are infallible. There are exactly two kinds: malformed input
/// and a jurisdiction outside the supported set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("unsupported jurisdiction {0:?}; supported jurisdictions are PA and NY")]
    UnsupportedJurisdiction(String),
}

/// The specific way an input failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("income cannot be negative, got {0}")]
    NegativeIncome(Decimal),

    #[error("deduction cannot be negative, got {0}")]
    NegativeDeduction(Decimal),

    #[error("withheld amount cannot be negative, got {0}")]
    NegativeWithholding(Decimal),

    #[error("bracket table cannot be empty")]
    EmptySchedule,

    #[error("bracket bounds and rates must have the same length, got {bounds} bounds and {rates} rates")]
    TierLengthMismatch { bounds: usize, rates: usize },

    #[error("tax rate must be between 0 and 1, got {0}")]
    RateOutOfRange(Decimal),

    #[error("bracket upper bounds must be non-negative and strictly increasing")]
    UnorderedBounds,

    #[error("only the last bracket may be unbounded")]
    InteriorUnboundedBracket,
}
