//! Error types for the dice engine and character model.

/// Errors produced while parsing a dice expression.
///
/// Every variant is a value/format error: the input string did not describe
/// a rollable expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The expression string is empty.
    #[error("empty dice expression")]
    Empty,

    /// The expression does not match `<count>d<sides>[+|-<modifier>]`.
    #[error("invalid dice format: {0}")]
    InvalidFormat(String),

    /// The dice count is zero.
    #[error("dice count must be at least 1")]
    ZeroDice,

    /// The die has zero sides.
    #[error("die must have at least 1 side")]
    ZeroSides,

    /// The modifier after `+`/`-` is not a non-negative integer.
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),

    /// The expression can produce totals that do not fit in an `i32`.
    #[error("dice expression out of range: {0}")]
    OutOfRange(String),
}

impl DiceError {
    /// Always true: a dice error is a malformed-value error.
    pub fn is_format_error(&self) -> bool {
        true
    }
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Domain-level errors for the GURPS engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GurpsError {
    /// A dice expression could not be parsed.
    #[error(transparent)]
    Dice(#[from] DiceError),

    /// Invested skill points are outside the accepted bounds.
    ///
    /// Reserved for bounds checking; no operation raises it yet.
    #[error("invalid points {points}: {reason}")]
    Points {
        /// The rejected point value.
        points: i32,
        /// Why the value was rejected.
        reason: String,
    },
}

impl GurpsError {
    /// Returns true when the error comes from a malformed dice expression.
    pub fn is_dice_format(&self) -> bool {
        matches!(self, Self::Dice(e) if e.is_format_error())
    }
}

/// Convenience result type for domain operations.
pub type GurpsResult<T> = Result<T, GurpsError>;
