//! Dice notation parsing and rolling.
//!
//! Expressions follow `<count>d<sides>[+|-<modifier>]` with plain decimal
//! numbers, e.g. `3d6`, `3d6+4`, `2d6-1`. The notation is case-sensitive
//! and allows no whitespace.

pub mod source;

pub use source::{RandomSource, ScriptedSource, choose};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A parsed dice expression such as `3d6+2`.
///
/// Every value has passed [`DiceExpression::new`], deserialized ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDiceExpression")]
pub struct DiceExpression {
    count: u32,
    sides: u32,
    modifier: i32,
}

impl DiceExpression {
    /// Three six-sided dice, the standard GURPS roll.
    pub const THREE_D6: Self = Self {
        count: 3,
        sides: 6,
        modifier: 0,
    };

    /// A single six-sided die.
    pub const ONE_D6: Self = Self {
        count: 1,
        sides: 6,
        modifier: 0,
    };

    /// Build an expression, rejecting zero dice, zero sides, and totals
    /// that would not fit in an `i32`.
    pub fn new(count: u32, sides: u32, modifier: i32) -> DiceResult<Self> {
        if count == 0 {
            return Err(DiceError::ZeroDice);
        }
        if sides == 0 {
            return Err(DiceError::ZeroSides);
        }
        let expr = Self {
            count,
            sides,
            modifier,
        };
        let max = i128::from(count) * i128::from(sides) + i128::from(modifier);
        let min = i128::from(count) + i128::from(modifier);
        if max > i128::from(i32::MAX) || min < i128::from(i32::MIN) {
            return Err(DiceError::OutOfRange(expr.to_string()));
        }
        Ok(expr)
    }

    /// Parse an expression from dice notation.
    pub fn parse(input: &str) -> DiceResult<Self> {
        if input.is_empty() {
            return Err(DiceError::Empty);
        }

        let (count_str, rest) = input
            .split_once('d')
            .ok_or_else(|| DiceError::InvalidFormat(format!("missing 'd' in '{input}'")))?;

        let count = parse_number(count_str)
            .ok_or_else(|| DiceError::InvalidFormat(format!("invalid dice count in '{input}'")))?;

        let (sides_str, modifier) = match rest.find(['+', '-']) {
            Some(pos) => {
                let (sides_str, tail) = rest.split_at(pos);
                let magnitude = parse_number(&tail[1..])
                    .and_then(|m| i32::try_from(m).ok())
                    .ok_or_else(|| DiceError::InvalidModifier(tail.to_string()))?;
                let modifier = if tail.starts_with('-') {
                    -magnitude
                } else {
                    magnitude
                };
                (sides_str, modifier)
            }
            None => (rest, 0),
        };

        let sides = parse_number(sides_str)
            .ok_or_else(|| DiceError::InvalidFormat(format!("invalid die sides in '{input}'")))?;

        Self::new(count, sides, modifier)
    }

    /// Number of dice rolled.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Sides on each die.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Flat modifier added after summing the dice.
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// The same dice with a different flat modifier, re-checked against
    /// the `i32` range.
    pub fn with_modifier(self, modifier: i32) -> DiceResult<Self> {
        Self::new(self.count, self.sides, modifier)
    }

    /// Smallest possible total.
    pub fn min(&self) -> i32 {
        (i64::from(self.count) + i64::from(self.modifier)) as i32
    }

    /// Largest possible total.
    pub fn max(&self) -> i32 {
        (i64::from(self.count) * i64::from(self.sides) + i64::from(self.modifier)) as i32
    }

    /// Roll every die independently, sum them, and apply the modifier.
    pub fn roll<S: RandomSource + ?Sized>(&self, source: &mut S) -> i32 {
        let sum: i64 = (0..self.count)
            .map(|_| i64::from(source.draw(1, self.sides)))
            .sum();
        (sum + i64::from(self.modifier)) as i32
    }
}

/// Unchecked field layout read by serde before validation.
#[derive(Deserialize)]
struct RawDiceExpression {
    count: u32,
    sides: u32,
    #[serde(default)]
    modifier: i32,
}

impl TryFrom<RawDiceExpression> for DiceExpression {
    type Error = DiceError;

    fn try_from(raw: RawDiceExpression) -> DiceResult<Self> {
        Self::new(raw.count, raw.sides, raw.modifier)
    }
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "-{}", m.unsigned_abs()),
        }
    }
}

/// Parse `expression` and roll it against `source`.
pub fn roll<S: RandomSource + ?Sized>(expression: &str, source: &mut S) -> DiceResult<i32> {
    Ok(DiceExpression::parse(expression)?.roll(source))
}

/// A non-empty run of ASCII digits.
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
