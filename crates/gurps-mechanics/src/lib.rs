//! Dice engine and character model for GURPS character sheets.
//!
//! Provides a dice-notation parser/evaluator driven by an injectable
//! randomness source, and the character value objects (attributes,
//! features, skills, difficulties) with their derived-value rules.

pub mod character;
pub mod dice;
pub mod error;

pub use character::{BasicSpeed, Character, Difficulty, Feature, FeatureKind, Skill};
pub use dice::{DiceExpression, RandomSource, ScriptedSource, roll};
pub use error::{DiceError, DiceResult, GurpsError, GurpsResult};
