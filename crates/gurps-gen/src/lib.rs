//! Dice-driven GURPS character generation.
//!
//! Builds a complete [`Character`](gurps_mechanics::Character) from 3d6
//! rolls against fixed lookup tables: attributes, advantages and
//! disadvantages, skills, and free-text flavor notes.

pub mod config;
pub mod features;
pub mod generator;
pub mod notes;
pub mod skills;
pub mod tables;

pub use config::{GeneratorConfig, NotesCapMode};
pub use generator::CharacterGenerator;
