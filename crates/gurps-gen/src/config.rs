//! Configuration for character generation.

use serde::{Deserialize, Serialize};

/// Which list the `max_items` and `max_behaviors` caps slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotesCapMode {
    /// Both caps slice the appearance list, so a capped items or behaviors
    /// line repeats appearance entries. Kept for output compatibility with
    /// earlier session files.
    #[default]
    AppearanceSlice,
    /// Each cap slices its own list.
    OwnList,
}

/// Configuration for a [`CharacterGenerator`](crate::CharacterGenerator).
///
/// Every `max_*` cap truncates its list; `None` leaves it unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Cap on appearance entries in the notes.
    pub max_appearance: Option<usize>,
    /// Cap on inventory entries in the notes.
    pub max_items: Option<usize>,
    /// Cap on behavior entries in the notes.
    pub max_behaviors: Option<usize>,
    /// Cap on features after deduplication.
    pub max_features: Option<usize>,
    /// Cap on skills after deduplication.
    pub max_skills: Option<usize>,
    /// Number of advantage passes.
    pub advantage_passes: u32,
    /// Number of disadvantage passes.
    pub disadvantage_passes: u32,
    /// Flat bonus added to every 3d6 attribute roll.
    pub attribute_bonus: i32,
    /// How many nested critical rolls may expand before further criticals
    /// are dropped.
    pub max_critical_depth: u32,
    /// Which list the items and behaviors caps apply to.
    pub notes_cap_mode: NotesCapMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_appearance: None,
            max_items: None,
            max_behaviors: None,
            max_features: None,
            max_skills: None,
            advantage_passes: 1,
            disadvantage_passes: 1,
            attribute_bonus: 0,
            max_critical_depth: 4,
            notes_cap_mode: NotesCapMode::default(),
        }
    }
}

impl GeneratorConfig {
    /// Cap the number of appearance notes.
    pub fn with_max_appearance(mut self, max: usize) -> Self {
        self.max_appearance = Some(max);
        self
    }

    /// Cap the number of item notes.
    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Cap the number of behavior notes.
    pub fn with_max_behaviors(mut self, max: usize) -> Self {
        self.max_behaviors = Some(max);
        self
    }

    /// Cap the number of features.
    pub fn with_max_features(mut self, max: usize) -> Self {
        self.max_features = Some(max);
        self
    }

    /// Cap the number of skills.
    pub fn with_max_skills(mut self, max: usize) -> Self {
        self.max_skills = Some(max);
        self
    }

    /// Set the number of advantage and disadvantage passes.
    pub fn with_passes(mut self, advantages: u32, disadvantages: u32) -> Self {
        self.advantage_passes = advantages;
        self.disadvantage_passes = disadvantages;
        self
    }

    /// Add a flat bonus to every attribute roll.
    pub fn with_attribute_bonus(mut self, bonus: i32) -> Self {
        self.attribute_bonus = bonus;
        self
    }

    /// Bound critical-roll expansion depth.
    pub fn with_max_critical_depth(mut self, depth: u32) -> Self {
        self.max_critical_depth = depth;
        self
    }

    /// Choose which list the items/behaviors caps slice.
    pub fn with_notes_cap_mode(mut self, mode: NotesCapMode) -> Self {
        self.notes_cap_mode = mode;
        self
    }
}
