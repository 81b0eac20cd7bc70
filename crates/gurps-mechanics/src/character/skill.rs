//! Skills and the points-to-bonus difficulty strategies.

use serde::{Deserialize, Serialize};

/// Default-roll penalty for a skill with no invested points.
pub const DEFAULT_MODIFIER: i32 = -5;

/// How invested character points convert into a skill bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Medium-difficulty skills. The conversion is not implemented yet and
    /// always yields a bonus of 0.
    #[default]
    Medium,
}

impl Difficulty {
    /// Lowercase name of the difficulty level.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Medium => "medium",
        }
    }

    /// Skill bonus earned by investing `points`.
    pub fn calculate_bonus(&self, _points: i32) -> i32 {
        match self {
            // TODO: apply the Basic Set points-to-level table for medium skills.
            Self::Medium => 0,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A trained capability rolled against a reference attribute.
///
/// Derived `PartialEq` compares every field. Generation merges skills by
/// [`Skill::identity`] instead, so two entries with the same name collapse
/// into one even when their points or levels differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Name of the attribute the skill is based on (e.g. "dx").
    pub based_on_name: String,
    /// Value of the reference attribute.
    pub based_on_reference: i32,
    /// Points-to-bonus conversion.
    pub difficulty: Difficulty,
    /// Character points invested.
    pub points: i32,
    /// Bonus applied when the skill is used unskilled (`points <= 0`).
    pub default_modifier: i32,
    override_level: Option<i32>,
}

impl Skill {
    /// Create an untrained medium skill.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        based_on_name: impl Into<String>,
        based_on_reference: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            based_on_name: based_on_name.into(),
            based_on_reference,
            difficulty: Difficulty::default(),
            points: 0,
            default_modifier: DEFAULT_MODIFIER,
            override_level: None,
        }
    }

    /// Set invested points.
    pub fn with_points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the unskilled default modifier.
    pub fn with_default_modifier(mut self, default_modifier: i32) -> Self {
        self.default_modifier = default_modifier;
        self
    }

    /// Deduplication key: the skill name.
    pub fn identity(&self) -> &str {
        &self.name
    }

    /// Returns true if both skills share the same identity key.
    pub fn same_skill(&self, other: &Skill) -> bool {
        self.identity() == other.identity()
    }

    /// Bonus over the reference attribute.
    pub fn bonus(&self) -> i32 {
        if self.points <= 0 {
            self.default_modifier
        } else {
            self.difficulty.calculate_bonus(self.points)
        }
    }

    /// Effective skill level.
    pub fn level(&self) -> i32 {
        self.override_level
            .unwrap_or_else(|| self.based_on_reference + self.bonus())
    }

    /// Pin the level to `level`, bypassing points and difficulty.
    pub fn set_level(&mut self, level: i32) {
        self.override_level = Some(level);
    }

    /// Drop a pinned level.
    pub fn clear_level(&mut self) {
        self.override_level = None;
    }

    /// The pinned level, if any.
    pub fn override_level(&self) -> Option<i32> {
        self.override_level
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.name)?;
        if self.override_level.is_none() {
            write!(
                f,
                "{}{:+} [{}] ",
                self.based_on_name.to_uppercase(),
                self.bonus(),
                self.points
            )?;
        }
        write!(f, " -> {}", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_always_zero() {
        for points in [-4, 0, 1, 4, 24] {
            assert_eq!(Difficulty::Medium.calculate_bonus(points), 0);
        }
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn unskilled_uses_default_modifier() {
        let skill = Skill::new("Stealth", "", "dx", 12);
        assert_eq!(skill.bonus(), -5);
        assert_eq!(skill.level(), 7);

        let skill = Skill::new("Stealth", "", "dx", 12)
            .with_points(-2)
            .with_default_modifier(-4);
        assert_eq!(skill.level(), 8);
    }

    #[test]
    fn trained_uses_difficulty() {
        let skill = Skill::new("Climbing", "", "dx", 11).with_points(4);
        assert_eq!(skill.bonus(), 0);
        assert_eq!(skill.level(), 11);
    }

    #[test]
    fn override_wins() {
        let mut skill = Skill::new("Climbing", "", "dx", 11).with_points(4);
        skill.set_level(17);
        assert_eq!(skill.level(), 17);
        assert_eq!(skill.override_level(), Some(17));
        skill.points = 0;
        assert_eq!(skill.level(), 17);
        skill.clear_level();
        assert_eq!(skill.level(), 6);
    }

    #[test]
    fn identity_is_name_only() {
        let a = Skill::new("Brawling", "", "dx", 10).with_points(2);
        let mut b = Skill::new("Brawling", "fists", "st", 14);
        b.set_level(15);
        assert!(a.same_skill(&b));
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a, b);
    }

    #[test]
    fn display_without_override() {
        let skill = Skill::new("Stealth", "", "dx", 12);
        assert_eq!(skill.to_string(), "Stealth DX-5 [0]  -> 7");
    }

    #[test]
    fn display_with_override() {
        let mut skill = Skill::new("Stealth", "", "", 10);
        skill.set_level(15);
        assert_eq!(skill.to_string(), "Stealth  -> 15");
    }
}
