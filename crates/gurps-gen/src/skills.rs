//! Skill generation.

use gurps_mechanics::Skill;
use gurps_mechanics::dice::{DiceExpression, RandomSource, choose};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::generator::merge_by_key;
use crate::tables::skill_names_for;

/// Reference attribute value for generated skills.
pub const BASE_REFERENCE: i32 = 10;

/// Base of the pinned level for generated skills (`12 + 1d6`).
pub const BASE_LEVEL: i32 = 12;

/// Roll a skill list.
///
/// Rolls `floor(3d6 / 2)` attempts, each picking a name from the themed
/// triple for a fresh 3d6 sum and pinning the level to `12 + 1d6`. Skills
/// sharing a name collapse into one entry; the result is sorted by level,
/// highest first, and then truncated to `max_skills`.
pub fn generate_skills<S: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    source: &mut S,
) -> Vec<Skill> {
    let attempts = DiceExpression::THREE_D6.roll(source) / 2;

    let mut rolled = Vec::new();
    for _ in 0..attempts {
        let triple = skill_names_for(DiceExpression::THREE_D6.roll(source));
        let name = choose(source, triple).copied().unwrap_or_default();
        let mut skill = Skill::new(name, "", "", BASE_REFERENCE);
        skill.set_level(BASE_LEVEL + DiceExpression::ONE_D6.roll(source));
        rolled.push(skill);
    }

    let mut skills = merge_by_key(rolled, |s| s.identity().to_string());
    skills.sort_by(|a, b| b.level().cmp(&a.level()));

    if let Some(max) = config.max_skills.filter(|&max| skills.len() > max) {
        debug!(count = skills.len(), max, "truncating skills");
        skills.truncate(max);
    }
    skills
}
