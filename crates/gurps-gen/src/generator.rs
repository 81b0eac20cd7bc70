//! The top-level character generator.

use std::collections::HashMap;
use std::hash::Hash;

use gurps_mechanics::dice::{DiceExpression, RandomSource};
use gurps_mechanics::{Character, DiceResult};
use gurps_mechanics::{Feature, FeatureKind};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::features::FeatureRoller;
use crate::notes::generate_notes;
use crate::skills::generate_skills;
use crate::tables::{NAMES, pick};

/// Collapse items sharing a key.
///
/// Each key keeps the position where it first appeared and the value that
/// appeared last.
pub fn merge_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut merged: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        match positions.get(&key(&item)) {
            Some(&index) => {
                debug!(index, "merged duplicate entry");
                merged[index] = item;
            }
            None => {
                positions.insert(key(&item), merged.len());
                merged.push(item);
            }
        }
    }
    merged
}

/// Builds random characters from dice rolls and the fixed tables.
///
/// Holds no state between calls; every [`generate`](Self::generate) is an
/// independent pipeline over the supplied randomness source.
#[derive(Debug, Clone)]
pub struct CharacterGenerator {
    config: GeneratorConfig,
    attribute_dice: DiceExpression,
}

impl Default for CharacterGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            attribute_dice: DiceExpression::THREE_D6,
        }
    }
}

impl CharacterGenerator {
    /// Create a generator with the given configuration.
    ///
    /// Fails with [`DiceError::OutOfRange`](gurps_mechanics::DiceError::OutOfRange)
    /// when `3d6` plus the attribute bonus cannot fit in an `i32`.
    pub fn new(config: GeneratorConfig) -> DiceResult<Self> {
        let attribute_dice = DiceExpression::THREE_D6.with_modifier(config.attribute_bonus)?;
        Ok(Self {
            config,
            attribute_dice,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a complete character.
    ///
    /// Draw order: name, ST, DX, IQ, HT, features, skills, notes.
    pub fn generate<S: RandomSource + ?Sized>(&self, source: &mut S) -> Character {
        let name = self.generate_name(source);
        let st = self.generate_attribute(source);
        let dx = self.generate_attribute(source);
        let iq = self.generate_attribute(source);
        let ht = self.generate_attribute(source);
        let features = self.generate_features(source);
        let skills = generate_skills(&self.config, source);
        let notes = generate_notes(&self.config, source);

        info!(
            %name,
            st,
            dx,
            iq,
            ht,
            features = features.len(),
            skills = skills.len(),
            "generated character"
        );

        Character::new(name)
            .with_attributes(st, dx, iq, ht)
            .with_features(features)
            .with_skills(skills)
            .with_notes(notes)
    }

    /// Pick a name. Repeats across calls are possible.
    pub fn generate_name<S: RandomSource + ?Sized>(&self, source: &mut S) -> String {
        pick(source, NAMES).to_string()
    }

    /// Roll one attribute as `3d6` plus the configured bonus.
    pub fn generate_attribute<S: RandomSource + ?Sized>(&self, source: &mut S) -> i32 {
        self.attribute_dice.roll(source)
    }

    /// Run every advantage pass, then every disadvantage pass, merge by
    /// trait kind, and apply the feature cap.
    pub fn generate_features<S: RandomSource + ?Sized>(&self, source: &mut S) -> Vec<Feature> {
        let roller = FeatureRoller::new(&self.config);
        let mut rolled = Vec::new();
        for _ in 0..self.config.advantage_passes {
            rolled.extend(roller.advantages(source));
        }
        for _ in 0..self.config.disadvantage_passes {
            rolled.extend(roller.disadvantages(source));
        }

        let mut features = merge_by_key(rolled, |f: &Feature| -> FeatureKind { f.kind });
        if let Some(max) = self.config.max_features.filter(|&max| features.len() > max) {
            debug!(count = features.len(), max, "truncating features");
            features.truncate(max);
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gurps_mechanics::{DiceError, ScriptedSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn merge_keeps_first_position_last_value() {
        let items = vec![("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)];
        let merged = merge_by_key(items, |(k, _)| *k);
        assert_eq!(merged, vec![("a", 3), ("b", 5), ("c", 4)]);
    }

    #[test]
    fn attribute_with_bonus() {
        let generator =
            CharacterGenerator::new(GeneratorConfig::default().with_attribute_bonus(2)).unwrap();
        let mut src = ScriptedSource::new([6, 6, 6]);
        assert_eq!(generator.generate_attribute(&mut src), 20);
    }

    #[test]
    fn rejects_overflowing_attribute_bonus() {
        for bonus in [i32::MAX, i32::MAX - 17] {
            let config = GeneratorConfig::default().with_attribute_bonus(bonus);
            assert!(
                matches!(CharacterGenerator::new(config), Err(DiceError::OutOfRange(_))),
                "{bonus}"
            );
        }
        let largest = GeneratorConfig::default().with_attribute_bonus(i32::MAX - 18);
        let mut src = ScriptedSource::new([6]);
        let generator = CharacterGenerator::new(largest).unwrap();
        assert_eq!(generator.generate_attribute(&mut src), i32::MAX);
    }

    #[test]
    fn features_merge_by_kind() {
        // advantage: Alertness 4 (sum 6); disadvantage critical -> Alertness 2, Voice
        let script = [2, 2, 2, 6, 6, 6, 6, 3, 1, 2, 1, 1];
        let mut src = ScriptedSource::new(script);
        let features = CharacterGenerator::default().generate_features(&mut src);
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].kind, FeatureKind::Alertness);
        assert_eq!(features[0].level, Some(2));
        assert_eq!(features[1].kind, FeatureKind::Voice);
    }

    #[test]
    fn feature_cap() {
        let script = [2, 2, 2, 6, 6, 6, 6, 3, 1, 2, 1, 1];
        let mut src = ScriptedSource::new(script);
        let generator = CharacterGenerator::new(GeneratorConfig::default().with_max_features(1)).unwrap();
        let features = generator.generate_features(&mut src);
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].kind, FeatureKind::Alertness);
    }

    #[test]
    fn extra_passes() {
        // two advantage passes (Voice, DangerSense), no disadvantage pass
        let mut src = ScriptedSource::new([2, 1, 1, 6, 6, 1]);
        let generator = CharacterGenerator::new(GeneratorConfig::default().with_passes(2, 0)).unwrap();
        let kinds: Vec<_> = generator
            .generate_features(&mut src)
            .iter()
            .map(|f| f.kind)
            .collect();
        assert_eq!(kinds, vec![FeatureKind::Voice, FeatureKind::DangerSense]);
    }

    #[test]
    fn seeded_generation_is_repeatable() {
        let generator = CharacterGenerator::default();
        let a = generator.generate(&mut StdRng::seed_from_u64(11));
        let b = generator.generate(&mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn generated_values_in_range() {
        let generator = CharacterGenerator::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let c = generator.generate(&mut rng);
            assert!(NAMES.contains(&c.name.as_str()));
            for attr in [c.st, c.dx, c.iq, c.ht] {
                assert!((3..=18).contains(&attr));
            }
            assert!(c.skills.len() <= 9);
            assert!(c.skills.windows(2).all(|w| w[0].level() >= w[1].level()));
            assert!(c.skills.iter().all(|s| (13..=18).contains(&s.level())));
            let notes = c.notes.as_deref().unwrap_or_default();
            assert_eq!(notes.matches("\n\t").count(), 2);
        }
    }
}
