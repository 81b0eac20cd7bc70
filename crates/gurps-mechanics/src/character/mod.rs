//! Characters with base attributes, derived stats, features, and skills.
//!
//! Derived stats are computed from the base attributes on every access and
//! have no storage of their own.

pub mod feature;
pub mod skill;

pub use feature::{Feature, FeatureKind};
pub use skill::{Difficulty, Skill};

use serde::{Deserialize, Serialize};

/// Default value for every base attribute.
pub const DEFAULT_ATTRIBUTE: i32 = 10;

/// Basic Speed as an exact quarter-step rational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BasicSpeed {
    quarters: i64,
}

impl BasicSpeed {
    /// Basic Speed for `(dx + ht) / 4`, summed in `i64` so any pair of
    /// attributes fits.
    pub fn from_attributes(dx: i32, ht: i32) -> Self {
        Self {
            quarters: i64::from(dx) + i64::from(ht),
        }
    }

    /// The value in quarters (i.e. `dx + ht`).
    pub fn quarters(&self) -> i64 {
        self.quarters
    }

    /// The value as a float. Exact, since the sum of two `i32`s stays well
    /// inside the 53-bit mantissa.
    pub fn as_f64(&self) -> f64 {
        self.quarters as f64 / 4.0
    }

    /// Largest integer not above the speed.
    pub fn floor(&self) -> i64 {
        self.quarters.div_euclid(4)
    }
}

impl std::fmt::Display for BasicSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.quarters < 0 { "-" } else { "" };
        let abs = self.quarters.unsigned_abs();
        let frac = match abs % 4 {
            0 => "0",
            1 => "25",
            2 => "5",
            _ => "75",
        };
        write!(f, "{sign}{}.{frac}", abs / 4)
    }
}

/// A generated or hand-built character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Strength.
    pub st: i32,
    /// Dexterity.
    pub dx: i32,
    /// Intelligence.
    pub iq: i32,
    /// Health.
    pub ht: i32,
    /// Advantages, disadvantages, and quirks in display order.
    pub features: Vec<Feature>,
    /// Skills in display order.
    pub skills: Vec<Skill>,
    /// Free-text flavor notes.
    pub notes: Option<String>,
}

impl Character {
    /// Create a character with all attributes at 10 and nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            st: DEFAULT_ATTRIBUTE,
            dx: DEFAULT_ATTRIBUTE,
            iq: DEFAULT_ATTRIBUTE,
            ht: DEFAULT_ATTRIBUTE,
            features: Vec::new(),
            skills: Vec::new(),
            notes: None,
        }
    }

    /// Set ST, DX, IQ, and HT.
    pub fn with_attributes(mut self, st: i32, dx: i32, iq: i32, ht: i32) -> Self {
        self.st = st;
        self.dx = dx;
        self.iq = iq;
        self.ht = ht;
        self
    }

    /// Set the feature list.
    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features = features;
        self
    }

    /// Set the skill list.
    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    /// Set the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Hit points (HT).
    pub fn hp(&self) -> i32 {
        self.ht
    }

    /// Will (IQ).
    pub fn will(&self) -> i32 {
        self.iq
    }

    /// Perception (IQ).
    pub fn perception(&self) -> i32 {
        self.iq
    }

    /// Fatigue points (ST).
    pub fn fp(&self) -> i32 {
        self.st
    }

    /// `(DX + HP) / 4`, unrounded.
    pub fn basic_speed(&self) -> BasicSpeed {
        BasicSpeed::from_attributes(self.dx, self.hp())
    }

    /// Basic Speed rounded down.
    pub fn basic_move(&self) -> i64 {
        self.basic_speed().floor()
    }

    /// Sum of all feature costs.
    pub fn feature_points(&self) -> i32 {
        self.features.iter().map(|f| f.cost).sum()
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        if let Some(notes) = &self.notes {
            writeln!(f, "\t{notes}")?;
        }
        writeln!(f, "ST: {} \t\t FP: {}", self.st, self.fp())?;
        writeln!(f, "DX: {} \t\t Will: {}", self.dx, self.will())?;
        writeln!(f, "IQ: {} \t\t Per: {}", self.iq, self.perception())?;
        writeln!(f, "HT: {} \t\t HP: {}", self.ht, self.hp())?;
        writeln!(f, "Basic Speed: {}", self.basic_speed())?;
        writeln!(f, "Basic Move: {}", self.basic_move())?;
        writeln!(f)?;
        writeln!(f, "Advantages // Disadvantages:")?;
        let features: Vec<String> = self.features.iter().map(ToString::to_string).collect();
        writeln!(f, "\t{}", features.join("\n\t"))?;
        writeln!(f)?;
        writeln!(f, "Skills:")?;
        let skills: Vec<String> = self.skills.iter().map(ToString::to_string).collect();
        write!(f, "\t{}", skills.join("\n\t"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults() {
        let c = Character::new("Арго (М)");
        assert_eq!((c.st, c.dx, c.iq, c.ht), (10, 10, 10, 10));
        assert!(c.features.is_empty());
        assert!(c.skills.is_empty());
        assert!(c.notes.is_none());
    }

    #[test]
    fn derived_stats_follow_base() {
        let mut c = Character::new("x").with_attributes(12, 13, 9, 11);
        assert_eq!(c.fp(), 12);
        assert_eq!(c.will(), 9);
        assert_eq!(c.perception(), 9);
        assert_eq!(c.hp(), 11);
        assert_eq!(c.basic_speed().as_f64(), 6.0);
        assert_eq!(c.basic_move(), 6);

        c.ht = 14;
        c.iq = 15;
        assert_eq!(c.hp(), 14);
        assert_eq!(c.will(), 15);
        assert_eq!(c.basic_speed().as_f64(), 6.75);
        assert_eq!(c.basic_move(), 6);
    }

    #[test]
    fn basic_speed_display() {
        assert_eq!(BasicSpeed::from_attributes(10, 10).to_string(), "5.0");
        assert_eq!(BasicSpeed::from_attributes(10, 11).to_string(), "5.25");
        assert_eq!(BasicSpeed::from_attributes(10, 12).to_string(), "5.5");
        assert_eq!(BasicSpeed::from_attributes(10, 13).to_string(), "5.75");
        assert_eq!(BasicSpeed::from_attributes(-3, -2).to_string(), "-1.25");
    }

    #[test]
    fn basic_move_floors_negative_speed() {
        let c = Character::new("x").with_attributes(10, -3, 10, -2);
        assert_eq!(c.basic_speed().as_f64(), -1.25);
        assert_eq!(c.basic_move(), -2);
    }

    #[test]
    fn basic_speed_extreme_attributes() {
        let c = Character::new("x").with_attributes(10, i32::MAX, 10, 1);
        assert_eq!(c.basic_speed().quarters(), 1 << 31);
        assert_eq!(c.basic_move(), 1 << 29);
        assert_eq!(c.basic_speed().to_string(), "536870912.0");

        let c = Character::new("x").with_attributes(10, i32::MIN, 10, i32::MIN);
        assert_eq!(c.basic_move(), -(1 << 30));
        assert_eq!(c.basic_speed().to_string(), "-1073741824.0");
    }

    #[test]
    fn feature_points_sum() {
        let c = Character::new("x").with_features(vec![
            Feature::new(FeatureKind::Voice),
            Feature::new(FeatureKind::Greed),
        ]);
        assert_eq!(c.feature_points(), -5);
    }

    #[test]
    fn render_sheet() {
        let mut skill = Skill::new("Драка", "", "", 10);
        skill.set_level(14);
        let c = Character::new("Мира (Ж)")
            .with_attributes(11, 12, 9, 10)
            .with_features(vec![Feature::new(FeatureKind::Voice)])
            .with_skills(vec![skill])
            .with_notes("Веснушки");
        let expected = "Мира (Ж)\n\
            \tВеснушки\n\
            ST: 11 \t\t FP: 11\n\
            DX: 12 \t\t Will: 9\n\
            IQ: 9 \t\t Per: 9\n\
            HT: 10 \t\t HP: 10\n\
            Basic Speed: 5.5\n\
            Basic Move: 5\n\
            \n\
            Advantages // Disadvantages:\n\
            \tГолос (Voice) [10]: +2 к навыкам, связанным с голосом\n\
            \n\
            Skills:\n\
            \tДрака  -> 14";
        assert_eq!(c.to_string(), expected);
    }

    #[test]
    fn serde_roundtrip() {
        let c = Character::new("x").with_skills(vec![Skill::new("a", "", "iq", 10)]);
        let json = serde_json::to_string(&c).unwrap();
        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    proptest! {
        #[test]
        fn basic_speed_is_exact(dx in any::<i32>(), ht in any::<i32>()) {
            let c = Character::new("p").with_attributes(10, dx, 10, ht);
            let sum = i64::from(dx) + i64::from(ht);
            prop_assert_eq!(c.basic_speed().quarters(), sum);
            prop_assert_eq!(c.basic_speed().as_f64(), (f64::from(dx) + f64::from(ht)) / 4.0);
            prop_assert_eq!(c.basic_move(), sum.div_euclid(4));
        }
    }
}
