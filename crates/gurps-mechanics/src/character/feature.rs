//! Advantages, disadvantages, and quirks.
//!
//! Costs follow the fixed Basic Set lookups for the traits the generator
//! knows about. Leveled traits scale their name, description, and cost
//! with the level.

use serde::{Deserialize, Serialize};

/// The specific trait a [`Feature`] represents.
///
/// Deduplication treats two features of the same kind as the same trait,
/// whatever their level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Pleasant, persuasive voice.
    Voice,
    /// Natural leadership and reaction bonus (leveled).
    Charisma,
    /// Bonus to all sense rolls (leveled).
    Alertness,
    /// Warned before doing something stupid.
    CommonSense,
    /// Magical aptitude (leveled).
    Magery,
    /// Keen eyesight (leveled).
    AcuteVision,
    /// Keen taste and smell (leveled).
    AcuteTasteAndSmell,
    /// Sixth sense for ambushes and traps.
    DangerSense,
    /// Physical appearance; positive levels are advantages, negative are
    /// disadvantages (leveled).
    Appearance,
    /// Keen hearing (leveled).
    AcuteHearing,
    /// Lack of money.
    Poverty,
    /// Avoids physical danger.
    Cowardice,
    /// An off-putting habit.
    BadHabit,
    /// Easily angered.
    BadTemper,
    /// Things go wrong at the worst moment.
    Unluckiness,
    /// Lust for wealth.
    Greed,
    /// Overestimates own ability.
    Overconfidence,
    /// Compelled to obey the law.
    Honesty,
    /// Poor hearing.
    HardOfHearing,
    /// Poor eyesight.
    BadSight,
}

impl FeatureKind {
    /// Returns true if the trait takes a level.
    pub fn is_leveled(self) -> bool {
        matches!(
            self,
            Self::Charisma
                | Self::Alertness
                | Self::Magery
                | Self::AcuteVision
                | Self::AcuteTasteAndSmell
                | Self::Appearance
                | Self::AcuteHearing
        )
    }

    /// Point cost at the given level. Unleveled traits ignore `level`.
    pub fn cost(self, level: i32) -> i32 {
        match self {
            Self::Voice => 10,
            Self::Charisma | Self::Alertness => 5 * level,
            Self::CommonSense => 10,
            Self::Magery => 5 + 10 * level,
            Self::AcuteVision | Self::AcuteTasteAndSmell | Self::AcuteHearing => 2 * level,
            Self::DangerSense => 15,
            Self::Appearance => match level.clamp(-3, 3) {
                -3 => -20,
                -2 => -10,
                -1 => -5,
                0 => 0,
                1 => 5,
                2 => 15,
                _ => 25,
            },
            Self::Poverty => -15,
            Self::Greed => -15,
            Self::BadSight => -25,
            Self::Cowardice
            | Self::BadHabit
            | Self::BadTemper
            | Self::Unluckiness
            | Self::Overconfidence
            | Self::Honesty
            | Self::HardOfHearing => -10,
        }
    }

    fn name(self, level: i32) -> String {
        match self {
            Self::Voice => "Голос (Voice)".into(),
            Self::Charisma => format!("Харизма {level:+} (Charisma)"),
            Self::Alertness => format!("Бдительность {level:+} (Alertness)"),
            Self::CommonSense => "Здравый смысл (Common Sense)".into(),
            Self::Magery => format!("Магические способности {level} (Magery)"),
            Self::AcuteVision => format!("Острое зрение {level:+} (Acute Vision)"),
            Self::AcuteTasteAndSmell => {
                format!("Острые вкус и обоняние {level:+} (Acute Taste and Smell)")
            }
            Self::DangerSense => "Чувство опасности (Danger Sense)".into(),
            Self::Appearance => match level.clamp(-3, 3) {
                -3 => "Уродливая внешность (Hideous)".into(),
                -2 => "Некрасивая внешность (Ugly)".into(),
                -1 => "Непривлекательная внешность (Unattractive)".into(),
                0 => "Обычная внешность (Average)".into(),
                1 => "Привлекательная внешность (Attractive)".into(),
                2 => "Красивая внешность (Handsome)".into(),
                _ => "Очень красивая внешность (Very Handsome)".into(),
            },
            Self::AcuteHearing => format!("Острый слух {level:+} (Acute Hearing)"),
            Self::Poverty => "Бедность (Poverty)".into(),
            Self::Cowardice => "Трусость (Cowardice)".into(),
            Self::BadHabit => "Вредная привычка (-2 к реакции)".into(),
            Self::BadTemper => "Вспыльчивость (Bad Temper)".into(),
            Self::Unluckiness => "Невезучесть (Unluckiness)".into(),
            Self::Greed => "Жадность (Greed)".into(),
            Self::Overconfidence => "Самоуверенность (Overconfidence)".into(),
            Self::Honesty => "Честность (Honesty)".into(),
            Self::HardOfHearing => "Тугоухость (Hard of Hearing)".into(),
            Self::BadSight => "Плохое зрение (Bad Sight)".into(),
        }
    }

    fn description(self, level: i32) -> String {
        match self {
            Self::Voice => "+2 к навыкам, связанным с голосом".into(),
            Self::Charisma => format!("{level:+} к реакции"),
            Self::Alertness => format!("{level:+} к проверкам восприятия"),
            Self::CommonSense => "мастер предупреждает о необдуманных поступках".into(),
            Self::Magery => format!("{level:+} к изучению заклинаний"),
            Self::AcuteVision => format!("{level:+} к проверкам зрения"),
            Self::AcuteTasteAndSmell => format!("{level:+} к проверкам вкуса и обоняния"),
            Self::DangerSense => "проверка IQ перед засадой или ловушкой".into(),
            Self::Appearance => {
                let reaction = match level.clamp(-3, 3) {
                    -3 => -4,
                    3 => 2,
                    other => other,
                };
                format!("{reaction:+} к реакции")
            }
            Self::AcuteHearing => format!("{level:+} к проверкам слуха"),
            Self::Poverty | Self::BadHabit => "-2 к реакции".into(),
            Self::Cowardice => "проверка воли перед любым риском".into(),
            Self::BadTemper => "проверка воли в напряженной ситуации".into(),
            Self::Unluckiness => "неудачи в самый важный момент".into(),
            Self::Greed => "проверка воли при виде богатства".into(),
            Self::Overconfidence => "переоценивает свои силы".into(),
            Self::Honesty => "соблюдает закон".into(),
            Self::HardOfHearing => "-4 к проверкам слуха".into(),
            Self::BadSight => "-6 к проверкам зрения".into(),
        }
    }
}

/// An advantage, disadvantage, or quirk with its point cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Which trait this is.
    pub kind: FeatureKind,
    /// Display name.
    pub name: String,
    /// Short rules summary.
    pub description: String,
    /// Point cost: positive for advantages, negative for disadvantages.
    pub cost: i32,
    /// Magnitude for leveled traits.
    pub level: Option<i32>,
}

impl Feature {
    /// Create a feature at level 1 (leveled kinds) or without a level.
    pub fn new(kind: FeatureKind) -> Self {
        Self::with_level(kind, 1)
    }

    /// Create a feature at the given level. The level is dropped for
    /// unleveled kinds.
    pub fn with_level(kind: FeatureKind, level: i32) -> Self {
        Self {
            kind,
            name: kind.name(level),
            description: kind.description(level),
            cost: kind.cost(level),
            level: kind.is_leveled().then_some(level),
        }
    }

    /// A bad habit described by `habit`.
    pub fn bad_habit(habit: &str) -> Self {
        Self {
            name: format!("Вредная привычка: {habit} (-2 к реакции)"),
            ..Self::new(FeatureKind::BadHabit)
        }
    }

    /// A feature outside the built-in lookups.
    pub fn custom(
        kind: FeatureKind,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: i32,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            cost,
            level: None,
        }
    }

    /// Returns true for positive-cost features.
    pub fn is_advantage(&self) -> bool {
        self.cost > 0
    }

    /// Returns true if both features are the same trait.
    pub fn same_kind(&self, other: &Feature) -> bool {
        self.kind == other.kind
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.name, self.cost, self.description)
    }
}
