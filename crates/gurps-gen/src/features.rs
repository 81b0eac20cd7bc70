//! Advantage and disadvantage roll tables.
//!
//! Each pass rolls 3d6. A critical sum (3, 17, or 18) expands into two
//! advantage rolls, on both tables. Sums 4 to 16 map to exactly one entry.

use gurps_mechanics::dice::{DiceExpression, RandomSource};
use gurps_mechanics::{Feature, FeatureKind};
use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::tables::{HABITS, pick};

/// Lowest non-critical sum.
pub const MIN_TABLE_SUM: i32 = 4;

/// One row of a feature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEntry {
    /// A trait with no level.
    Plain(FeatureKind),
    /// A trait at a fixed level.
    Leveled(FeatureKind, i32),
    /// A bad habit with a randomly picked phrase.
    BadHabit,
}

impl TableEntry {
    /// Build the feature, drawing a habit phrase for [`TableEntry::BadHabit`].
    pub fn build<S: RandomSource + ?Sized>(self, source: &mut S) -> Feature {
        match self {
            Self::Plain(kind) => Feature::new(kind),
            Self::Leveled(kind, level) => Feature::with_level(kind, level),
            Self::BadHabit => Feature::bad_habit(pick(source, HABITS)),
        }
    }
}

/// Advantages for sums 4 through 16.
pub const ADVANTAGES: [TableEntry; 13] = [
    TableEntry::Plain(FeatureKind::Voice),
    TableEntry::Leveled(FeatureKind::Charisma, 6),
    TableEntry::Leveled(FeatureKind::Alertness, 4),
    TableEntry::Plain(FeatureKind::CommonSense),
    TableEntry::Leveled(FeatureKind::Magery, 2),
    TableEntry::Leveled(FeatureKind::AcuteVision, 5),
    TableEntry::Leveled(FeatureKind::Alertness, 2),
    TableEntry::Leveled(FeatureKind::Charisma, 3),
    TableEntry::Leveled(FeatureKind::AcuteTasteAndSmell, 5),
    TableEntry::Plain(FeatureKind::DangerSense),
    TableEntry::Leveled(FeatureKind::Appearance, 1),
    TableEntry::Leveled(FeatureKind::AcuteHearing, 5),
    TableEntry::Leveled(FeatureKind::Appearance, 2),
];

/// Disadvantages for sums 4 through 16. Sums 6 and 7 share the bad habit.
pub const DISADVANTAGES: [TableEntry; 13] = [
    TableEntry::Plain(FeatureKind::Poverty),
    TableEntry::Plain(FeatureKind::Cowardice),
    TableEntry::BadHabit,
    TableEntry::BadHabit,
    TableEntry::Plain(FeatureKind::BadTemper),
    TableEntry::Plain(FeatureKind::Unluckiness),
    TableEntry::Plain(FeatureKind::Greed),
    TableEntry::Plain(FeatureKind::Overconfidence),
    TableEntry::Plain(FeatureKind::Honesty),
    TableEntry::Plain(FeatureKind::HardOfHearing),
    TableEntry::Leveled(FeatureKind::Appearance, -1),
    TableEntry::Plain(FeatureKind::BadSight),
    TableEntry::Leveled(FeatureKind::Appearance, -3),
];

/// Returns true for the sums that expand into two advantage rolls.
pub fn is_critical(sum: i32) -> bool {
    matches!(sum, 3 | 17 | 18)
}

/// Table row for a non-critical sum. Sums outside 4..=16 snap to the
/// nearest row.
pub fn entry_for(table: &[TableEntry; 13], sum: i32) -> TableEntry {
    let row = (sum - MIN_TABLE_SUM).clamp(0, table.len() as i32 - 1) as usize;
    table[row]
}

/// Rolls features against the two tables.
pub struct FeatureRoller<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> FeatureRoller<'a> {
    /// Create a roller bound to `config`.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// One advantage pass.
    pub fn advantages<S: RandomSource + ?Sized>(&self, source: &mut S) -> Vec<Feature> {
        self.roll_on(&ADVANTAGES, source, 0)
    }

    /// One disadvantage pass. A critical roll still yields advantages.
    pub fn disadvantages<S: RandomSource + ?Sized>(&self, source: &mut S) -> Vec<Feature> {
        self.roll_on(&DISADVANTAGES, source, 0)
    }

    fn roll_on<S: RandomSource + ?Sized>(
        &self,
        table: &[TableEntry; 13],
        source: &mut S,
        depth: u32,
    ) -> Vec<Feature> {
        let sum = DiceExpression::THREE_D6.roll(source);
        trace!(sum, depth, "feature roll");

        if is_critical(sum) {
            if depth >= self.config.max_critical_depth {
                debug!(sum, depth, "critical feature roll dropped at depth limit");
                return Vec::new();
            }
            debug!(sum, depth, "critical feature roll, rolling two advantages");
            let mut features = self.roll_on(&ADVANTAGES, source, depth + 1);
            features.extend(self.roll_on(&ADVANTAGES, source, depth + 1));
            return features;
        }

        vec![entry_for(table, sum).build(source)]
    }
}
