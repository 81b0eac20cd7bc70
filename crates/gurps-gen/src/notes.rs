//! Free-text flavor notes: appearance, inventory, and behavior.

use gurps_mechanics::dice::{DiceExpression, RandomSource, choose};
use tracing::debug;

use crate::config::{GeneratorConfig, NotesCapMode};
use crate::tables::{APPEARANCE, BEHAVIORS, ITEMS, pick};

/// Separator between entries on one notes line.
pub const ENTRY_SEPARATOR: &str = "; ";

/// Separator between notes lines.
pub const LINE_SEPARATOR: &str = "\n\t";

/// Roll the three notes lines and join them.
///
/// Appearance gets `floor(3d6 / 6)` picks, behaviors and items
/// `floor(3d6 / 4)` each, all with replacement. Lines are printed in the
/// order appearance, items, behaviors.
pub fn generate_notes<S: RandomSource + ?Sized>(config: &GeneratorConfig, source: &mut S) -> String {
    let appearance_count = DiceExpression::THREE_D6.roll(source) / 6;
    let mut appearance: Vec<String> = (0..appearance_count)
        .map(|_| pick(source, APPEARANCE).to_string())
        .collect();

    let behavior_count = DiceExpression::THREE_D6.roll(source) / 4;
    let mut behaviors: Vec<String> = (0..behavior_count)
        .map(|_| pick(source, BEHAVIORS).to_string())
        .collect();

    let item_count = DiceExpression::THREE_D6.roll(source) / 4;
    let mut items: Vec<String> = Vec::new();
    for _ in 0..item_count {
        if let Some(item) = choose(source, ITEMS) {
            items.push(item.render(source));
        }
    }

    if let Some(max) = config.max_appearance {
        appearance.truncate(max);
    }
    match config.notes_cap_mode {
        NotesCapMode::AppearanceSlice => {
            if let Some(max) = config.max_items {
                debug!(max, "items cap applied to appearance list");
                items = first_n(&appearance, max);
            }
            if let Some(max) = config.max_behaviors {
                debug!(max, "behaviors cap applied to appearance list");
                behaviors = first_n(&appearance, max);
            }
        }
        NotesCapMode::OwnList => {
            if let Some(max) = config.max_items {
                items.truncate(max);
            }
            if let Some(max) = config.max_behaviors {
                behaviors.truncate(max);
            }
        }
    }

    [appearance, items, behaviors]
        .iter()
        .map(|line| capitalize(&line.join(ENTRY_SEPARATOR)))
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

fn first_n(list: &[String], n: usize) -> Vec<String> {
    list.iter().take(n).cloned().collect()
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
