use std::path::{Path, PathBuf};

use colored::Colorize;
use gurps_gen::{CharacterGenerator, GeneratorConfig, NotesCapMode};

use crate::session::Session;

/// Per-list caps given on the command line.
#[derive(Debug, Default)]
pub struct Caps {
    pub appearance: Option<usize>,
    pub items: Option<usize>,
    pub behaviors: Option<usize>,
    pub features: Option<usize>,
    pub skills: Option<usize>,
}

#[derive(Debug, Default)]
pub struct Options {
    pub count: usize,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub caps: Caps,
    pub fix_notes_caps: bool,
    pub json: bool,
    pub output: Option<PathBuf>,
}

pub fn run(options: &Options) -> Result<(), String> {
    let config = build_config(options)?;
    let generator =
        CharacterGenerator::new(config).map_err(|e| format!("invalid attribute bonus: {e}"))?;
    let mut source = super::random_source(options.seed);

    let mut session = Session::new();
    let mut characters = Vec::with_capacity(options.count);
    for _ in 0..options.count {
        let character = session
            .generate_unique(&generator, &mut *source)
            .map_err(|e| format!("generated {} of {}: {e}", session.len(), options.count))?;
        characters.push(character);
    }

    if let Some(path) = &options.output {
        session
            .save(path)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    }

    if options.json {
        let json = serde_json::to_string_pretty(&characters)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{json}");
    } else if let Some(path) = &options.output {
        println!(
            "  {} {} character(s) to {}",
            "Saved".green().bold(),
            session.len(),
            path.display()
        );
    } else {
        println!("{}", session.to_text());
    }
    Ok(())
}

/// Settings file first, then command-line overrides.
fn build_config(options: &Options) -> Result<GeneratorConfig, String> {
    let mut config = match &options.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    let caps = &options.caps;
    if let Some(max) = caps.appearance {
        config = config.with_max_appearance(max);
    }
    if let Some(max) = caps.items {
        config = config.with_max_items(max);
    }
    if let Some(max) = caps.behaviors {
        config = config.with_max_behaviors(max);
    }
    if let Some(max) = caps.features {
        config = config.with_max_features(max);
    }
    if let Some(max) = caps.skills {
        config = config.with_max_skills(max);
    }
    if options.fix_notes_caps {
        config = config.with_notes_cap_mode(NotesCapMode::OwnList);
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<GeneratorConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| format!("invalid config {}: {e}", path.display()))
}
