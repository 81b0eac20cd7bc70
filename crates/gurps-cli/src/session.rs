//! A list of generated characters and its on-disk text format.
//!
//! A session file holds one block per character, `name ===> sheet`, with
//! blocks separated by a blank-line-padded rule of 32 `=` characters.

use std::collections::HashSet;
use std::path::Path;

use gurps_gen::CharacterGenerator;
use gurps_gen::tables::NAMES;
use gurps_mechanics::{Character, RandomSource};
use tracing::debug;

/// Separator between character blocks.
pub const CHARACTER_LIST_SEPARATOR: &str = "\n\n================================\n\n";

/// Separator between a character's name and its sheet.
pub const SINGLE_CHARACTER_SEPARATOR: &str = " ===> ";

/// Generation attempts before giving up on finding an unused name.
const MAX_NAME_ATTEMPTS: usize = 256;

/// Errors from session handling.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No unused name could be generated.
    #[error("all {taken} distinct names are already taken")]
    NamesExhausted {
        /// Names already in the session.
        taken: usize,
    },

    /// The session text is not in the expected format.
    #[error("invalid session file: {0}")]
    InvalidFormat(String),

    /// Reading or writing the session file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// One saved character: its name and rendered sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub text: String,
}

/// An ordered list of characters with unique names.
#[derive(Debug, Clone, Default)]
pub struct Session {
    entries: Vec<Entry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generate a character whose name is not yet in the session, retrying
    /// on collisions, and append it.
    pub fn generate_unique<S: RandomSource + ?Sized>(
        &mut self,
        generator: &CharacterGenerator,
        source: &mut S,
    ) -> SessionResult<Character> {
        let taken: HashSet<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
        let distinct: HashSet<&str> = NAMES.iter().copied().collect();
        if distinct.is_subset(&taken) {
            return Err(SessionError::NamesExhausted { taken: taken.len() });
        }

        for attempt in 1..=MAX_NAME_ATTEMPTS {
            let character = generator.generate(source);
            if taken.contains(character.name.as_str()) {
                debug!(attempt, name = %character.name, "name collision, regenerating");
                continue;
            }
            self.entries.push(Entry {
                name: character.name.clone(),
                text: character.to_string(),
            });
            return Ok(character);
        }
        Err(SessionError::NamesExhausted { taken: taken.len() })
    }

    /// Render the session in the file format.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}{SINGLE_CHARACTER_SEPARATOR}{}", e.name, e.text))
            .collect::<Vec<_>>()
            .join(CHARACTER_LIST_SEPARATOR)
    }

    /// Parse the file format. Blank content is an empty session.
    pub fn parse(content: &str) -> SessionResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let blocks: Vec<&str> = content.split(CHARACTER_LIST_SEPARATOR).collect();
        if !blocks[0].contains(SINGLE_CHARACTER_SEPARATOR) {
            return Err(SessionError::InvalidFormat(
                "first block has no name separator".into(),
            ));
        }

        let entries = blocks
            .into_iter()
            .enumerate()
            .map(|(i, block)| {
                block
                    .split_once(SINGLE_CHARACTER_SEPARATOR)
                    .map(|(name, text)| Entry {
                        name: name.to_string(),
                        text: text.to_string(),
                    })
                    .ok_or_else(|| {
                        SessionError::InvalidFormat(format!("block {} has no name separator", i + 1))
                    })
            })
            .collect::<SessionResult<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> SessionResult<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    pub fn save(&self, path: &Path) -> SessionResult<()> {
        std::fs::write(path, self.to_text())?;
        Ok(())
    }
}
