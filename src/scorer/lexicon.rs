use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Valence range of a lexicon entry.
pub const MIN_VALENCE: f64 = -4.0;
pub const MAX_VALENCE: f64 = 4.0;

const BUILTIN_LEXICON: &str = include_str!("default_lexicon.txt");

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read lexicon '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed lexicon line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("Valence {value} on line {line} is outside [-4, 4]")]
    OutOfRange { line: usize, value: f64 },
    #[error("Lexicon contains no entries")]
    Empty,
}

/// Token-to-valence table in the VADER lexicon layout.
///
/// Each line is `token<TAB>mean valence`, optionally followed by further
/// tab-separated columns (standard deviation, raw ratings) which are ignored.
/// Blank lines and lines starting with `#` are skipped. Tokens are stored
/// lowercased.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// The lexicon embedded in the binary.
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::parse(BUILTIN_LEXICON)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse(&content)?;
        info!(
            path = %path.display(),
            entries = lexicon.len(),
            "Loaded sentiment lexicon"
        );
        Ok(lexicon)
    }

    pub fn parse(content: &str) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();

        for (index, raw) in content.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim_end();
            if trimmed.trim_start().is_empty() || trimmed.trim_start().starts_with('#') {
                continue;
            }

            let mut columns = trimmed.split('\t');
            let token = columns.next().map(str::trim).unwrap_or_default();
            if token.is_empty() {
                return Err(LexiconError::Malformed {
                    line,
                    reason: "empty token".to_string(),
                });
            }

            let Some(raw_value) = columns.next() else {
                return Err(LexiconError::Malformed {
                    line,
                    reason: format!("missing valence for '{token}'"),
                });
            };
            let value: f64 = raw_value.trim().parse().map_err(|e| LexiconError::Malformed {
                line,
                reason: format!("invalid valence '{}': {e}", raw_value.trim()),
            })?;
            if !value.is_finite() || !(MIN_VALENCE..=MAX_VALENCE).contains(&value) {
                return Err(LexiconError::OutOfRange { line, value });
            }

            entries.insert(token.to_lowercase(), value);
        }

        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }

        debug!(entries = entries.len(), "Parsed lexicon");
        Ok(Self { entries })
    }

    /// Valence of an already-lowercased token.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds or replaces one entry.
    pub fn insert(&mut self, token: &str, valence: f64) {
        self.entries
            .insert(token.to_lowercase(), valence.clamp(MIN_VALENCE, MAX_VALENCE));
    }
}
