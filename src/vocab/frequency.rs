//! Word popularity on the Zipf scale.
//!
//! A Zipf value is `log10` of a word's frequency per billion words, so very
//! common English words sit around 6-7 and rare ones near 1. Words missing from
//! the corpus are reported as `0.0`.
//!
//! The default index is the wordfreq `large-en` model. A deployment can swap in
//! its own `word<TAB>zipf` export with [`ZipfTable`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;
use wordfreq::WordFreq;
use wordfreq_model::{ModelKind, load_wordfreq};

use crate::errors::HandlerError;

const MAX_ZIPF: f64 = 8.0;

pub trait PopularityIndex: Send + Sync {
    /// Zipf popularity of `word`, `0.0` when unknown.
    fn zipf(&self, word: &str) -> f64;
}

/// English word frequencies from the wordfreq `large-en` model.
pub struct WordFreqIndex {
    model: WordFreq,
}

impl WordFreqIndex {
    pub fn english() -> Result<Self, HandlerError> {
        let model = load_wordfreq(ModelKind::LargeEn)
            .map_err(|e| HandlerError::Config(format!("Failed to load wordfreq model: {}", e)))?;
        info!("Loaded wordfreq large-en model");
        Ok(Self { model })
    }
}

impl std::fmt::Debug for WordFreqIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordFreqIndex").field("model", &"large-en").finish()
    }
}

impl PopularityIndex for WordFreqIndex {
    fn zipf(&self, word: &str) -> f64 {
        f64::from(self.model.zipf_frequency(&word.to_lowercase()))
    }
}

/// Uses the table at `path` when given, otherwise the wordfreq model.
pub fn load_index(path: Option<&str>) -> Result<Box<dyn PopularityIndex>, HandlerError> {
    match path {
        Some(p) => Ok(Box::new(ZipfTable::from_path(p)?)),
        None => Ok(Box::new(WordFreqIndex::english()?)),
    }
}

/// In-memory `word -> zipf` table.
#[derive(Debug, Clone, Default)]
pub struct ZipfTable {
    entries: HashMap<String, f64>,
}

impl ZipfTable {
    /// Loads a `word<TAB>zipf` table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, HandlerError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            HandlerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let table = Self::parse(&raw)?;
        info!(path = %path.display(), words = table.len(), "Loaded Zipf table");
        Ok(table)
    }

    /// Parses table text. Blank lines and `#` comments are skipped.
    pub fn parse(raw: &str) -> Result<Self, HandlerError> {
        let mut entries = HashMap::new();

        for (idx, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut cols = line.split('\t');
            let (Some(word), Some(value), None) = (cols.next(), cols.next(), cols.next()) else {
                return Err(HandlerError::Config(format!(
                    "Zipf table line {}: expected `word<TAB>zipf`",
                    idx + 1
                )));
            };

            let zipf: f64 = value.trim().parse().map_err(|e| {
                HandlerError::Config(format!("Zipf table line {}: {}", idx + 1, e))
            })?;
            if !zipf.is_finite() {
                return Err(HandlerError::Config(format!(
                    "Zipf table line {}: value is not finite",
                    idx + 1
                )));
            }

            entries.insert(word.trim().to_lowercase(), zipf.clamp(0.0, MAX_ZIPF));
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PopularityIndex for ZipfTable {
    fn zipf(&self, word: &str) -> f64 {
        self.entries
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }
}

impl FromIterator<(String, f64)> for ZipfTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(w, z)| (w.to_lowercase(), z.clamp(0.0, MAX_ZIPF)))
                .collect(),
        }
    }
}
