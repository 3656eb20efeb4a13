//! Static token→index vocabulary for feature encoding.
//!
//! The mapping is immutable after construction. Tokens absent from the
//! vocabulary (including the empty token) map to [`UNKNOWN_INDEX`].

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

/// Index reserved for tokens absent from the vocabulary.
pub const UNKNOWN_INDEX: i64 = 0;

pub struct Vocabulary {
    index: HashMap<String, i64>,
}

impl Vocabulary {
    /// The built-in vocabulary shipped with the bundled classifier.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = [
            ("this", 1),
            ("one", 2),
            ("trick", 3),
            ("will", 4),
            ("change", 5),
            ("your", 6),
            ("life", 7),
        ];
        Self {
            index: entries
                .iter()
                .map(|&(token, idx)| (token.to_string(), idx))
                .collect(),
        }
    }

    /// Load a vocabulary from a JSON object of token → positive index.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading vocabulary {}", path.display()))?;
        let index: HashMap<String, i64> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing vocabulary {}", path.display()))?;
        anyhow::ensure!(
            index.values().all(|&idx| idx > UNKNOWN_INDEX),
            "vocabulary indices must be positive ({UNKNOWN_INDEX} is reserved for unknown tokens)"
        );
        Ok(Self { index })
    }

    /// Index for `token`, or [`UNKNOWN_INDEX`] when absent.
    #[must_use]
    pub fn index_of(&self, token: &str) -> i64 {
        self.index.get(token).copied().unwrap_or(UNKNOWN_INDEX)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
