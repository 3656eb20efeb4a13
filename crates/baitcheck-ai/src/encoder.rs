//! Fixed-length tensor encoding for the clickbait classifier.

use crate::vocab::Vocabulary;

/// Model input width. Shorter token sequences are right-padded with
/// zeros, longer ones truncated to the first [`MAX_SEQUENCE_LEN`] tokens.
pub const MAX_SEQUENCE_LEN: usize = 100;

/// Encode text into exactly [`MAX_SEQUENCE_LEN`] vocabulary indices.
///
/// Lowercases the input, splits on whitespace, and maps each token through
/// the vocabulary (unknown → 0). Never fails; empty input yields the
/// all-zero tensor.
pub fn encode(vocab: &Vocabulary, text: &str) -> Vec<i64> {
    let mut indices: Vec<i64> = text
        .to_lowercase()
        .split_whitespace()
        .take(MAX_SEQUENCE_LEN)
        .map(|token| vocab.index_of(token))
        .collect();
    indices.resize(MAX_SEQUENCE_LEN, 0);
    indices
}
