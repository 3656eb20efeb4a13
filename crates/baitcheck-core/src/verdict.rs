//! Binary clickbait verdict and the raw model probability behind it.

use core::fmt;

/// Probability cutoff for the positive class.
///
/// A prediction is `Positive` only when P(clickbait) is strictly greater
/// than this value.
pub const CLASSIFICATION_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    /// The local model considers the page clickbait.
    Positive,
    /// The local model considers the page legitimate.
    Negative,
}

impl Verdict {
    #[must_use]
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positive)
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::Negative)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "Clickbait"),
            Self::Negative => write!(f, "Not clickbait"),
        }
    }
}

/// Raw probability of the positive class, in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction(f32);

impl Prediction {
    #[must_use]
    pub fn new(probability: f32) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "probability must be in [0, 1]"
        );
        Self(probability)
    }

    #[must_use]
    pub fn probability(&self) -> f32 {
        self.0
    }

    /// Apply the threshold: `Positive` iff probability > threshold.
    #[inline]
    #[must_use]
    pub fn verdict(&self, threshold: f32) -> Verdict {
        if self.0 > threshold {
            Verdict::Positive
        } else {
            Verdict::Negative
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(clickbait)={:.3}", self.0)
    }
}
