//! ONNX Runtime clickbait classifier with a guarded lazy loader.
//!
//! The session is created on first use, under the same mutex that
//! serializes inference, so two concurrent callers cannot both load the
//! model. A failed load leaves the handle unset; the next call makes a
//! fresh attempt.
//!
//! Artifact contract: `model.onnx` takes an int64 `input` of shape
//! `[batch, 100]` and produces a float32 `[batch, 1]` probability of the
//! positive class. An optional `vocab.json` beside it overrides the
//! built-in vocabulary.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use baitcheck_core::{CLASSIFICATION_THRESHOLD, PipelineError, Prediction, Verdict};
use ort::session::Session;
use ort::value::Tensor;
use tracing::{info, warn};

use crate::encoder::{self, MAX_SEQUENCE_LEN};
use crate::vocab::Vocabulary;

pub struct Classifier {
    model_path: PathBuf,
    vocab: Vocabulary,
    threshold: f32,
    session: Mutex<Option<Session>>,
}

impl Classifier {
    /// Create a classifier for a model directory containing `model.onnx`
    /// and optionally `vocab.json`. The session itself is loaded lazily on
    /// the first prediction.
    pub fn new(model_dir: &Path) -> anyhow::Result<Self> {
        let vocab_path = model_dir.join("vocab.json");
        let vocab = if vocab_path.exists() {
            Vocabulary::from_file(&vocab_path)?
        } else {
            Vocabulary::builtin()
        };

        Ok(Self {
            model_path: model_dir.join("model.onnx"),
            vocab,
            threshold: CLASSIFICATION_THRESHOLD,
            session: Mutex::new(None),
        })
    }

    /// Override the positive-class probability cutoff.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[must_use]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Probability of the positive class for `text`.
    ///
    /// Loads the model if it is not loaded yet. A load failure surfaces as
    /// [`PipelineError::ModelUnavailable`] and is retried on the next call.
    pub fn predict(&self, text: &str) -> Result<Prediction, PipelineError> {
        let indices = encoder::encode(&self.vocab, text);

        let mut guard = self
            .session
            .lock()
            .map_err(|_| PipelineError::Inference("classifier lock poisoned".into()))?;

        let session = match guard.as_mut() {
            Some(session) => session,
            None => match self.load_session() {
                Ok(session) => guard.insert(session),
                Err(e) => {
                    warn!(error = %e, "model load failed");
                    return Err(PipelineError::ModelUnavailable(e.to_string()));
                }
            },
        };

        let probability =
            run_forward(session, indices).map_err(|e| PipelineError::Inference(e.to_string()))?;
        Ok(Prediction::new(probability))
    }

    /// Classify `text` against the configured threshold.
    pub fn classify(&self, text: &str) -> Result<Verdict, PipelineError> {
        self.predict(text)
            .map(|prediction| prediction.verdict(self.threshold))
    }

    fn load_session(&self) -> anyhow::Result<Session> {
        anyhow::ensure!(
            self.model_path.exists(),
            "model.onnx not found at {}",
            self.model_path.display()
        );
        let session = Session::builder()?.commit_from_file(&self.model_path)?;
        info!(model = %self.model_path.display(), "loaded clickbait model");
        Ok(session)
    }
}

/// One forward pass over a single encoded sequence.
fn run_forward(session: &mut Session, indices: Vec<i64>) -> anyhow::Result<f32> {
    let shape = [1i64, MAX_SEQUENCE_LEN as i64];
    let input = Tensor::from_array((shape, indices.into_boxed_slice()))?;

    let outputs = session.run(ort::inputs!["input" => input])?;

    let (output_shape, output_data) = outputs[0].try_extract_tensor::<f32>()?;
    let dims: &[i64] = output_shape;
    anyhow::ensure!(
        !output_data.is_empty(),
        "model produced empty output (shape {dims:?})"
    );

    // Single-row input: the first element is P(positive).
    let probability = output_data[0];
    anyhow::ensure!(
        (0.0..=1.0).contains(&probability),
        "probability out of range: {probability}"
    );
    Ok(probability)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("models")
            .join("clickbait-classifier")
    }

    /// The binary artifact is not checked in; tests that need it skip when
    /// it is absent.
    fn artifact_present() -> bool {
        model_dir().join("model.onnx").exists()
    }

    #[test]
    fn missing_model_reports_unavailable() {
        let classifier = Classifier::new(Path::new("/nonexistent/model-dir")).unwrap();
        let err = classifier.classify("this one trick").unwrap_err();
        assert!(matches!(err, PipelineError::ModelUnavailable(_)));
    }

    #[test]
    fn failed_load_is_reattempted_on_next_call() {
        let classifier = Classifier::new(Path::new("/nonexistent/model-dir")).unwrap();
        for _ in 0..2 {
            let err = classifier.classify("anything").unwrap_err();
            assert!(matches!(err, PipelineError::ModelUnavailable(_)));
        }
    }

    #[test]
    fn threshold_defaults_and_overrides() {
        let classifier = Classifier::new(Path::new("/nonexistent/model-dir")).unwrap();
        assert!((classifier.threshold() - CLASSIFICATION_THRESHOLD).abs() < f32::EPSILON);

        let classifier = classifier.with_threshold(0.75);
        assert!((classifier.threshold() - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn builtin_vocab_used_without_artifact() {
        let classifier = Classifier::new(Path::new("/nonexistent/model-dir")).unwrap();
        assert_eq!(classifier.vocab().len(), 7);
    }

    #[test]
    fn prediction_is_deterministic() {
        if !artifact_present() {
            eprintln!("skipping: model.onnx not present");
            return;
        }
        let classifier = Classifier::new(&model_dir()).unwrap();
        let first = classifier
            .predict("this one trick will change your life")
            .unwrap();
        let second = classifier
            .predict("this one trick will change your life")
            .unwrap();
        assert_eq!(first.probability(), second.probability());
    }

    #[test]
    fn probability_is_in_range() {
        if !artifact_present() {
            eprintln!("skipping: model.onnx not present");
            return;
        }
        let classifier = Classifier::new(&model_dir()).unwrap();
        let prediction = classifier.predict("some arbitrary page text").unwrap();
        assert!((0.0..=1.0).contains(&prediction.probability()));
    }
}
