//! Classification pipeline: extract content, run the local model, then
//! optionally request a remote second opinion.
//!
//! Stages run in strict sequence with one awaited operation outstanding at
//! a time. The remote call happens only for a positive local verdict, and
//! its failure never discards the local result.

use baitcheck_ai::Classifier;
use baitcheck_core::{PipelineError, Prediction, Verdict, extract_content};
use baitcheck_llm::LlmClient;
use tracing::{info, warn};

/// Outcome of one pipeline run.
#[derive(Debug)]
pub struct Report {
    pub verdict: Verdict,
    pub prediction: Prediction,
    /// Free-text justification from the remote model, when requested and
    /// successful.
    pub analysis: Option<String>,
    /// Remote failure, when the second opinion was requested but failed.
    /// The local verdict is preserved regardless.
    pub remote_error: Option<String>,
}

/// Run the full pipeline over raw page HTML.
///
/// Halts with [`PipelineError::NoContent`] before any tensor work when the
/// page has neither headline nor article text, and with
/// [`PipelineError::ModelUnavailable`] when the model cannot be loaded (in
/// which case the remote call is never attempted).
pub async fn run_pipeline(
    html: &str,
    classifier: &Classifier,
    llm: Option<&LlmClient>,
) -> Result<Report, PipelineError> {
    let content = extract_content(html);
    if content.is_empty() {
        return Err(PipelineError::NoContent);
    }
    let text = content.combined();
    info!(chars = text.len(), "extracted page content");

    let prediction = classifier.predict(&text)?;
    let verdict = prediction.verdict(classifier.threshold());
    info!(probability = prediction.probability(), verdict = %verdict, "local classification");

    let (analysis, remote_error) = match escalation_target(verdict, llm) {
        Some(client) => match client.corroborate(&text).await {
            Ok(analysis) => (Some(analysis), None),
            Err(e) => {
                warn!(error = %e, "remote analysis failed; keeping local verdict");
                (None, Some(e.to_string()))
            }
        },
        None => (None, None),
    };

    Ok(Report {
        verdict,
        prediction,
        analysis,
        remote_error,
    })
}

/// The remote second opinion is requested only for a positive local
/// verdict, and only when a client is configured.
fn escalation_target<'a>(verdict: Verdict, llm: Option<&'a LlmClient>) -> Option<&'a LlmClient> {
    if verdict.is_positive() { llm } else { None }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn unloadable_classifier() -> Classifier {
        Classifier::new(Path::new("/nonexistent/model-dir")).unwrap()
    }

    #[tokio::test]
    async fn empty_page_halts_before_model_use() {
        // The classifier cannot load; NoContent proves the pipeline
        // stopped before touching it.
        let classifier = unloadable_classifier();
        let err = run_pipeline("", &classifier, None).await.unwrap_err();
        assert!(matches!(err, PipelineError::NoContent));
    }

    #[tokio::test]
    async fn page_without_headline_or_article_is_no_content() {
        let classifier = unloadable_classifier();
        let err = run_pipeline("<p>nothing to see</p>", &classifier, None)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::NoContent));
    }

    #[tokio::test]
    async fn model_load_failure_surfaces_as_unavailable() {
        // A client is configured, but the load failure means it is never
        // reached: the error comes back before any escalation.
        let classifier = unloadable_classifier();
        let client = test_client();
        let err = run_pipeline("<h1>This one trick</h1>", &classifier, Some(&client))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::ModelUnavailable(_)));
    }

    #[tokio::test]
    async fn remote_failure_preserves_local_verdict() {
        let model_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("models")
            .join("clickbait-classifier");
        if !model_dir.join("model.onnx").exists() {
            eprintln!("skipping: model.onnx not present");
            return;
        }

        // A threshold below zero forces a positive verdict; the client
        // points at an unreachable port, so the second opinion fails.
        let classifier = Classifier::new(&model_dir).unwrap().with_threshold(-1.0);
        let client = test_client();
        let report = run_pipeline(
            "<h1>This one trick will change your life</h1>",
            &classifier,
            Some(&client),
        )
        .await
        .unwrap();

        assert_eq!(report.verdict, Verdict::Positive);
        assert!(report.analysis.is_none());
        assert!(report.remote_error.is_some());
    }

    fn test_client() -> LlmClient {
        LlmClient::new(
            "http://localhost:9".into(),
            "key".into(),
            baitcheck_llm::DEFAULT_MODEL.into(),
        )
    }

    #[test]
    fn negative_verdict_never_escalates() {
        let client = test_client();
        assert!(escalation_target(Verdict::Negative, Some(&client)).is_none());
        assert!(escalation_target(Verdict::Negative, None).is_none());
    }

    #[test]
    fn positive_verdict_escalates_only_with_client() {
        let client = test_client();
        assert!(escalation_target(Verdict::Positive, Some(&client)).is_some());
        assert!(escalation_target(Verdict::Positive, None).is_none());
    }
}
