use thiserror::Error;

/// Failure modes of a single pipeline run.
///
/// Every variant renders as a human-readable string; a failed run produces
/// no partial results. Remote-analysis failures are not represented here:
/// they are carried inside the report so the local verdict survives them.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no content found on the page")]
    NoContent,

    #[error("model not loaded: {0}")]
    ModelUnavailable(String),

    #[error("inference failed: {0}")]
    Inference(String),
}
