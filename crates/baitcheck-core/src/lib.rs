pub mod content;
pub mod error;
pub mod verdict;

pub use content::{PageContent, extract_content};
pub use error::PipelineError;
pub use verdict::{CLASSIFICATION_THRESHOLD, Prediction, Verdict};
