//! Local inference layer: static vocabulary encoding and ONNX Runtime
//! classification.

mod encoder;
mod model;
mod vocab;

pub use encoder::{MAX_SEQUENCE_LEN, encode};
pub use model::Classifier;
pub use vocab::{UNKNOWN_INDEX, Vocabulary};
