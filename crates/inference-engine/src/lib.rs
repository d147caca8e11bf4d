//! Survival Inference Engine
//!
//! Loads the versioned model bundle and runs the full prediction path:
//! feature building, preprocessing and a single classifier call.

mod bundle;
mod engine;
mod model;

pub use bundle::{BundleDocument, BundleLoader, ModelBundle};
pub use engine::{InferenceResult, SurvivalPredictor};
pub use model::{LinearClassifier, ModelSpec, OnnxClassifier, Predictor};

use preprocessor::{ArtifactError, PreprocessError};
use thiserror::Error;

/// Errors during bundle loading or inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Artifact bundle load failed: {0}")]
    ArtifactLoad(String),
    #[error("Preprocessing failed: {0}")]
    Preprocess(#[from] PreprocessError),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
}

impl From<ArtifactError> for InferenceError {
    fn from(err: ArtifactError) -> Self {
        InferenceError::ArtifactLoad(err.to_string())
    }
}
