//! Survival Prediction Engine

use crate::bundle::ModelBundle;
use crate::InferenceError;
use feature_builder::RawRecord;
use preprocessor::{FeatureVector, Preprocessor};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Result of inference operation
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Predicted survival
    pub survived: bool,
    /// Scaled vector handed to the model
    pub features: FeatureVector,
    /// Inference latency in microseconds
    pub latency_us: u64,
}

/// Runs feature building, preprocessing and the classifier for one record.
///
/// The bundle is shared read-only, so one predictor can serve concurrent
/// callers without locking.
pub struct SurvivalPredictor {
    bundle: Arc<ModelBundle>,
    preprocessor: Preprocessor,
}

impl SurvivalPredictor {
    /// Create a predictor over a loaded bundle
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        info!("Creating survival predictor with bundle {}", bundle.version());
        Self {
            bundle,
            preprocessor: Preprocessor::new(),
        }
    }

    /// Create a predictor with a custom preprocessor
    pub fn with_preprocessor(bundle: Arc<ModelBundle>, preprocessor: Preprocessor) -> Self {
        Self {
            bundle,
            preprocessor,
        }
    }

    /// Predict survival for one submission
    pub fn predict(&self, record: &RawRecord) -> Result<InferenceResult, InferenceError> {
        let start = Instant::now();

        let row = feature_builder::build(record);
        let features = self.preprocessor.transform(&row, self.bundle.artifacts())?;
        let survived = self.bundle.model().predict(&features)?;

        let latency_us = start.elapsed().as_micros() as u64;
        debug!("Inference completed in {}us: survived={}", latency_us, survived);

        Ok(InferenceResult {
            survived,
            features,
            latency_us,
        })
    }

    /// Loaded bundle
    pub fn bundle(&self) -> &ModelBundle {
        &self.bundle
    }
}
