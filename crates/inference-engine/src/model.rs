//! Survival Classifiers

use crate::InferenceError;
use preprocessor::FeatureVector;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tract_onnx::prelude::*;

/// Binary classifier over a preprocessed feature vector
pub trait Predictor: Send + Sync {
    /// Model family, for logs
    fn kind(&self) -> &'static str;

    /// Predict survival for one vector
    fn predict(&self, vector: &FeatureVector) -> Result<bool, InferenceError>;
}

/// Serialized model description inside the bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Linear decision function `w·x + b`
    Linear { weights: Vec<f64>, intercept: f64 },
    /// ONNX graph, path relative to the bundle file
    Onnx { path: PathBuf },
}

impl ModelSpec {
    /// Instantiate the model for vectors of `input_width` features
    pub fn build(
        self,
        base_dir: &Path,
        input_width: usize,
    ) -> Result<Box<dyn Predictor>, InferenceError> {
        match self {
            ModelSpec::Linear { weights, intercept } => {
                if weights.len() != input_width {
                    return Err(InferenceError::ArtifactLoad(format!(
                        "linear model has {} weights but the scaler emits {} features",
                        weights.len(),
                        input_width
                    )));
                }
                Ok(Box::new(LinearClassifier::new(weights, intercept)?))
            }
            ModelSpec::Onnx { path } => {
                let resolved = if path.is_absolute() {
                    path
                } else {
                    base_dir.join(path)
                };
                Ok(Box::new(OnnxClassifier::load(&resolved, input_width)?))
            }
        }
    }
}

/// Linear classifier: survived when the decision value is positive
#[derive(Debug, Clone, PartialEq)]
pub struct LinearClassifier {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearClassifier {
    /// Create a linear classifier
    pub fn new(weights: Vec<f64>, intercept: f64) -> Result<Self, InferenceError> {
        if weights.is_empty() {
            return Err(InferenceError::ArtifactLoad("linear model has no weights".to_string()));
        }
        if weights.iter().any(|w| !w.is_finite()) || !intercept.is_finite() {
            return Err(InferenceError::ArtifactLoad(
                "linear model has non-finite coefficients".to_string(),
            ));
        }
        Ok(Self { weights, intercept })
    }

    /// Signed distance to the decision boundary
    pub fn decision_function(&self, values: &[f64]) -> Result<f64, InferenceError> {
        if values.len() != self.weights.len() {
            return Err(InferenceError::InvalidInputShape {
                expected: self.weights.len(),
                actual: values.len(),
            });
        }

        Ok(values
            .iter()
            .zip(&self.weights)
            .fold(self.intercept, |acc, (x, w)| acc + x * w))
    }
}

impl Predictor for LinearClassifier {
    fn kind(&self) -> &'static str {
        "linear"
    }

    fn predict(&self, vector: &FeatureVector) -> Result<bool, InferenceError> {
        let decision = self.decision_function(&vector.values)?;
        debug!("Linear decision value: {:.4}", decision);
        Ok(decision > 0.0)
    }
}

/// ONNX classifier executed with tract; the first output is the label
pub struct OnnxClassifier {
    plan: TypedRunnableModel<TypedModel>,
    input_width: usize,
}

impl OnnxClassifier {
    /// Load and optimize an ONNX graph taking a `[1, input_width]` f32 input
    pub fn load(path: &Path, input_width: usize) -> Result<Self, InferenceError> {
        info!("Loading ONNX model from {}", path.display());

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, input_width]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| {
                InferenceError::ArtifactLoad(format!("ONNX model {}: {e:#}", path.display()))
            })?;

        Ok(Self { plan, input_width })
    }
}

impl Predictor for OnnxClassifier {
    fn kind(&self) -> &'static str {
        "onnx"
    }

    fn predict(&self, vector: &FeatureVector) -> Result<bool, InferenceError> {
        if vector.len() != self.input_width {
            return Err(InferenceError::InvalidInputShape {
                expected: self.input_width,
                actual: vector.len(),
            });
        }

        let input: Vec<f32> = vector.values.iter().map(|v| *v as f32).collect();
        let failed = |e: TractError| InferenceError::InferenceFailed(format!("{e:#}"));

        let tensor = Tensor::from_shape(&[1, self.input_width], &input).map_err(failed)?;
        let outputs = self.plan.run(tvec!(tensor.into())).map_err(failed)?;
        let label = outputs
            .first()
            .ok_or_else(|| InferenceError::InferenceFailed("model produced no output".to_string()))?
            .cast_to::<f32>()
            .map_err(failed)?;
        let value = label
            .as_slice::<f32>()
            .map_err(failed)?
            .first()
            .copied()
            .ok_or_else(|| InferenceError::InferenceFailed("empty label tensor".to_string()))?;

        Ok(value != 0.0)
    }
}
