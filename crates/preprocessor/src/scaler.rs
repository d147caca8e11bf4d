//! Fitted Feature Scaler

use crate::error::{ArtifactError, PreprocessError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-feature scaling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerKind {
    /// Standardization: `(x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// Min-max in fitted form: `x * scale + min`
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

/// Serialized scaler as shipped in the artifact bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerDocument {
    /// Feature names in the order the scaler was fitted on
    pub feature_names: Vec<String>,
    /// Scaling parameters
    #[serde(flatten)]
    pub kind: ScalerKind,
}

/// Scaler bound to the exact ordered column list it was fitted on
#[derive(Debug, Clone, PartialEq)]
pub struct FittedScaler {
    feature_names: Vec<String>,
    kind: ScalerKind,
}

impl FittedScaler {
    /// Create a scaler, checking parameter consistency
    pub fn new(feature_names: Vec<String>, kind: ScalerKind) -> Result<Self, ArtifactError> {
        if feature_names.is_empty() {
            return Err(ArtifactError::InvalidScaler("no feature names".to_string()));
        }

        let mut seen = HashSet::new();
        for name in &feature_names {
            if !seen.insert(name.as_str()) {
                return Err(ArtifactError::InvalidScaler(format!(
                    "duplicate feature name {name}"
                )));
            }
        }

        let n = feature_names.len();
        let (offsets, scale) = match &kind {
            ScalerKind::Standard { mean, scale } => (mean, scale),
            ScalerKind::MinMax { min, scale } => (min, scale),
        };
        if offsets.len() != n || scale.len() != n {
            return Err(ArtifactError::InvalidScaler(format!(
                "expected {n} parameters per vector, got {} and {}",
                offsets.len(),
                scale.len()
            )));
        }
        if offsets.iter().chain(scale).any(|v| !v.is_finite()) {
            return Err(ArtifactError::InvalidScaler("non-finite parameter".to_string()));
        }
        if let ScalerKind::Standard { scale, .. } = &kind {
            if scale.iter().any(|s| *s == 0.0) {
                return Err(ArtifactError::InvalidScaler("zero standard deviation".to_string()));
            }
        }

        Ok(Self { feature_names, kind })
    }

    /// Feature names in fitted order
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of features
    pub fn dimension(&self) -> usize {
        self.feature_names.len()
    }

    /// Scale one row whose columns are labelled `labels`.
    ///
    /// Labels must equal the fitted names, same order, or the call fails.
    pub fn transform(&self, labels: &[String], values: &[f64]) -> Result<Vec<f64>, PreprocessError> {
        if labels != self.feature_names.as_slice() || values.len() != labels.len() {
            return Err(PreprocessError::SchemaMismatch {
                expected: self.feature_names.clone(),
                actual: labels.to_vec(),
            });
        }

        let scaled = match &self.kind {
            ScalerKind::Standard { mean, scale } => values
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(x, (m, s))| (x - m) / s)
                .collect(),
            ScalerKind::MinMax { min, scale } => values
                .iter()
                .zip(min.iter().zip(scale))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
        };

        Ok(scaled)
    }
}

impl TryFrom<ScalerDocument> for FittedScaler {
    type Error = ArtifactError;

    fn try_from(doc: ScalerDocument) -> Result<Self, Self::Error> {
        Self::new(doc.feature_names, doc.kind)
    }
}
