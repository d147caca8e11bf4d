//! Model Bundle Loading

use crate::model::{ModelSpec, Predictor};
use crate::InferenceError;
use preprocessor::{ArtifactsDocument, PreprocessingArtifacts};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Serialized bundle: model description plus preprocessing artifacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleDocument {
    /// Bundle version label
    pub version: String,
    /// Trained classifier
    pub model: ModelSpec,
    /// Fitted preprocessing artifacts
    pub preprocessor: ArtifactsDocument,
}

/// Loaded, read-only model bundle
pub struct ModelBundle {
    version: String,
    model: Box<dyn Predictor>,
    artifacts: PreprocessingArtifacts,
}

impl ModelBundle {
    /// Assemble a bundle from already-built parts
    pub fn new(
        version: impl Into<String>,
        model: Box<dyn Predictor>,
        artifacts: PreprocessingArtifacts,
    ) -> Self {
        Self {
            version: version.into(),
            model,
            artifacts,
        }
    }

    /// Build a bundle from its document; relative model paths resolve
    /// against `base_dir`
    pub fn from_document(doc: BundleDocument, base_dir: &Path) -> Result<Self, InferenceError> {
        let artifacts = PreprocessingArtifacts::try_from(doc.preprocessor)?;
        let model = doc.model.build(base_dir, artifacts.scaler().dimension())?;

        Ok(Self::new(doc.version, model, artifacts))
    }

    /// Bundle version label
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Trained classifier
    pub fn model(&self) -> &dyn Predictor {
        self.model.as_ref()
    }

    /// Fitted preprocessing artifacts
    pub fn artifacts(&self) -> &PreprocessingArtifacts {
        &self.artifacts
    }
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("version", &self.version)
            .field("model", &self.model.kind())
            .field("features", &self.artifacts.scaler().feature_names())
            .finish()
    }
}

/// Loads model bundles from disk
pub struct BundleLoader;

impl BundleLoader {
    /// Load a JSON bundle file. Any failure is fatal for the caller.
    pub fn load(path: impl AsRef<Path>) -> Result<ModelBundle, InferenceError> {
        let path = path.as_ref();
        info!("Loading model bundle from {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|e| {
            InferenceError::ArtifactLoad(format!("cannot read {}: {}", path.display(), e))
        })?;
        let doc: BundleDocument = serde_json::from_str(&contents).map_err(|e| {
            InferenceError::ArtifactLoad(format!("corrupt bundle {}: {}", path.display(), e))
        })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let bundle = ModelBundle::from_document(doc, base_dir)?;

        info!(
            "Model bundle {} loaded: {} model over {} features",
            bundle.version(),
            bundle.model().kind(),
            bundle.artifacts().scaler().dimension()
        );
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BUNDLE_JSON: &str = r#"{
        "version": "2024.1",
        "model": {"kind": "linear", "weights": [1.0, -1.0], "intercept": 0.0},
        "preprocessor": {
            "age_lookup": [],
            "age_lookup_fallback": [{"sex": "male", "ticket_class": 3, "age": 25.0}],
            "embarked_fallback": "Southampton",
            "sex_classes": ["female", "male"],
            "embarked_dummy_columns": ["Embarked_Queenstown"],
            "scaler": {
                "feature_names": ["Age", "Fare"],
                "kind": "min_max",
                "min": [0.0, 0.0],
                "scale": [0.0125, 0.002]
            }
        }
    }"#;

    fn bundle_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_bundle_from_file() {
        let file = bundle_file(BUNDLE_JSON);

        let bundle = BundleLoader::load(file.path()).unwrap();
        assert_eq!(bundle.version(), "2024.1");
        assert_eq!(bundle.model().kind(), "linear");
        assert_eq!(bundle.artifacts().scaler().dimension(), 2);
        assert!(bundle.artifacts().embarked().baseline().is_none());
    }

    #[test]
    fn test_missing_file_is_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BundleLoader::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, InferenceError::ArtifactLoad(_)));
    }

    #[test]
    fn test_corrupt_file_is_artifact_error() {
        let file = bundle_file("{\"version\": ");

        let err = BundleLoader::load(file.path()).unwrap_err();
        assert!(matches!(err, InferenceError::ArtifactLoad(_)));
    }

    #[test]
    fn test_inconsistent_artifacts_rejected() {
        let mut doc: BundleDocument = serde_json::from_str(BUNDLE_JSON).unwrap();
        doc.preprocessor.sex_classes = vec!["male".to_string(), "male".to_string()];

        let err = ModelBundle::from_document(doc, Path::new(".")).unwrap_err();
        assert!(matches!(err, InferenceError::ArtifactLoad(_)));
    }

    #[test]
    fn test_unknown_fallback_port_fails_at_load() {
        let mut doc: BundleDocument = serde_json::from_str(BUNDLE_JSON).unwrap();
        doc.preprocessor.embarked_baseline = Some("Cherbourg".to_string());
        doc.preprocessor.embarked_fallback = "Cherbourgh".to_string();

        let err = ModelBundle::from_document(doc, Path::new(".")).unwrap_err();
        assert!(matches!(err, InferenceError::ArtifactLoad(_)));
    }
}
