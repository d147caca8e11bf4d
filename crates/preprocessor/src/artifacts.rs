//! Preprocessing Artifacts
//!
//! Fitted lookups, encoders and the scaler produced at training time. The
//! serialized [`ArtifactsDocument`] is converted once into the immutable
//! [`PreprocessingArtifacts`], which validates internal consistency.

use crate::encoding::{EmbarkedEncoding, SexEncoder};
use crate::error::ArtifactError;
use crate::scaler::{FittedScaler, ScalerDocument};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Composite key of the title-based age lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgeKey {
    pub sex: String,
    pub ticket_class: i64,
    pub title: String,
    pub siblings_spouses: i64,
    pub parents_children: i64,
}

/// Key of the coarse age fallback lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SexClassKey {
    pub sex: String,
    pub ticket_class: i64,
}

/// One serialized row of the composite age lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeLookupEntry {
    pub sex: String,
    pub ticket_class: i64,
    pub title: String,
    pub siblings_spouses: i64,
    pub parents_children: i64,
    /// Median age for the group
    pub age: f64,
}

/// One serialized row of the fallback age lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeFallbackEntry {
    pub sex: String,
    pub ticket_class: i64,
    /// Median age for the group
    pub age: f64,
}

/// Serialized preprocessing artifacts as stored in the model bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactsDocument {
    pub age_lookup: Vec<AgeLookupEntry>,
    pub age_lookup_fallback: Vec<AgeFallbackEntry>,
    /// Port imputed for first-class passengers without one
    pub embarked_fallback: String,
    /// Sex encoder classes in code order
    pub sex_classes: Vec<String>,
    pub embarked_dummy_columns: Vec<String>,
    /// Category dropped from the dummy columns
    #[serde(default)]
    pub embarked_baseline: Option<String>,
    pub scaler: ScalerDocument,
}

/// Immutable, validated preprocessing artifacts
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessingArtifacts {
    age_lookup: HashMap<AgeKey, f64>,
    age_lookup_fallback: HashMap<SexClassKey, f64>,
    embarked_fallback: String,
    sex_encoder: SexEncoder,
    embarked: EmbarkedEncoding,
    scaler: FittedScaler,
}

impl PreprocessingArtifacts {
    /// Median age for a composite key
    pub fn age_for(&self, key: &AgeKey) -> Option<f64> {
        self.age_lookup.get(key).copied()
    }

    /// Median age for a (sex, class) group
    pub fn fallback_age_for(&self, key: &SexClassKey) -> Option<f64> {
        self.age_lookup_fallback.get(key).copied()
    }

    /// Port imputed for first-class passengers
    pub fn embarked_fallback(&self) -> &str {
        &self.embarked_fallback
    }

    /// Fitted sex encoder
    pub fn sex_encoder(&self) -> &SexEncoder {
        &self.sex_encoder
    }

    /// Fitted embarkation dummy encoding
    pub fn embarked(&self) -> &EmbarkedEncoding {
        &self.embarked
    }

    /// Fitted scaler
    pub fn scaler(&self) -> &FittedScaler {
        &self.scaler
    }

    /// Number of entries in the composite age lookup
    pub fn age_lookup_len(&self) -> usize {
        self.age_lookup.len()
    }
}

impl TryFrom<ArtifactsDocument> for PreprocessingArtifacts {
    type Error = ArtifactError;

    fn try_from(doc: ArtifactsDocument) -> Result<Self, Self::Error> {
        let mut age_lookup = HashMap::with_capacity(doc.age_lookup.len());
        for entry in doc.age_lookup {
            let key = AgeKey {
                sex: entry.sex,
                ticket_class: entry.ticket_class,
                title: entry.title,
                siblings_spouses: entry.siblings_spouses,
                parents_children: entry.parents_children,
            };
            if age_lookup.contains_key(&key) {
                return Err(ArtifactError::DuplicateKey {
                    table: "age_lookup",
                    key: format!("{key:?}"),
                });
            }
            age_lookup.insert(key, entry.age);
        }

        let mut age_lookup_fallback = HashMap::with_capacity(doc.age_lookup_fallback.len());
        for entry in doc.age_lookup_fallback {
            let key = SexClassKey {
                sex: entry.sex,
                ticket_class: entry.ticket_class,
            };
            if age_lookup_fallback.contains_key(&key) {
                return Err(ArtifactError::DuplicateKey {
                    table: "age_lookup_fallback",
                    key: format!("{key:?}"),
                });
            }
            age_lookup_fallback.insert(key, entry.age);
        }

        let embarked = EmbarkedEncoding::new(doc.embarked_dummy_columns, doc.embarked_baseline)?;
        if embarked.baseline().is_some() && !embarked.recognizes(&doc.embarked_fallback) {
            return Err(ArtifactError::InvalidEncoder(format!(
                "embarkation fallback {:?} is neither the baseline nor a dummy column",
                doc.embarked_fallback
            )));
        }

        let artifacts = Self {
            age_lookup,
            age_lookup_fallback,
            embarked_fallback: doc.embarked_fallback,
            sex_encoder: SexEncoder::new(doc.sex_classes)?,
            embarked,
            scaler: FittedScaler::try_from(doc.scaler)?,
        };

        debug!(
            "Preprocessing artifacts ready: {} age groups, {} fallback groups, {} scaled features",
            artifacts.age_lookup.len(),
            artifacts.age_lookup_fallback.len(),
            artifacts.scaler.dimension()
        );

        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaler::ScalerKind;

    fn document() -> ArtifactsDocument {
        ArtifactsDocument {
            age_lookup: vec![AgeLookupEntry {
                sex: "female".to_string(),
                ticket_class: 1,
                title: "Miss".to_string(),
                siblings_spouses: 0,
                parents_children: 0,
                age: 30.0,
            }],
            age_lookup_fallback: vec![AgeFallbackEntry {
                sex: "female".to_string(),
                ticket_class: 1,
                age: 35.0,
            }],
            embarked_fallback: "Southampton".to_string(),
            sex_classes: vec!["female".to_string(), "male".to_string()],
            embarked_dummy_columns: vec!["Embarked_Queenstown".to_string()],
            embarked_baseline: None,
            scaler: ScalerDocument {
                feature_names: vec!["Age".to_string()],
                kind: ScalerKind::Standard {
                    mean: vec![0.0],
                    scale: vec![1.0],
                },
            },
        }
    }

    #[test]
    fn test_lookups_resolve() {
        let artifacts = PreprocessingArtifacts::try_from(document()).unwrap();

        let key = AgeKey {
            sex: "female".to_string(),
            ticket_class: 1,
            title: "Miss".to_string(),
            siblings_spouses: 0,
            parents_children: 0,
        };
        assert_eq!(artifacts.age_for(&key), Some(30.0));
        assert_eq!(
            artifacts.fallback_age_for(&SexClassKey {
                sex: "female".to_string(),
                ticket_class: 1
            }),
            Some(35.0)
        );
        assert_eq!(artifacts.embarked_fallback(), "Southampton");
    }

    #[test]
    fn test_duplicate_age_key_rejected() {
        let mut doc = document();
        let duplicate = doc.age_lookup[0].clone();
        doc.age_lookup.push(duplicate);

        assert!(matches!(
            PreprocessingArtifacts::try_from(doc),
            Err(ArtifactError::DuplicateKey { table: "age_lookup", .. })
        ));
    }

    #[test]
    fn test_duplicate_fallback_key_rejected() {
        let mut doc = document();
        let duplicate = doc.age_lookup_fallback[0].clone();
        doc.age_lookup_fallback.push(duplicate);

        assert!(matches!(
            PreprocessingArtifacts::try_from(doc),
            Err(ArtifactError::DuplicateKey { table: "age_lookup_fallback", .. })
        ));
    }

    #[test]
    fn test_unknown_embarked_fallback_rejected() {
        let mut doc = document();
        doc.embarked_baseline = Some("Cherbourg".to_string());
        doc.embarked_fallback = "Cherbourgh".to_string();

        assert!(matches!(
            PreprocessingArtifacts::try_from(doc),
            Err(ArtifactError::InvalidEncoder(_))
        ));
    }

    #[test]
    fn test_embarked_fallback_may_be_baseline_or_column() {
        let mut doc = document();
        doc.embarked_baseline = Some("Cherbourg".to_string());
        doc.embarked_fallback = "Cherbourg".to_string();
        assert!(PreprocessingArtifacts::try_from(doc.clone()).is_ok());

        doc.embarked_fallback = "Queenstown".to_string();
        assert!(PreprocessingArtifacts::try_from(doc).is_ok());
    }

    #[test]
    fn test_document_json_round_trip_fields() {
        let json = serde_json::to_string(&document()).unwrap();
        let parsed: ArtifactsDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document());
    }
}
