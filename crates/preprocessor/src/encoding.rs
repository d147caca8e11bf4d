//! Categorical Encoders

use crate::error::{ArtifactError, PreprocessError};
use feature_builder::columns;
use std::collections::HashSet;
use tracing::warn;

/// Prefix of the embarkation dummy columns
pub const EMBARKED_PREFIX: &str = "Embarked_";

/// Label encoder for sex: the code is the index in the fitted class list
#[derive(Debug, Clone, PartialEq)]
pub struct SexEncoder {
    classes: Vec<String>,
}

impl SexEncoder {
    /// Create an encoder from the fitted class list
    pub fn new(classes: Vec<String>) -> Result<Self, ArtifactError> {
        if classes.is_empty() {
            return Err(ArtifactError::InvalidEncoder("sex encoder has no classes".to_string()));
        }
        let unique: HashSet<_> = classes.iter().collect();
        if unique.len() != classes.len() {
            return Err(ArtifactError::InvalidEncoder(format!(
                "sex encoder classes are not unique: {classes:?}"
            )));
        }
        Ok(Self { classes })
    }

    /// Fitted classes in code order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Encode one value; unknown categories fail
    pub fn encode(&self, value: &str) -> Result<i64, PreprocessError> {
        self.classes
            .iter()
            .position(|c| c == value)
            .map(|i| i as i64)
            .ok_or_else(|| PreprocessError::Encoding {
                column: columns::SEX.to_string(),
                value: value.to_string(),
            })
    }
}

/// One-hot encoding of the embarkation port with the first category dropped
#[derive(Debug, Clone, PartialEq)]
pub struct EmbarkedEncoding {
    columns: Vec<String>,
    baseline: Option<String>,
}

impl EmbarkedEncoding {
    /// Create the encoding from the fitted dummy column list.
    ///
    /// `baseline` is the dropped category, when the bundle records it.
    pub fn new(columns: Vec<String>, baseline: Option<String>) -> Result<Self, ArtifactError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !column.starts_with(EMBARKED_PREFIX) || column.len() == EMBARKED_PREFIX.len() {
                return Err(ArtifactError::InvalidEncoder(format!(
                    "dummy column {column:?} lacks the {EMBARKED_PREFIX} prefix"
                )));
            }
            if !seen.insert(column.as_str()) {
                return Err(ArtifactError::InvalidEncoder(format!(
                    "duplicate dummy column {column}"
                )));
            }
        }
        if let Some(base) = &baseline {
            if columns.contains(&format!("{EMBARKED_PREFIX}{base}")) {
                return Err(ArtifactError::InvalidEncoder(format!(
                    "baseline category {base} also has a dummy column"
                )));
            }
        }

        Ok(Self { columns, baseline })
    }

    /// Dummy column names in fitted order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Dropped category, if known
    pub fn baseline(&self) -> Option<&str> {
        self.baseline.as_deref()
    }

    /// Whether a port is the baseline or has its own dummy column
    pub fn recognizes(&self, value: &str) -> bool {
        self.baseline.as_deref() == Some(value)
            || self
                .columns
                .iter()
                .any(|c| c.strip_prefix(EMBARKED_PREFIX) == Some(value))
    }

    /// Expand a port value into one indicator per dummy column.
    ///
    /// The buffer always has one slot per fitted column, all false unless
    /// the value names one of them. A missing value and the baseline both
    /// give all zeros. Any other value fails when the baseline is known
    /// and is logged and zero-filled otherwise.
    pub fn expand(&self, value: Option<&str>) -> Result<Vec<bool>, PreprocessError> {
        let mut indicators = vec![false; self.columns.len()];

        let Some(value) = value else {
            return Ok(indicators);
        };

        let slot = self
            .columns
            .iter()
            .position(|c| c.strip_prefix(EMBARKED_PREFIX) == Some(value));

        match (slot, self.baseline.as_deref()) {
            (Some(i), _) => indicators[i] = true,
            (None, Some(base)) if base == value => {}
            (None, Some(_)) => {
                return Err(PreprocessError::Encoding {
                    column: columns::EMBARKED.to_string(),
                    value: value.to_string(),
                })
            }
            (None, None) => {
                warn!("Embarkation {:?} matches no dummy column, encoding as all zeros", value);
            }
        }

        Ok(indicators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ports(baseline: Option<&str>) -> EmbarkedEncoding {
        EmbarkedEncoding::new(
            vec![
                "Embarked_Queenstown".to_string(),
                "Embarked_Southampton".to_string(),
            ],
            baseline.map(str::to_string),
        )
        .unwrap()
    }

    #[test]
    fn test_sex_codes_follow_class_order() {
        let encoder = SexEncoder::new(vec!["female".to_string(), "male".to_string()]).unwrap();
        assert_eq!(encoder.encode("female").unwrap(), 0);
        assert_eq!(encoder.encode("male").unwrap(), 1);
    }

    #[test]
    fn test_unknown_sex_fails() {
        let encoder = SexEncoder::new(vec!["female".to_string(), "male".to_string()]).unwrap();
        let err = encoder.encode("Male").unwrap_err();
        assert_eq!(
            err,
            PreprocessError::Encoding {
                column: "Sex".to_string(),
                value: "Male".to_string()
            }
        );
    }

    #[test]
    fn test_sex_encoder_rejects_duplicates() {
        assert!(SexEncoder::new(vec!["male".to_string(), "male".to_string()]).is_err());
        assert!(SexEncoder::new(vec![]).is_err());
    }

    #[test]
    fn test_expand_sets_matching_slot() {
        let encoding = ports(Some("Cherbourg"));
        assert_eq!(encoding.expand(Some("Southampton")).unwrap(), vec![false, true]);
        assert_eq!(encoding.expand(Some("Queenstown")).unwrap(), vec![true, false]);
    }

    #[test]
    fn test_expand_baseline_and_missing_are_zero() {
        let encoding = ports(Some("Cherbourg"));
        assert_eq!(encoding.expand(Some("Cherbourg")).unwrap(), vec![false, false]);
        assert_eq!(encoding.expand(None).unwrap(), vec![false, false]);
    }

    #[test]
    fn test_expand_unknown_port() {
        assert!(matches!(
            ports(Some("Cherbourg")).expand(Some("Belfast")),
            Err(PreprocessError::Encoding { .. })
        ));
        assert_eq!(ports(None).expand(Some("Belfast")).unwrap(), vec![false, false]);
    }

    #[test]
    fn test_invalid_dummy_columns() {
        assert!(EmbarkedEncoding::new(vec!["Port_S".to_string()], None).is_err());
        assert!(EmbarkedEncoding::new(vec!["Embarked_".to_string()], None).is_err());
        assert!(EmbarkedEncoding::new(
            vec!["Embarked_S".to_string(), "Embarked_S".to_string()],
            None
        )
        .is_err());
        assert!(EmbarkedEncoding::new(vec!["Embarked_S".to_string()], Some("S".to_string())).is_err());
    }
}
