//! Preprocessing Error Types

use thiserror::Error;

/// Errors raised while transforming a feature row
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreprocessError {
    /// Feature columns do not line up with the fitted scaler
    #[error("Feature columns do not match the fitted scaler: expected {expected:?}, got {actual:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Categorical value unknown to the fitted encoder
    #[error("Unknown {column} category: {value:?}")]
    Encoding { column: String, value: String },

    /// Neither age lookup has an entry for this passenger
    #[error("No age imputation available for sex={sex}, class={ticket_class}, title={title:?}")]
    ImputationGap {
        sex: String,
        ticket_class: i64,
        title: Option<String>,
    },

    /// A model input is still missing after imputation
    #[error("Missing value for model input column {column}")]
    MissingValue { column: String },

    /// A column that cannot be converted to a number reached scaling
    #[error("Column {column} is not numeric")]
    NonNumeric { column: String },
}

/// Errors raised while assembling preprocessing artifacts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArtifactError {
    /// Two lookup entries share the same key
    #[error("Duplicate {table} entry: {key}")]
    DuplicateKey { table: &'static str, key: String },

    /// Encoder or dummy column definition is unusable
    #[error("Invalid encoder definition: {0}")]
    InvalidEncoder(String),

    /// Scaler parameters are inconsistent
    #[error("Invalid scaler: {0}")]
    InvalidScaler(String),
}
