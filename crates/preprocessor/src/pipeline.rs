//! Preprocessing Pipeline

use crate::artifacts::PreprocessingArtifacts;
use crate::error::PreprocessError;
use crate::frame::{Cell, Frame};
use crate::imputation::{AgeImputer, AgeQuery};
use crate::title::extract_title;
use feature_builder::{columns, RawFeatureRow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Derived cabin-presence column
pub const HAS_CABIN: &str = "HasCabin";

/// Identifier and label columns removed before scaling
pub const PRUNED_COLUMNS: [&str; 5] = [
    "PassengerId",
    columns::TICKET,
    columns::NAME,
    columns::CABIN,
    "Survived",
];

/// Ticket class whose missing port is imputed
const IMPUTED_PORT_CLASS: i64 = 1;

/// Scaled model input, aligned with the fitted scaler's columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Column labels in model order
    pub columns: Vec<String>,
    /// Scaled values
    pub values: Vec<f64>,
}

impl FeatureVector {
    /// Number of features
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named column
    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.values.get(i).copied())
    }
}

/// Turns raw feature rows into scaled feature vectors
#[derive(Debug, Default)]
pub struct Preprocessor {
    age_imputer: AgeImputer,
}

impl Preprocessor {
    /// Create a preprocessor with the standard age fallback chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a preprocessor with a custom age fallback chain
    pub fn with_age_imputer(age_imputer: AgeImputer) -> Self {
        Self { age_imputer }
    }

    /// Run every preprocessing step, in order, on one row
    pub fn transform(
        &self,
        row: &RawFeatureRow,
        artifacts: &PreprocessingArtifacts,
    ) -> Result<FeatureVector, PreprocessError> {
        let mut frame = Frame::from_row(row);

        let title = extract_title(&row.name);
        self.impute_age(&mut frame, title, artifacts)?;
        impute_embarked(&mut frame, artifacts)?;
        add_cabin_indicator(&mut frame)?;
        encode_sex(&mut frame, artifacts)?;
        expand_embarked(&mut frame, artifacts)?;
        frame.drop_columns(&PRUNED_COLUMNS);

        let (labels, values) = frame.into_numeric()?;
        let scaled = artifacts.scaler().transform(&labels, &values)?;

        debug!("Preprocessed passenger into {} features", scaled.len());

        Ok(FeatureVector {
            columns: labels,
            values: scaled,
        })
    }

    fn impute_age(
        &self,
        frame: &mut Frame,
        title: Option<&str>,
        artifacts: &PreprocessingArtifacts,
    ) -> Result<(), PreprocessError> {
        if frame.real(columns::AGE)?.is_some() {
            return Ok(());
        }

        // Every lookup is keyed on sex; an unencodable value can never match
        let sex = frame.text(columns::SEX)?.unwrap_or_default();
        artifacts.sex_encoder().encode(sex)?;

        let query = AgeQuery {
            sex,
            ticket_class: frame.integer(columns::PASSENGER_CLASS)?,
            title,
            siblings_spouses: frame.integer(columns::SIBLINGS_SPOUSES)?,
            parents_children: frame.integer(columns::PARENTS_CHILDREN)?,
        };
        let age = self.age_imputer.impute(&query, artifacts)?;

        frame.set(columns::AGE, Cell::Real(Some(age)));
        Ok(())
    }
}

fn impute_embarked(frame: &mut Frame, artifacts: &PreprocessingArtifacts) -> Result<(), PreprocessError> {
    let missing = frame.text(columns::EMBARKED)?.is_none();
    if missing && frame.integer(columns::PASSENGER_CLASS)? == IMPUTED_PORT_CLASS {
        debug!("Embarkation imputed as {}", artifacts.embarked_fallback());
        frame.set(
            columns::EMBARKED,
            Cell::Text(Some(artifacts.embarked_fallback().to_string())),
        );
    }
    Ok(())
}

fn add_cabin_indicator(frame: &mut Frame) -> Result<(), PreprocessError> {
    let has_cabin = frame.text(columns::CABIN)?.is_some_and(|c| !c.is_empty());
    frame.set(HAS_CABIN, Cell::Flag(has_cabin));
    Ok(())
}

fn encode_sex(frame: &mut Frame, artifacts: &PreprocessingArtifacts) -> Result<(), PreprocessError> {
    let sex = frame.text(columns::SEX)?.unwrap_or_default();
    let code = artifacts.sex_encoder().encode(sex)?;
    frame.set(columns::SEX, Cell::Integer(code));
    Ok(())
}

fn expand_embarked(frame: &mut Frame, artifacts: &PreprocessingArtifacts) -> Result<(), PreprocessError> {
    let encoding = artifacts.embarked();
    let indicators = encoding.expand(frame.text(columns::EMBARKED)?)?;

    frame.drop_columns(&[columns::EMBARKED]);
    for (column, flag) in encoding.columns().iter().zip(indicators) {
        frame.set(column, Cell::Flag(flag));
    }
    Ok(())
}
