//! Ordered Single-Row Frame
//!
//! Column order is part of the model contract, so every pipeline step works
//! on a frame that keeps insertion order: replacing a column keeps its
//! position, new columns are appended, dropped columns close the gap.

use crate::error::PreprocessError;
use feature_builder::{columns, RawFeatureRow};

/// A single cell of the frame
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Free text, possibly missing
    Text(Option<String>),
    /// Integer value
    Integer(i64),
    /// Real value, possibly missing
    Real(Option<f64>),
    /// Boolean indicator
    Flag(bool),
}

/// Ordered set of named cells describing one passenger
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    columns: Vec<(String, Cell)>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out a raw feature row in training column order
    pub fn from_row(row: &RawFeatureRow) -> Self {
        let mut frame = Self::new();
        frame.set(columns::NAME, Cell::Text(Some(row.name.clone())));
        frame.set(columns::PASSENGER_CLASS, Cell::Integer(row.passenger_class.into()));
        frame.set(columns::SEX, Cell::Text(Some(row.sex.clone())));
        frame.set(columns::AGE, Cell::Real(row.age));
        frame.set(columns::SIBLINGS_SPOUSES, Cell::Integer(row.siblings_spouses.into()));
        frame.set(columns::PARENTS_CHILDREN, Cell::Integer(row.parents_children.into()));
        frame.set(columns::CABIN, Cell::Text(row.cabin.clone()));
        frame.set(columns::TICKET, Cell::Text(Some(row.ticket.clone())));
        frame.set(columns::FARE, Cell::Real(row.fare));
        frame.set(columns::EMBARKED, Cell::Text(row.embarked.clone()));
        frame
    }

    /// Replace a column in place, or append it when absent
    pub fn set(&mut self, name: &str, cell: Cell) {
        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = cell,
            None => self.columns.push((name.to_string(), cell)),
        }
    }

    /// Get a column by name
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Drop the named columns, ignoring names that are not present
    pub fn drop_columns(&mut self, names: &[&str]) {
        self.columns.retain(|(n, _)| !names.contains(&n.as_str()));
    }

    /// Column labels in order
    pub fn labels(&self) -> Vec<String> {
        self.columns.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the frame has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Read a text column; `Ok(None)` when the value is missing
    pub fn text(&self, name: &str) -> Result<Option<&str>, PreprocessError> {
        match self.require(name)? {
            Cell::Text(value) => Ok(value.as_deref()),
            _ => Err(self.type_mismatch(name)),
        }
    }

    /// Read an integer column
    pub fn integer(&self, name: &str) -> Result<i64, PreprocessError> {
        match self.require(name)? {
            Cell::Integer(value) => Ok(*value),
            _ => Err(self.type_mismatch(name)),
        }
    }

    /// Read a real column; `Ok(None)` when the value is missing
    pub fn real(&self, name: &str) -> Result<Option<f64>, PreprocessError> {
        match self.require(name)? {
            Cell::Real(value) => Ok(*value),
            _ => Err(self.type_mismatch(name)),
        }
    }

    /// Coerce every column to `f64`, booleans becoming 0 or 1.
    ///
    /// Missing values and text columns are rejected.
    pub fn into_numeric(self) -> Result<(Vec<String>, Vec<f64>), PreprocessError> {
        let mut labels = Vec::with_capacity(self.columns.len());
        let mut values = Vec::with_capacity(self.columns.len());

        for (name, cell) in self.columns {
            let value = match cell {
                Cell::Integer(v) => v as f64,
                Cell::Real(Some(v)) => v,
                Cell::Flag(flag) => {
                    if flag {
                        1.0
                    } else {
                        0.0
                    }
                }
                Cell::Real(None) => return Err(PreprocessError::MissingValue { column: name }),
                Cell::Text(_) => return Err(PreprocessError::NonNumeric { column: name }),
            };
            labels.push(name);
            values.push(value);
        }

        Ok((labels, values))
    }

    fn require(&self, name: &str) -> Result<&Cell, PreprocessError> {
        self.get(name).ok_or_else(|| self.type_mismatch(name))
    }

    fn type_mismatch(&self, name: &str) -> PreprocessError {
        PreprocessError::SchemaMismatch {
            expected: vec![name.to_string()],
            actual: self.labels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RawFeatureRow {
        RawFeatureRow {
            name: "Allen, Mr. William Henry".to_string(),
            passenger_class: 3,
            sex: "male".to_string(),
            age: Some(35.0),
            siblings_spouses: 0,
            parents_children: 0,
            cabin: None,
            ticket: "373450".to_string(),
            fare: Some(8.05),
            embarked: Some("Southampton".to_string()),
        }
    }

    #[test]
    fn test_from_row_uses_raw_schema_order() {
        let frame = Frame::from_row(&row());
        assert_eq!(frame.labels(), columns::RAW_SCHEMA.to_vec());
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut frame = Frame::from_row(&row());
        frame.set(columns::SEX, Cell::Integer(1));
        assert_eq!(frame.labels()[2], columns::SEX);
        assert_eq!(frame.integer(columns::SEX).unwrap(), 1);

        frame.set("HasCabin", Cell::Flag(false));
        assert_eq!(frame.labels().last().unwrap(), "HasCabin");
    }

    #[test]
    fn test_drop_ignores_missing_columns() {
        let mut frame = Frame::from_row(&row());
        frame.drop_columns(&["PassengerId", columns::TICKET, "Survived"]);
        assert_eq!(frame.len(), 9);
        assert!(frame.get(columns::TICKET).is_none());
    }

    #[test]
    fn test_typed_access_rejects_wrong_type() {
        let frame = Frame::from_row(&row());
        assert!(frame.integer(columns::NAME).is_err());
        assert!(frame.text("Unknown").is_err());
        assert_eq!(frame.real(columns::FARE).unwrap(), Some(8.05));
    }

    #[test]
    fn test_into_numeric_coerces_flags() {
        let mut frame = Frame::new();
        frame.set("A", Cell::Integer(2));
        frame.set("B", Cell::Flag(true));
        frame.set("C", Cell::Flag(false));
        frame.set("D", Cell::Real(Some(0.5)));

        let (labels, values) = frame.into_numeric().unwrap();
        assert_eq!(labels, vec!["A", "B", "C", "D"]);
        assert_eq!(values, vec![2.0, 1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_into_numeric_rejects_missing_and_text() {
        let mut frame = Frame::new();
        frame.set("Fare", Cell::Real(None));
        assert_eq!(
            frame.into_numeric(),
            Err(PreprocessError::MissingValue { column: "Fare".to_string() })
        );

        let mut frame = Frame::new();
        frame.set("Name", Cell::Text(Some("x".to_string())));
        assert!(matches!(
            frame.into_numeric(),
            Err(PreprocessError::NonNumeric { .. })
        ));
    }
}
