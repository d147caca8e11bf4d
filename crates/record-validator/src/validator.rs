//! Submission Validator

use crate::error::ValidationError;
use feature_builder::RawRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// Deck letter, then word characters or whitespace
static CABIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][\w\s]*$").expect("cabin pattern compiles"));

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Name length bounds in characters (inclusive)
    pub name_length: (usize, usize),
    /// Accepted ticket classes
    pub ticket_classes: Vec<u8>,
    /// Accepted sex values
    pub sexes: Vec<String>,
    /// Age valid range (years)
    pub age_range: (f64, f64),
    /// Lowest accepted fare
    pub min_fare: f64,
    /// Accepted embarkation ports
    pub ports: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_length: (3, 100),
            ticket_classes: vec![1, 2, 3],
            sexes: vec!["male".to_string(), "female".to_string()],
            age_range: (0.0, 100.0),
            min_fare: 0.0,
            ports: vec![
                "Cherbourg".to_string(),
                "Queenstown".to_string(),
                "Southampton".to_string(),
            ],
        }
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

/// Validator for passenger submissions
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate every field of a submission, collecting all violations
    pub fn validate(&self, record: &RawRecord) -> ValidationResult {
        let mut errors = Vec::new();
        let mut fields_checked = 0;

        let mut check = |result: Result<(), ValidationError>| {
            fields_checked += 1;
            if let Err(e) = result {
                errors.push(e);
            }
        };

        check(self.validate_name(&record.name));
        check(self.validate_ticket_class(record.ticket_class));
        check(self.validate_sex(&record.sex));
        if let Some(age) = record.age {
            check(self.validate_age(age));
        }
        if let Some(fare) = record.fare {
            check(self.validate_fare(fare));
        }
        if let Some(cabin) = record.cabin.as_deref() {
            check(self.validate_cabin(cabin));
        }
        if let Some(port) = record.embarked.as_deref() {
            check(self.validate_embarked(port));
        }

        if errors.is_empty() {
            ValidationResult::valid(fields_checked)
        } else {
            debug!("Submission rejected with {} error(s)", errors.len());
            ValidationResult::invalid(errors, fields_checked)
        }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate name length (counted in characters)
    pub fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        let (min, max) = self.config.name_length;
        let length = name.chars().count();
        if length < min || length > max {
            Err(ValidationError::InvalidLength {
                field: "name",
                length,
                min,
                max,
            })
        } else {
            Ok(())
        }
    }

    /// Validate ticket class
    pub fn validate_ticket_class(&self, class: u8) -> Result<(), ValidationError> {
        if self.config.ticket_classes.contains(&class) {
            Ok(())
        } else {
            Err(ValidationError::NotAllowed {
                field: "ticket_class",
                value: class.to_string(),
                allowed: self
                    .config
                    .ticket_classes
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            })
        }
    }

    /// Validate sex
    pub fn validate_sex(&self, sex: &str) -> Result<(), ValidationError> {
        Self::validate_one_of("sex", sex, &self.config.sexes)
    }

    /// Validate age
    pub fn validate_age(&self, age: f64) -> Result<(), ValidationError> {
        self.validate_range("age", age, self.config.age_range)
    }

    /// Validate fare
    pub fn validate_fare(&self, fare: f64) -> Result<(), ValidationError> {
        self.validate_range("fare", fare, (self.config.min_fare, f64::INFINITY))
    }

    /// Validate cabin: an uppercase deck letter followed by word characters
    /// or whitespace
    pub fn validate_cabin(&self, cabin: &str) -> Result<(), ValidationError> {
        if CABIN.is_match(cabin) {
            Ok(())
        } else {
            Err(ValidationError::InvalidFormat {
                field: "cabin",
                value: cabin.to_string(),
            })
        }
    }

    /// Validate embarkation port
    pub fn validate_embarked(&self, port: &str) -> Result<(), ValidationError> {
        Self::validate_one_of("embarked", port, &self.config.ports)
    }

    fn validate_one_of(
        field: &'static str,
        value: &str,
        allowed: &[String],
    ) -> Result<(), ValidationError> {
        if allowed.iter().any(|a| a == value) {
            Ok(())
        } else {
            Err(ValidationError::NotAllowed {
                field,
                value: value.to_string(),
                allowed: allowed.to_vec(),
            })
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
