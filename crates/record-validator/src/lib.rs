//! Passenger Submission Validation
//!
//! Provides range checking and categorical validation for passenger
//! submissions before they reach the feature pipeline.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{Validator, ValidationConfig, ValidationResult};
