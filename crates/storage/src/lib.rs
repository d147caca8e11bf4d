//! Storage Layer
//!
//! Keeps scored passenger submissions behind a repository.

mod repository;

pub use repository::{NewPassenger, PassengerRecord, Repository};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Passenger {0} not found")]
    NotFound(i64),
}
