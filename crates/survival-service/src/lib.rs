//! Passenger Survival Service
//!
//! Business layer over the prediction pipeline: validates a submission,
//! scores it against the shared model bundle and persists the result.

mod business;
mod settings;

pub use business::PassengerService;
pub use settings::Settings;

use inference_engine::InferenceError;
use record_validator::ValidationError;
use storage::StorageError;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed with {} error(s): {:?}", .0.len(), .0)]
    Validation(Vec<ValidationError>),
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Initialize logging at the given level ("trace" to "error")
pub fn init_logging(level: &str) -> Result<(), ServiceError> {
    let level: Level = level
        .parse()
        .map_err(|_| ServiceError::Config(format!("unknown log level {level:?}")))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ServiceError::Config(format!("Failed to set tracing subscriber: {e}")))
}
