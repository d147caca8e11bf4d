//! Passenger business logic

use crate::ServiceError;
use feature_builder::RawRecord;
use inference_engine::SurvivalPredictor;
use record_validator::{ValidationConfig, Validator};
use storage::{NewPassenger, PassengerRecord, Repository};
use tracing::{info, warn};

/// Validates, scores and stores passenger submissions
pub struct PassengerService {
    predictor: SurvivalPredictor,
    repository: Repository,
    validator: Validator,
}

impl PassengerService {
    pub fn new(
        predictor: SurvivalPredictor,
        repository: Repository,
        validation: ValidationConfig,
    ) -> Self {
        Self {
            predictor,
            repository,
            validator: Validator::new(validation),
        }
    }

    /// Validate, predict, then persist. Nothing is stored on failure.
    pub fn create_passenger(&self, passenger: RawRecord) -> Result<PassengerRecord, ServiceError> {
        let result = self.validator.validate(&passenger);
        if !result.valid {
            warn!(
                "Rejected submission for {:?}: {} validation error(s)",
                passenger.name,
                result.errors.len()
            );
            return Err(ServiceError::Validation(result.errors));
        }

        let prediction = self.predictor.predict(&passenger)?;
        let record = self.repository.insert_passenger(NewPassenger {
            passenger,
            survived: prediction.survived,
        })?;

        info!(
            "Passenger {} created: survived={} ({}us)",
            record.id, record.survived, prediction.latency_us
        );
        Ok(record)
    }

    /// All stored passengers in creation order
    pub fn list_passengers(&self) -> Result<Vec<PassengerRecord>, ServiceError> {
        Ok(self.repository.get_passengers()?)
    }

    /// One stored passenger
    pub fn get_passenger(&self, id: i64) -> Result<PassengerRecord, ServiceError> {
        Ok(self.repository.get_passenger(id)?)
    }
}
