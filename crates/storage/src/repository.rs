//! Repository Implementation

use crate::StorageError;
use chrono::{DateTime, Utc};
use feature_builder::RawRecord;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{debug, info};

/// Submission plus its predicted label, before persistence
#[derive(Debug, Clone, PartialEq)]
pub struct NewPassenger {
    pub passenger: RawRecord,
    pub survived: bool,
}

/// Stored passenger record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerRecord {
    pub id: i64,
    #[serde(flatten)]
    pub passenger: RawRecord,
    pub survived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

struct Table {
    rows: Vec<PassengerRecord>,
    next_id: i64,
}

/// Repository for passenger records (in-memory)
pub struct Repository {
    table: Mutex<Table>,
}

impl Repository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        info!("Creating in-memory passenger repository");
        Self {
            table: Mutex::new(Table {
                rows: Vec::with_capacity(1000),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Table>, StorageError> {
        self.table
            .lock()
            .map_err(|e| StorageError::DatabaseError(format!("Lock error: {}", e)))
    }

    /// Insert a scored passenger; assigns the id and timestamps
    pub fn insert_passenger(&self, new: NewPassenger) -> Result<PassengerRecord, StorageError> {
        let mut table = self.lock()?;

        let now = Utc::now();
        let record = PassengerRecord {
            id: table.next_id,
            passenger: new.passenger,
            survived: new.survived,
            created_at: now,
            updated_at: now,
        };
        table.next_id += 1;
        table.rows.push(record.clone());

        debug!("Inserted passenger with ID {}", record.id);
        Ok(record)
    }

    /// All passengers in insertion order
    pub fn get_passengers(&self) -> Result<Vec<PassengerRecord>, StorageError> {
        Ok(self.lock()?.rows.clone())
    }

    /// Look up one passenger by id
    pub fn get_passenger(&self, id: i64) -> Result<PassengerRecord, StorageError> {
        self.lock()?
            .rows
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    /// Get total passenger count
    pub fn passenger_count(&self) -> usize {
        self.table.lock().map(|t| t.rows.len()).unwrap_or(0)
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
