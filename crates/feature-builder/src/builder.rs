//! Raw Feature Row Assembly

use crate::RawRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Single-row record mirroring the training data's raw schema.
///
/// Field order matches [`crate::columns::RAW_SCHEMA`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFeatureRow {
    /// Name
    pub name: String,
    /// Pclass
    pub passenger_class: u8,
    /// Sex
    pub sex: String,
    /// Age
    pub age: Option<f64>,
    /// SibSp
    pub siblings_spouses: u32,
    /// Parch
    pub parents_children: u32,
    /// Cabin
    pub cabin: Option<String>,
    /// Ticket
    pub ticket: String,
    /// Fare
    pub fare: Option<f64>,
    /// Embarked
    pub embarked: Option<String>,
}

/// Build the raw feature row for one submission.
///
/// Renaming and reshaping only; malformed input is the validator's concern.
pub fn build(raw: &RawRecord) -> RawFeatureRow {
    debug!(
        "Building feature row: class={}, age_present={}, cabin_present={}, embarked_present={}",
        raw.ticket_class,
        raw.age.is_some(),
        raw.cabin.is_some(),
        raw.embarked.is_some()
    );

    RawFeatureRow {
        name: raw.name.clone(),
        passenger_class: raw.ticket_class,
        sex: raw.sex.clone(),
        age: raw.age,
        siblings_spouses: raw.siblings_spouses,
        parents_children: raw.parents_children,
        cabin: raw.cabin.clone(),
        ticket: raw.ticket.clone(),
        fare: raw.fare,
        embarked: raw.embarked.clone(),
    }
}
