//! Passenger Submission

use serde::{Deserialize, Serialize};

/// One passenger submission as received from the caller.
///
/// Field names follow the submission payload of the record-creation
/// service. Age, fare, cabin and embarkation port may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Full name, e.g. "Smith, Mr. John"
    pub name: String,
    /// Ticket class (1 = first, 2 = second, 3 = third)
    pub ticket_class: u8,
    /// "male" or "female"
    pub sex: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<f64>,
    /// Siblings and spouses aboard
    #[serde(rename = "number_siblings_spouses")]
    pub siblings_spouses: u32,
    /// Parents and children aboard
    #[serde(rename = "number_parents_children")]
    pub parents_children: u32,
    /// Ticket identifier
    pub ticket: String,
    /// Ticket price
    #[serde(default)]
    pub fare: Option<f64>,
    /// Cabin, first character is the deck letter
    #[serde(default)]
    pub cabin: Option<String>,
    /// Embarkation port ("Cherbourg", "Queenstown" or "Southampton")
    #[serde(default)]
    pub embarked: Option<String>,
}
