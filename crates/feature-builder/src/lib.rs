//! Feature Builder
//!
//! Reshapes one passenger submission into the single-row raw feature record
//! the survival model was trained on.

mod builder;
mod record;

pub use builder::{build, RawFeatureRow};
pub use record::RawRecord;

/// Column labels of the training-time raw schema
pub mod columns {
    /// Passenger name (source of the title token)
    pub const NAME: &str = "Name";
    /// Ticket class (1, 2 or 3)
    pub const PASSENGER_CLASS: &str = "Pclass";
    /// Sex ("male" / "female")
    pub const SEX: &str = "Sex";
    /// Age in years
    pub const AGE: &str = "Age";
    /// Siblings and spouses aboard
    pub const SIBLINGS_SPOUSES: &str = "SibSp";
    /// Parents and children aboard
    pub const PARENTS_CHILDREN: &str = "Parch";
    /// Cabin identifier
    pub const CABIN: &str = "Cabin";
    /// Ticket identifier
    pub const TICKET: &str = "Ticket";
    /// Ticket price
    pub const FARE: &str = "Fare";
    /// Embarkation port
    pub const EMBARKED: &str = "Embarked";

    /// Raw schema in training column order
    pub const RAW_SCHEMA: [&str; 10] = [
        NAME,
        PASSENGER_CLASS,
        SEX,
        AGE,
        SIBLINGS_SPOUSES,
        PARENTS_CHILDREN,
        CABIN,
        TICKET,
        FARE,
        EMBARKED,
    ];
}
