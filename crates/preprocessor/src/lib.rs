//! Inference Preprocessing
//!
//! Reproduces the training-time feature pipeline for a single passenger:
//! title-based age imputation, embarkation imputation, cabin presence,
//! categorical encoding, dummy expansion, column pruning and scaling.
//!
//! Every fitted value comes from an immutable [`PreprocessingArtifacts`]
//! passed explicitly into [`Preprocessor::transform`].

mod artifacts;
mod encoding;
mod error;
mod frame;
mod imputation;
mod pipeline;
mod scaler;
mod title;

pub use artifacts::{
    AgeFallbackEntry, AgeKey, AgeLookupEntry, ArtifactsDocument, PreprocessingArtifacts,
    SexClassKey,
};
pub use encoding::{EmbarkedEncoding, SexEncoder, EMBARKED_PREFIX};
pub use error::{ArtifactError, PreprocessError};
pub use frame::{Cell, Frame};
pub use imputation::{AgeImputer, AgeQuery, AgeStrategy, CompositeKeyLookup, SexClassLookup};
pub use pipeline::{FeatureVector, Preprocessor, HAS_CABIN, PRUNED_COLUMNS};
pub use scaler::{FittedScaler, ScalerDocument, ScalerKind};
pub use title::extract_title;
