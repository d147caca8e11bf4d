//! Age Imputation
//!
//! A missing age is resolved by an ordered list of lookup strategies. The
//! first strategy that finds a value wins; when every strategy misses the
//! passenger is rejected with [`PreprocessError::ImputationGap`].

use crate::artifacts::{AgeKey, PreprocessingArtifacts, SexClassKey};
use crate::error::PreprocessError;
use tracing::debug;

/// Attributes an age lookup can key on
#[derive(Debug, Clone, PartialEq)]
pub struct AgeQuery<'a> {
    pub sex: &'a str,
    pub ticket_class: i64,
    /// Title token, absent when the name has none
    pub title: Option<&'a str>,
    pub siblings_spouses: i64,
    pub parents_children: i64,
}

/// One step of the age fallback chain
pub trait AgeStrategy: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Look up an age; `None` means not found
    fn lookup(&self, query: &AgeQuery<'_>, artifacts: &PreprocessingArtifacts) -> Option<f64>;
}

/// Lookup by (sex, class, title, siblings/spouses, parents/children)
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeKeyLookup;

impl AgeStrategy for CompositeKeyLookup {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn lookup(&self, query: &AgeQuery<'_>, artifacts: &PreprocessingArtifacts) -> Option<f64> {
        let title = query.title?;
        artifacts.age_for(&AgeKey {
            sex: query.sex.to_string(),
            ticket_class: query.ticket_class,
            title: title.to_string(),
            siblings_spouses: query.siblings_spouses,
            parents_children: query.parents_children,
        })
    }
}

/// Lookup by (sex, class)
#[derive(Debug, Clone, Copy, Default)]
pub struct SexClassLookup;

impl AgeStrategy for SexClassLookup {
    fn name(&self) -> &'static str {
        "sex_class"
    }

    fn lookup(&self, query: &AgeQuery<'_>, artifacts: &PreprocessingArtifacts) -> Option<f64> {
        artifacts.fallback_age_for(&SexClassKey {
            sex: query.sex.to_string(),
            ticket_class: query.ticket_class,
        })
    }
}

/// Ordered chain of age strategies
pub struct AgeImputer {
    strategies: Vec<Box<dyn AgeStrategy>>,
}

impl AgeImputer {
    /// Create an imputer evaluating `strategies` in order
    pub fn new(strategies: Vec<Box<dyn AgeStrategy>>) -> Self {
        Self { strategies }
    }

    /// Names of the strategies in evaluation order
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Resolve an age for `query`
    pub fn impute(
        &self,
        query: &AgeQuery<'_>,
        artifacts: &PreprocessingArtifacts,
    ) -> Result<f64, PreprocessError> {
        for strategy in &self.strategies {
            if let Some(age) = strategy.lookup(query, artifacts) {
                debug!("Age imputed by {} lookup: {}", strategy.name(), age);
                return Ok(age);
            }
        }

        Err(PreprocessError::ImputationGap {
            sex: query.sex.to_string(),
            ticket_class: query.ticket_class,
            title: query.title.map(str::to_string),
        })
    }
}

impl Default for AgeImputer {
    fn default() -> Self {
        Self::new(vec![Box::new(CompositeKeyLookup), Box::new(SexClassLookup)])
    }
}

impl std::fmt::Debug for AgeImputer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgeImputer")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}
