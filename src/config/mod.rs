//! `.riskmap.toml` configuration model.
//!
//! Everything the score command can vary lives here: the criteria
//! catalog, the normalization ceiling, the flag -> criterion rule
//! table, and the identity references recorded on the assessment
//! score. Every section has a default, so an empty file (or none at
//! all) yields the stock VM resiliency setup.

mod loader;

pub use loader::{load_config, load_config_from, parse_config};

use serde::{Deserialize, Serialize};

use crate::catalog::CriteriaCatalog;
use crate::core::errors::{Result, ScoreError};
use crate::core::EvaluationCriterion;
use crate::scoring::aggregation::AssessmentRefs;
use crate::scoring::{default_rules, FlagRule, DEFAULT_MAX_SCORE};

/// Ceiling used to normalize raw scores.
///
/// `Fixed` keeps parity with historically persisted scores; the string
/// `"catalog-sum"` derives the ceiling from the catalog's own priority
/// sum instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaxScorePolicy {
    Fixed(f64),
    Derived(DerivedMaxScore),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DerivedMaxScore {
    CatalogSum,
}

impl Default for MaxScorePolicy {
    fn default() -> Self {
        Self::Fixed(DEFAULT_MAX_SCORE)
    }
}

impl MaxScorePolicy {
    /// Resolve the effective ceiling against a catalog. Fails when the
    /// result would make normalization undefined.
    pub fn resolve(&self, catalog: &CriteriaCatalog) -> Result<f64> {
        let max_score = match self {
            Self::Fixed(value) => *value,
            Self::Derived(DerivedMaxScore::CatalogSum) => catalog.priority_sum() as f64,
        };
        if max_score <= 0.0 {
            return Err(ScoreError::configuration(format!(
                "effective max score must be positive, got {max_score}"
            )));
        }
        Ok(max_score)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskmapConfig {
    /// Criteria catalog; the built-in VM resiliency catalog when omitted.
    #[serde(default = "default_criteria")]
    pub criteria: Vec<EvaluationCriterion>,

    #[serde(default)]
    pub max_score: MaxScorePolicy,

    /// Flag -> criterion mapping; the built-in table when omitted.
    #[serde(default = "crate::scoring::default_rules")]
    pub rules: Vec<FlagRule>,

    #[serde(default)]
    pub assessment: AssessmentRefs,
}

impl Default for RiskmapConfig {
    fn default() -> Self {
        Self {
            criteria: default_criteria(),
            max_score: MaxScorePolicy::default(),
            rules: default_rules(),
            assessment: AssessmentRefs::default(),
        }
    }
}

impl RiskmapConfig {
    /// Build the catalog this configuration describes.
    pub fn catalog(&self) -> CriteriaCatalog {
        CriteriaCatalog::new(self.criteria.clone())
    }
}

/// The twelve criteria of the stock VM resiliency catalog.
pub fn default_criteria() -> Vec<EvaluationCriterion> {
    vec![
        EvaluationCriterion::new("Single Instance", 4),
        EvaluationCriterion::new("Availability Set", 4),
        EvaluationCriterion::new("Virtual Machine Scale Set", 4),
        EvaluationCriterion::new("Availability Zones", 4),
        EvaluationCriterion::new("Standard Managed Disk (HDD)", 2),
        EvaluationCriterion::new("Standard Managed Disk (SSD)", 2),
        EvaluationCriterion::new("Premium Managed Disk (SSD)", 1),
        EvaluationCriterion::new("Ultra Disk (SSD)", 1),
        EvaluationCriterion::new("Standard Storage Account", 2),
        EvaluationCriterion::new("Premium Storage Account", 1),
        EvaluationCriterion::new("Azure Backup", 2),
        EvaluationCriterion::new("Dedicated Host Group", 1),
    ]
}
