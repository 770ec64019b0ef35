//! The scoring engine: a declarative flag -> criterion rule table
//! applied to one resource at a time.
//!
//! Each rule names the criterion whose priority it adds to the raw
//! score and the flag state that triggers it. Adding a criterion is a
//! data change, not a code change.

pub mod aggregation;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::CriteriaCatalog;
use crate::core::errors::{Result, ScoreError};
use crate::core::score_types::{RawScore, ScorePercentage};
use crate::core::{ResourceConfiguration, ResourceFlag, ScoreResult};

/// Default normalization ceiling. Fixed rather than derived from the
/// catalog so previously persisted percentages stay comparable;
/// configuration can switch to a catalog-derived ceiling instead.
pub const DEFAULT_MAX_SCORE: f64 = 24.0;

/// Which flag state adds the criterion's weight to the raw score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerWhen {
    /// Penalize the presence of a sub-optimal attribute.
    #[default]
    Set,
    /// Penalize the absence of a protective attribute.
    Unset,
}

/// One row of the flag -> criterion mapping table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagRule {
    pub flag: ResourceFlag,
    pub criterion: String,
    #[serde(default)]
    pub trigger: TriggerWhen,
}

impl FlagRule {
    fn triggered_by(&self, resource: &ResourceConfiguration) -> bool {
        match self.trigger {
            TriggerWhen::Set => resource.flag(self.flag),
            TriggerWhen::Unset => !resource.flag(self.flag),
        }
    }
}

fn rule(flag: ResourceFlag, criterion: &str, trigger: TriggerWhen) -> FlagRule {
    FlagRule {
        flag,
        criterion: criterion.to_string(),
        trigger,
    }
}

// Single Instance is the one inverted rule: the penalty applies when
// the resource is NOT redundantly configured.
static DEFAULT_RULES: Lazy<Vec<FlagRule>> = Lazy::new(|| {
    vec![
        rule(
            ResourceFlag::SingleInstance,
            "Single Instance",
            TriggerWhen::Unset,
        ),
        rule(
            ResourceFlag::AvailabilitySet,
            "Availability Set",
            TriggerWhen::Set,
        ),
        rule(
            ResourceFlag::ScaleSet,
            "Virtual Machine Scale Set",
            TriggerWhen::Set,
        ),
        rule(
            ResourceFlag::AvailabilityZone,
            "Availability Zones",
            TriggerWhen::Set,
        ),
        rule(
            ResourceFlag::StandardHddDisk,
            "Standard Managed Disk (HDD)",
            TriggerWhen::Set,
        ),
        rule(
            ResourceFlag::StandardSsdDisk,
            "Standard Managed Disk (SSD)",
            TriggerWhen::Set,
        ),
        rule(
            ResourceFlag::PremiumSsdDisk,
            "Premium Managed Disk (SSD)",
            TriggerWhen::Set,
        ),
        rule(ResourceFlag::UltraDisk, "Ultra Disk (SSD)", TriggerWhen::Set),
        rule(
            ResourceFlag::StandardStorageAccount,
            "Standard Storage Account",
            TriggerWhen::Set,
        ),
        rule(
            ResourceFlag::PremiumStorageAccount,
            "Premium Storage Account",
            TriggerWhen::Set,
        ),
        rule(ResourceFlag::Backup, "Azure Backup", TriggerWhen::Set),
        rule(
            ResourceFlag::DedicatedHostGroup,
            "Dedicated Host Group",
            TriggerWhen::Set,
        ),
    ]
});

/// Built-in mapping table covering every resource flag.
pub fn default_rules() -> Vec<FlagRule> {
    DEFAULT_RULES.clone()
}

/// Pure scoring engine over immutable inputs.
///
/// Holds the rule table and the normalization ceiling; everything else
/// arrives per call. No side effects, no shared state between calls.
#[derive(Clone, Debug)]
pub struct ScoringEngine {
    pub rules: Vec<FlagRule>,
    pub max_score: f64,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            max_score: DEFAULT_MAX_SCORE,
        }
    }
}

impl ScoringEngine {
    pub fn new(rules: Vec<FlagRule>, max_score: f64) -> Self {
        Self { rules, max_score }
    }

    /// Score one resource against the catalog.
    ///
    /// A triggered rule whose criterion is absent from the catalog
    /// contributes zero and is recorded on the result instead of
    /// failing. The percentage is `1 - raw / max`, clamped to [0, 1].
    pub fn score(
        &self,
        catalog: &CriteriaCatalog,
        resource: &ResourceConfiguration,
    ) -> Result<ScoreResult> {
        if self.max_score <= 0.0 {
            return Err(ScoreError::configuration(format!(
                "max score must be positive, got {}",
                self.max_score
            )));
        }
        catalog.validate()?;

        let mut raw = 0.0;
        let mut unmapped = Vec::new();
        for rule in &self.rules {
            if !rule.triggered_by(resource) {
                continue;
            }
            match catalog.weight(&rule.criterion) {
                Some(priority) => raw += priority as f64,
                None => unmapped.push(rule.criterion.clone()),
            }
        }

        Ok(ScoreResult {
            resource_id: resource.resource_id.clone(),
            raw_score: RawScore::new(raw),
            score_percentage: ScorePercentage::new(1.0 - raw / self.max_score),
            unmapped_criteria: unmapped,
        })
    }
}

/// Score every resource, serially or in parallel.
///
/// Output order matches input order in both modes; results are
/// identical either way since each call takes immutable inputs.
pub fn score_batch(
    engine: &ScoringEngine,
    catalog: &CriteriaCatalog,
    resources: &[ResourceConfiguration],
    parallel: bool,
) -> Result<Vec<ScoreResult>> {
    if parallel {
        resources
            .par_iter()
            .map(|resource| engine.score(catalog, resource))
            .collect()
    } else {
        resources
            .iter()
            .map(|resource| engine.score(catalog, resource))
            .collect()
    }
}
