//! Ordered, read-only catalog of evaluation criteria.
//!
//! Loaded once per invocation from configuration and passed by
//! reference into the scoring engine. Lookup is by criterion name;
//! priorities are the weights the engine sums.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::errors::{Result, ScoreError};
use crate::core::{default_id, EvaluationCriterion};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaCatalog {
    criteria: Vec<EvaluationCriterion>,
}

impl CriteriaCatalog {
    /// Build a catalog, deriving missing criterion ids from their names.
    pub fn new(criteria: Vec<EvaluationCriterion>) -> Self {
        let criteria = criteria
            .into_iter()
            .map(|mut criterion| {
                if criterion.id.is_empty() {
                    criterion.id = default_id(&criterion.name);
                }
                criterion
            })
            .collect();
        Self { criteria }
    }

    /// Priority of the first entry named `name`, if any.
    pub fn weight(&self, name: &str) -> Option<i64> {
        self.criteria
            .iter()
            .find(|criterion| criterion.name == name)
            .map(|criterion| criterion.priority)
    }

    /// Sum of all priorities, the catalog-derived score ceiling.
    pub fn priority_sum(&self) -> i64 {
        self.criteria.iter().map(|criterion| criterion.priority).sum()
    }

    /// Check the catalog invariants: every priority positive, every
    /// name unique. Entries no rule references are fine.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for criterion in &self.criteria {
            if criterion.priority <= 0 {
                return Err(ScoreError::configuration(format!(
                    "criterion {:?} has non-positive priority {}",
                    criterion.name, criterion.priority
                )));
            }
            if !seen.insert(criterion.name.as_str()) {
                return Err(ScoreError::configuration(format!(
                    "criterion {:?} appears more than once in the catalog",
                    criterion.name
                )));
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvaluationCriterion> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[(&str, i64)]) -> CriteriaCatalog {
        CriteriaCatalog::new(
            entries
                .iter()
                .map(|(name, priority)| EvaluationCriterion::new(*name, *priority))
                .collect(),
        )
    }

    #[test]
    fn weight_finds_entries_by_name() {
        let catalog = catalog(&[("Availability Set", 4), ("Azure Backup", 2)]);
        assert_eq!(catalog.weight("Availability Set"), Some(4));
        assert_eq!(catalog.weight("Azure Backup"), Some(2));
    }

    #[test]
    fn weight_is_none_for_missing_entries() {
        let catalog = catalog(&[("Availability Set", 4)]);
        assert_eq!(catalog.weight("Dedicated Host Group"), None);
    }

    #[test]
    fn priority_sum_adds_all_entries() {
        let catalog = catalog(&[("A", 4), ("B", 4), ("C", 2)]);
        assert_eq!(catalog.priority_sum(), 10);
    }

    #[test]
    fn validate_accepts_a_well_formed_catalog() {
        let catalog = catalog(&[("Single Instance", 4), ("Azure Backup", 2)]);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_priorities() {
        for bad in [0, -3] {
            let catalog = catalog(&[("Single Instance", bad)]);
            let err = catalog.validate().unwrap_err();
            assert!(matches!(err, ScoreError::Configuration(_)));
        }
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let catalog = catalog(&[("Azure Backup", 2), ("Azure Backup", 4)]);
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, ScoreError::Configuration(_)));
    }

    #[test]
    fn missing_ids_are_derived_from_names() {
        let catalog = CriteriaCatalog::new(vec![EvaluationCriterion {
            id: String::new(),
            name: "Virtual Machine Scale Set".to_string(),
            priority: 4,
        }]);
        assert_eq!(
            catalog.iter().next().unwrap().id,
            "virtual-machine-scale-set"
        );
    }
}
