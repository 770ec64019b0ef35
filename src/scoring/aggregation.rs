//! Assessment-level aggregation of per-resource scores.
//!
//! Aggregation is a barrier: it runs only after every resource in the
//! invocation has been scored, so a failure here means nothing gets
//! persisted.

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, ScoreError};
use crate::core::score_types::ScorePercentage;
use crate::core::{AssessmentScope, AssessmentScore, ScoreResult};

/// Identity references recorded on the assessment-level score.
/// Configuration data; the defaults describe a high-availability
/// assessment of compute virtual machines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRefs {
    #[serde(default = "default_area_id")]
    pub area_id: String,
    #[serde(default = "default_service_type_id")]
    pub service_type_id: String,
    #[serde(default = "default_resource_type_id")]
    pub resource_type_id: String,
}

impl Default for AssessmentRefs {
    fn default() -> Self {
        Self {
            area_id: default_area_id(),
            service_type_id: default_service_type_id(),
            resource_type_id: default_resource_type_id(),
        }
    }
}

pub fn default_area_id() -> String {
    "high-availability".to_string()
}

pub fn default_service_type_id() -> String {
    "compute".to_string()
}

pub fn default_resource_type_id() -> String {
    "virtual-machine".to_string()
}

/// Arithmetic mean of the per-resource score percentages.
///
/// Order-independent for a given multiset of results. An empty input
/// fails explicitly instead of dividing by zero.
pub fn aggregate(results: &[ScoreResult]) -> Result<ScorePercentage> {
    if results.is_empty() {
        return Err(ScoreError::EmptyInput);
    }
    let sum: f64 = results
        .iter()
        .map(|result| result.score_percentage.value())
        .sum();
    Ok(ScorePercentage::new(sum / results.len() as f64))
}

/// Aggregate all results and attach the invocation identity.
pub fn assessment_score(
    scope: &AssessmentScope,
    refs: &AssessmentRefs,
    results: &[ScoreResult],
) -> Result<AssessmentScore> {
    let average_percentage = aggregate(results)?;
    Ok(AssessmentScore {
        assessment_id: scope.assessment_id.clone(),
        area_id: refs.area_id.clone(),
        service_type_id: refs.service_type_id.clone(),
        resource_type_id: refs.resource_type_id.clone(),
        average_percentage,
    })
}
