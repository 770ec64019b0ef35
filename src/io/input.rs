//! Resource record loading and scope filtering.
//!
//! Records arrive as a JSON array; each record may carry the scope
//! triple it belongs to, and filtering keeps only the records of the
//! requested invocation.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{AssessmentScope, ResourceConfiguration, ResourceRecord};
use crate::io;

/// Read a JSON array of resource records.
pub fn load_resources(path: &Path) -> Result<Vec<ResourceRecord>> {
    let raw = io::read_file(path)
        .with_context(|| format!("failed to read resource records from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse resource records in {}", path.display()))
}

fn matches(tag: Option<&str>, wanted: &str) -> bool {
    tag.map_or(true, |value| value == wanted)
}

/// Keep the records belonging to the requested scope.
///
/// Untagged records match any scope; tagged records must match exactly.
pub fn filter_scope(
    records: Vec<ResourceRecord>,
    scope: &AssessmentScope,
) -> Vec<ResourceConfiguration> {
    records
        .into_iter()
        .filter(|record| {
            matches(record.assessment_id.as_deref(), &scope.assessment_id)
                && matches(record.workflow_id.as_deref(), &scope.workflow_id)
                && matches(record.service_type_id.as_deref(), &scope.service_type_id)
        })
        .map(|record| record.resource)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> AssessmentScope {
        AssessmentScope {
            assessment_id: "a-1".to_string(),
            workflow_id: "w-1".to_string(),
            service_type_id: "compute".to_string(),
        }
    }

    fn record(assessment_id: Option<&str>, resource_id: &str) -> ResourceRecord {
        ResourceRecord {
            assessment_id: assessment_id.map(str::to_string),
            workflow_id: None,
            service_type_id: None,
            resource: ResourceConfiguration {
                resource_id: resource_id.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn untagged_records_match_any_scope() {
        let kept = filter_scope(vec![record(None, "vm-1")], &scope());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].resource_id, "vm-1");
    }

    #[test]
    fn tagged_records_must_match_exactly() {
        let records = vec![
            record(Some("a-1"), "vm-1"),
            record(Some("a-2"), "vm-2"),
            record(None, "vm-3"),
        ];

        let kept = filter_scope(records, &scope());

        let ids: Vec<_> = kept.iter().map(|r| r.resource_id.as_str()).collect();
        assert_eq!(ids, vec!["vm-1", "vm-3"]);
    }

    #[test]
    fn every_scope_field_is_checked() {
        let mut mismatched = record(Some("a-1"), "vm-1");
        mismatched.workflow_id = Some("other-workflow".to_string());

        let kept = filter_scope(vec![mismatched], &scope());
        assert!(kept.is_empty());
    }
}
