pub mod errors;
pub mod score_types;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::score_types::{RawScore, ScorePercentage};

/// One named, weighted evaluation dimension contributing to the risk
/// score. The name is the lookup key used by the scoring engine;
/// priorities are configuration, immutable during scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationCriterion {
    /// Stable identifier; derived from the name when not supplied.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub priority: i64,
}

impl EvaluationCriterion {
    pub fn new(name: impl Into<String>, priority: i64) -> Self {
        let name = name.into();
        Self {
            id: default_id(&name),
            name,
            priority,
        }
    }
}

/// Slugify a criterion name into an identifier.
pub(crate) fn default_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() && !id.ends_with('-') && !id.is_empty() {
            id.push('-');
        }
    }
    id.trim_end_matches('-').to_string()
}

/// Boolean configuration attributes a rule can inspect on a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceFlag {
    SingleInstance,
    AvailabilitySet,
    ScaleSet,
    AvailabilityZone,
    StandardHddDisk,
    StandardSsdDisk,
    PremiumSsdDisk,
    UltraDisk,
    StandardStorageAccount,
    PremiumStorageAccount,
    Backup,
    DedicatedHostGroup,
}

impl ResourceFlag {
    pub const ALL: [ResourceFlag; 12] = [
        ResourceFlag::SingleInstance,
        ResourceFlag::AvailabilitySet,
        ResourceFlag::ScaleSet,
        ResourceFlag::AvailabilityZone,
        ResourceFlag::StandardHddDisk,
        ResourceFlag::StandardSsdDisk,
        ResourceFlag::PremiumSsdDisk,
        ResourceFlag::UltraDisk,
        ResourceFlag::StandardStorageAccount,
        ResourceFlag::PremiumStorageAccount,
        ResourceFlag::Backup,
        ResourceFlag::DedicatedHostGroup,
    ];
}

/// One VM's configuration as loaded for scoring. Immutable once scored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfiguration {
    pub resource_id: String,
    #[serde(default)]
    pub subscription_id: String,
    #[serde(default)]
    pub role_instance_name: String,
    #[serde(default)]
    pub single_instance: bool,
    #[serde(default)]
    pub availability_set: bool,
    #[serde(default)]
    pub scale_set: bool,
    #[serde(default)]
    pub availability_zone: bool,
    #[serde(default)]
    pub standard_hdd_disk: bool,
    #[serde(default)]
    pub standard_ssd_disk: bool,
    #[serde(default)]
    pub premium_ssd_disk: bool,
    #[serde(default)]
    pub ultra_disk: bool,
    #[serde(default)]
    pub standard_storage_account: bool,
    #[serde(default)]
    pub premium_storage_account: bool,
    #[serde(default)]
    pub backup: bool,
    #[serde(default)]
    pub dedicated_host_group: bool,
}

impl ResourceConfiguration {
    /// Read one flag by name.
    pub fn flag(&self, flag: ResourceFlag) -> bool {
        match flag {
            ResourceFlag::SingleInstance => self.single_instance,
            ResourceFlag::AvailabilitySet => self.availability_set,
            ResourceFlag::ScaleSet => self.scale_set,
            ResourceFlag::AvailabilityZone => self.availability_zone,
            ResourceFlag::StandardHddDisk => self.standard_hdd_disk,
            ResourceFlag::StandardSsdDisk => self.standard_ssd_disk,
            ResourceFlag::PremiumSsdDisk => self.premium_ssd_disk,
            ResourceFlag::UltraDisk => self.ultra_disk,
            ResourceFlag::StandardStorageAccount => self.standard_storage_account,
            ResourceFlag::PremiumStorageAccount => self.premium_storage_account,
            ResourceFlag::Backup => self.backup,
            ResourceFlag::DedicatedHostGroup => self.dedicated_host_group,
        }
    }
}

/// A resource row tagged with the invocation scope it belongs to.
///
/// Untagged records (no scope fields) match any requested scope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type_id: Option<String>,
    #[serde(flatten)]
    pub resource: ResourceConfiguration,
}

/// The (assessment, workflow, service) triple one invocation is scoped to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentScope {
    pub assessment_id: String,
    pub workflow_id: String,
    pub service_type_id: String,
}

/// Derived score for one resource. Keyed 1:1 to the configuration it
/// was computed from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub resource_id: String,
    pub raw_score: RawScore,
    pub score_percentage: ScorePercentage,
    /// Criterion names a triggered rule referenced but the catalog did
    /// not contain. Contributed zero; the caller decides how loudly to
    /// report them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmapped_criteria: Vec<String>,
}

/// Aggregate score for one (assessment, workflow, service) invocation.
/// Created only after every resource has been scored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentScore {
    pub assessment_id: String,
    pub area_id: String,
    pub service_type_id: String,
    pub resource_type_id: String,
    pub average_percentage: ScorePercentage,
}

/// Everything one invocation produces, handed to a result sink as a
/// unit so that persistence is all-or-nothing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub generated: DateTime<Utc>,
    pub scope: AssessmentScope,
    pub assessment: AssessmentScore,
    pub resources: Vector<ScoreResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_id_slugifies_names() {
        assert_eq!(default_id("Single Instance"), "single-instance");
        assert_eq!(
            default_id("Standard Managed Disk (HDD)"),
            "standard-managed-disk-hdd"
        );
        assert_eq!(default_id("Ultra Disk (SSD)"), "ultra-disk-ssd");
    }

    #[test]
    fn flag_accessor_covers_every_flag() {
        let mut resource = ResourceConfiguration::default();
        for flag in ResourceFlag::ALL {
            assert!(!resource.flag(flag));
        }

        resource.single_instance = true;
        resource.dedicated_host_group = true;
        assert!(resource.flag(ResourceFlag::SingleInstance));
        assert!(resource.flag(ResourceFlag::DedicatedHostGroup));
        assert!(!resource.flag(ResourceFlag::Backup));
    }

    #[test]
    fn resource_record_deserializes_flattened() {
        let record: ResourceRecord = serde_json::from_str(
            r#"{
                "assessment_id": "a-1",
                "resource_id": "vm-7",
                "single_instance": true,
                "backup": true
            }"#,
        )
        .unwrap();

        assert_eq!(record.assessment_id.as_deref(), Some("a-1"));
        assert_eq!(record.workflow_id, None);
        assert_eq!(record.resource.resource_id, "vm-7");
        assert!(record.resource.single_instance);
        assert!(record.resource.backup);
        assert!(!record.resource.availability_set);
    }
}
