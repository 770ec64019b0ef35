use indoc::indoc;
use riskmap::{
    assessment_score, filter_scope, load_resources, parse_config, score_batch, AssessmentScope,
    ScoringEngine,
};
use std::fs;
use tempfile::TempDir;

const RECORDS: &str = r#"[
    {
        "assessment_id": "a-1",
        "workflow_id": "w-1",
        "service_type_id": "compute",
        "resource_id": "vm-1",
        "subscription_id": "sub-1",
        "role_instance_name": "web-0",
        "single_instance": false,
        "availability_set": true
    },
    {
        "assessment_id": "a-1",
        "workflow_id": "w-1",
        "service_type_id": "compute",
        "resource_id": "vm-2",
        "single_instance": true
    },
    {
        "assessment_id": "a-1",
        "workflow_id": "w-1",
        "service_type_id": "compute",
        "resource_id": "vm-3",
        "single_instance": true,
        "scale_set": true,
        "backup": true
    },
    {
        "assessment_id": "a-2",
        "workflow_id": "w-9",
        "service_type_id": "compute",
        "resource_id": "vm-other",
        "single_instance": false
    }
]"#;

const CONFIG: &str = indoc! {r#"
    max_score = 24.0

    [[criteria]]
    name = "Single Instance"
    priority = 4

    [[criteria]]
    name = "Availability Set"
    priority = 4

    [[criteria]]
    name = "Virtual Machine Scale Set"
    priority = 4

    [[criteria]]
    name = "Availability Zones"
    priority = 4

    [[criteria]]
    name = "Azure Backup"
    priority = 2
"#};

fn scope() -> AssessmentScope {
    AssessmentScope {
        assessment_id: "a-1".to_string(),
        workflow_id: "w-1".to_string(),
        service_type_id: "compute".to_string(),
    }
}

#[test]
fn scores_a_mixed_fleet_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let records_path = temp_dir.path().join("resources.json");
    fs::write(&records_path, RECORDS).unwrap();

    let config = parse_config(CONFIG).unwrap();
    let catalog = config.catalog();
    let max_score = config.max_score.resolve(&catalog).unwrap();
    let engine = ScoringEngine::new(config.rules.clone(), max_score);

    let records = load_resources(&records_path).unwrap();
    assert_eq!(records.len(), 4);

    let resources = filter_scope(records, &scope());
    let ids: Vec<_> = resources.iter().map(|r| r.resource_id.as_str()).collect();
    assert_eq!(ids, vec!["vm-1", "vm-2", "vm-3"]);

    let results = score_batch(&engine, &catalog, &resources, true).unwrap();

    // vm-1: single-instance penalty + availability set = 8 -> 2/3
    assert_eq!(results[0].raw_score.value(), 8.0);
    assert!((results[0].score_percentage.value() - 2.0 / 3.0).abs() < 1e-9);
    // vm-2: clean
    assert_eq!(results[1].score_percentage.value(), 1.0);
    // vm-3: scale set (4) + backup (2) = 6 -> 0.75
    assert_eq!(results[2].raw_score.value(), 6.0);
    assert!((results[2].score_percentage.value() - 0.75).abs() < 1e-9);

    let assessment = assessment_score(&scope(), &config.assessment, &results).unwrap();
    let expected = (2.0 / 3.0 + 1.0 + 0.75) / 3.0;
    assert!((assessment.average_percentage.value() - expected).abs() < 1e-9);
    assert_eq!(assessment.assessment_id, "a-1");
}

#[test]
fn catalog_sum_ceiling_changes_the_normalization() {
    let config = parse_config(&CONFIG.replace("24.0", "\"catalog-sum\"")).unwrap();
    let catalog = config.catalog();
    // 4 + 4 + 4 + 4 + 2
    let max_score = config.max_score.resolve(&catalog).unwrap();
    assert_eq!(max_score, 18.0);

    let engine = ScoringEngine::new(config.rules.clone(), max_score);
    let resources = filter_scope(
        serde_json::from_str(RECORDS).unwrap(),
        &scope(),
    );

    let results = score_batch(&engine, &catalog, &resources, false).unwrap();
    assert!((results[0].score_percentage.value() - (1.0 - 8.0 / 18.0)).abs() < 1e-9);
}

#[test]
fn a_scope_with_no_resources_aggregates_to_an_error() {
    let config = parse_config(CONFIG).unwrap();
    let other_scope = AssessmentScope {
        assessment_id: "a-404".to_string(),
        workflow_id: "w-1".to_string(),
        service_type_id: "compute".to_string(),
    };

    let resources = filter_scope(serde_json::from_str(RECORDS).unwrap(), &other_scope);
    assert!(resources.is_empty());

    let err = assessment_score(&other_scope, &config.assessment, &[]).unwrap_err();
    assert_eq!(err, riskmap::ScoreError::EmptyInput);
}
