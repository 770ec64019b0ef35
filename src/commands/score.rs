//! The score command: load, score, aggregate, persist.
//!
//! Errors anywhere in the pipeline abort before the sink is touched,
//! so an invocation either persists a complete report or nothing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use im::Vector;

use crate::config;
use crate::core::{AssessmentReport, AssessmentScope};
use crate::io::input;
use crate::io::output::{create_sink, OutputFormat};
use crate::scoring::aggregation::assessment_score;
use crate::scoring::{score_batch, ScoringEngine};

/// Everything the score command needs, resolved from the CLI.
pub struct ScoreConfig {
    pub resources: PathBuf,
    pub config: Option<PathBuf>,
    pub scope: AssessmentScope,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub parallel: bool,
}

pub fn handle_score(cfg: ScoreConfig) -> Result<()> {
    let config = match &cfg.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };

    let catalog = config.catalog();
    let max_score = config.max_score.resolve(&catalog)?;
    let engine = ScoringEngine::new(config.rules.clone(), max_score);

    let records = input::load_resources(&cfg.resources)?;
    let resources = input::filter_scope(records, &cfg.scope);
    log::info!(
        "scoring {} resources for assessment {}",
        resources.len(),
        cfg.scope.assessment_id
    );

    let results = score_batch(&engine, &catalog, &resources, cfg.parallel)?;
    for result in &results {
        for criterion in &result.unmapped_criteria {
            log::warn!(
                "criterion {criterion:?} is not in the catalog; contributed zero for {}",
                result.resource_id
            );
        }
    }

    let assessment = assessment_score(&cfg.scope, &config.assessment, &results)?;
    log::info!("assessment average: {}", assessment.average_percentage);

    let report = AssessmentReport {
        generated: chrono::Utc::now(),
        scope: cfg.scope,
        assessment,
        resources: results.into_iter().collect::<Vector<_>>(),
    };

    let mut sink = create_sink(cfg.format, cfg.output.as_deref())?;
    sink.write_report(&report)
        .context("failed to write assessment report")?;
    Ok(())
}
