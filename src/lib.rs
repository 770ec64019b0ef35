// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::catalog::CriteriaCatalog;
pub use crate::core::errors::ScoreError;
pub use crate::core::score_types::{RawScore, ScorePercentage};
pub use crate::core::{
    AssessmentReport, AssessmentScope, AssessmentScore, EvaluationCriterion,
    ResourceConfiguration, ResourceFlag, ResourceRecord, ScoreResult,
};

pub use crate::scoring::aggregation::{aggregate, assessment_score, AssessmentRefs};
pub use crate::scoring::{
    default_rules, score_batch, FlagRule, ScoringEngine, TriggerWhen, DEFAULT_MAX_SCORE,
};

pub use crate::config::{
    default_criteria, load_config, load_config_from, parse_config, MaxScorePolicy, RiskmapConfig,
};

pub use crate::io::input::{filter_scope, load_resources};
pub use crate::io::output::{create_sink, OutputFormat, ResultSink};
