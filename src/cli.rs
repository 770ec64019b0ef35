use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::io::output;

#[derive(Parser, Debug)]
#[command(name = "riskmap")]
#[command(about = "Resiliency risk scoring for cloud VM assessments", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score VM resources and aggregate an assessment-level result
    Score {
        /// Path to the resource records file (JSON)
        resources: PathBuf,

        /// Configuration file (defaults to discovering .riskmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Assessment the resources belong to
        #[arg(long = "assessment-id")]
        assessment_id: String,

        /// Workflow execution within the assessment
        #[arg(long = "workflow-id")]
        workflow_id: String,

        /// Service type the resources belong to
        #[arg(long = "service-id")]
        service_id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Score resources sequentially instead of in parallel
        #[arg(long = "no-parallel")]
        no_parallel: bool,
    },
    /// Create a default .riskmap.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json,
            OutputFormat::Markdown => Self::Markdown,
            OutputFormat::Terminal => Self::Terminal,
        }
    }
}
