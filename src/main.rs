use anyhow::Result;
use clap::Parser;
use riskmap::cli::{Cli, Commands};
use riskmap::commands;
use riskmap::core::AssessmentScope;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Score {
            resources,
            config,
            assessment_id,
            workflow_id,
            service_id,
            format,
            output,
            no_parallel,
        } => {
            let score_config = commands::score::ScoreConfig {
                resources,
                config,
                scope: AssessmentScope {
                    assessment_id,
                    workflow_id,
                    service_type_id: service_id,
                },
                format: format.into(),
                output,
                parallel: !no_parallel,
            };
            commands::score::handle_score(score_config)
        }
        Commands::Init { force } => commands::init::init_config(force),
    }
}
