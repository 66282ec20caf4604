use anyhow::Result;
use aquameter::cli::{Cli, Commands};
use aquameter::commands::{self, EvaluateConfig, SurveyConfig};
use clap::Parser;

// Main orchestrator function
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            ph,
            dissolved_oxygen,
            bod,
            cod,
            coliform,
            tds,
            format,
            output,
            verbosity,
        } => commands::handle_evaluate(EvaluateConfig {
            ph,
            dissolved_oxygen,
            bod,
            cod,
            coliform,
            tds,
            format: format.map(Into::into),
            output,
            verbosity,
        }),
        Commands::Survey {
            dataset,
            format,
            output,
        } => commands::handle_survey(SurveyConfig {
            dataset,
            format: format.map(Into::into),
            output,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
