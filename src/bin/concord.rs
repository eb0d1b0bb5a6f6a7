//! concord - survey agreement evaluation CLI
//!
//! Measures how often survey respondents agreed with algorithmically
//! predicted comment-requirement locations, and renders chart-ready
//! artifacts from the match counts.
//!
//! # Usage
//!
//! ```bash
//! # Full pipeline with the filenames config in the working directory
//! concord evaluate
//!
//! # Experienced respondents only, with the chart artifact
//! concord evaluate --experienced-only --charts
//!
//! # Machine-readable report
//! concord evaluate --json --output report.json
//!
//! # Charts from fuzzy counts
//! concord charts --fuzzy
//!
//! # Inspect what respondents selected for one question
//! concord answers --question q3
//! ```

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use concord::cli::commands;
use concord::cli::output::color;
use concord::cli::parser::{Cli, Commands};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result: Result<(), String> = match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run(args),
        Commands::Charts(args) => commands::charts::run(args),
        Commands::Answers(args) => commands::answers::run(args),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "concord", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
