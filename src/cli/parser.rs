//! CLI argument parsing and structure definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use super::commands::{AnswersArgs, ChartsArgs, EvaluateArgs};
use crate::config::FileOverrides;

/// Survey agreement evaluation for predicted comment locations
#[derive(Parser, Debug)]
#[command(name = "concord")]
#[command(
    author,
    version,
    about = "Survey agreement evaluation for predicted comment locations",
    long_about = r#"
concord - measure how often survey respondents agree with
algorithmically predicted comment-requirement locations

PIPELINE:
  survey CSV  -> answer index (question -> line -> respondents)
  predictions -> exact + fuzzy match counts per predicted line
  counts      -> agreement ratios (overall, excluding first line)
  counts      -> chart artifact rendered from a text template

INPUTS:
  A filenames config (default: filenames.txt) lists four paths, one
  per line: survey CSV, predictions JSON, chart template, chart
  output. Each can be overridden with a flag.

EXAMPLES:
  concord evaluate
  concord evaluate --experienced-only --charts
  concord evaluate --json --output report.json
  concord charts --fuzzy
  concord answers --question q3
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full evaluation pipeline and print the report
    #[command(visible_alias = "eval")]
    Evaluate(EvaluateArgs),

    /// Render the chart artifact from match counts
    Charts(ChartsArgs),

    /// Inspect the answer index built from the survey export
    Answers(AnswersArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Input-resolution flags shared by the data-reading commands.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Filenames config: survey CSV, predictions JSON, chart template,
    /// chart output, one path per line
    #[arg(long, value_name = "PATH", default_value = "filenames.txt")]
    pub filenames: PathBuf,

    /// Survey CSV export (overrides the filenames config)
    #[arg(long, value_name = "PATH")]
    pub survey: Option<PathBuf>,

    /// Predictions JSON (overrides the filenames config)
    #[arg(long, value_name = "PATH")]
    pub predictions: Option<PathBuf>,

    /// Chart template (overrides the filenames config)
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Chart artifact destination (overrides the filenames config)
    #[arg(long, value_name = "PATH")]
    pub chart_output: Option<PathBuf>,

    /// Drop respondents who reported no TypeScript or programming
    /// experience
    #[arg(long)]
    pub experienced_only: bool,
}

impl InputArgs {
    /// The per-path overrides these flags carry.
    #[must_use]
    pub fn overrides(&self) -> FileOverrides {
        FileOverrides {
            survey_csv: self.survey.clone(),
            predictions: self.predictions.clone(),
            chart_template: self.template.clone(),
            chart_output: self.chart_output.clone(),
        }
    }
}
