//! Charts command - render the chart artifact without the report

use std::fs;

use clap::Parser;

use super::super::output::{color, log_info};
use super::super::parser::InputArgs;
use super::{build_index, resolve_files};

use crate::chart::ChartSet;
use crate::matching::match_predictions;
use crate::predictions::PredictionSet;

/// Render the chart artifact from match counts
#[derive(Parser, Debug)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Use fuzzy counts as the value source
    #[arg(long)]
    pub fuzzy: bool,

    /// Minimal output (suppress non-essential messages)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: ChartsArgs) -> Result<(), String> {
    let files = resolve_files(&args.input)?;

    let index = build_index(&files.survey_csv, &args.input)?;
    let predictions = PredictionSet::load(&files.predictions).map_err(|e| e.to_string())?;
    let counts = match_predictions(&predictions, &index);

    let template = fs::read_to_string(&files.chart_template).map_err(|e| {
        format!(
            "failed to read chart template {}: {}",
            files.chart_template.display(),
            e
        )
    })?;
    let source = if args.fuzzy { &counts.fuzzy } else { &counts.exact };
    let chart_set = ChartSet::render(&template, source);
    if chart_set.is_empty() {
        return Err("no charts rendered: no predicted question has survey answers".to_string());
    }

    chart_set
        .write_to(&files.chart_output)
        .map_err(|e| e.to_string())?;
    log_info(
        &format!(
            "{} {} charts written to {}",
            color("32", "ok:"),
            chart_set.len(),
            files.chart_output.display()
        ),
        args.quiet,
    );
    Ok(())
}
