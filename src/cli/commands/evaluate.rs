//! Evaluate command - run the full agreement pipeline

use std::fs;

use clap::Parser;

use super::super::output::{color, log_info, metric_colored, write_output};
use super::super::parser::InputArgs;
use super::{build_index, resolve_files};

use crate::agreement::natural_cmp;
use crate::chart::ChartSet;
use crate::matching::match_predictions;
use crate::predictions::PredictionSet;
use crate::report::AgreementReport;

/// Run the full evaluation pipeline and print the report
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also render and write the chart artifact
    #[arg(long)]
    pub charts: bool,

    /// Use fuzzy counts as the chart value source
    #[arg(long, requires = "charts")]
    pub fuzzy_charts: bool,

    /// Emit the report as pretty-printed JSON
    #[arg(long)]
    pub json: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Minimal output (suppress non-essential messages)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: EvaluateArgs) -> Result<(), String> {
    let files = resolve_files(&args.input)?;

    let index = build_index(&files.survey_csv, &args.input)?;
    log_info(
        &format!(
            "indexed {} respondents over {} questions",
            index.respondent_count(),
            index.question_count()
        ),
        args.quiet,
    );

    let predictions = PredictionSet::load(&files.predictions).map_err(|e| e.to_string())?;
    let counts = match_predictions(&predictions, &index);
    let report = AgreementReport::new(index.respondent_count(), counts);

    if args.charts {
        let template = fs::read_to_string(&files.chart_template).map_err(|e| {
            format!(
                "failed to read chart template {}: {}",
                files.chart_template.display(),
                e
            )
        })?;
        let source = if args.fuzzy_charts {
            &report.counts.fuzzy
        } else {
            &report.counts.exact
        };
        let chart_set = ChartSet::render(&template, source);
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
    }

    if args.json {
        let json = report.to_json().map_err(|e| e.to_string())?;
        write_output(&json, args.output.as_deref())?;
    } else if let Some(path) = &args.output {
        write_output(&report.summary(), Some(path))?;
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Terminal rendering: colored banner and metrics, then per-line detail.
fn print_report(report: &AgreementReport) {
    println!();
    println!(
        "{}",
        color("1;36", "=======================================================")
    );
    println!(
        "  {}  respondents={}  questions={}",
        color("1;36", "SURVEY AGREEMENT"),
        report.respondents,
        report.counts.exact.len()
    );
    println!(
        "{}",
        color("1;36", "=======================================================")
    );
    println!();
    println!(
        "  Exact agreement:  overall {}%  excluding first {}%",
        metric_colored(report.exact.overall * 100.0),
        metric_colored(report.exact.excluding_first * 100.0)
    );
    println!(
        "  Fuzzy agreement:  overall {}%  excluding first {}%",
        metric_colored(report.fuzzy.overall * 100.0),
        metric_colored(report.fuzzy.excluding_first * 100.0)
    );
    println!();

    for (question, lines) in &report.counts.exact {
        println!("  {}:", color("1;33", question));
        let mut ordered: Vec<(&str, usize)> = lines
            .iter()
            .map(|(line, &count)| (line.as_str(), count))
            .collect();
        ordered.sort_by(|a, b| natural_cmp(a.0, b.0));
        for (line, exact) in ordered {
            let fuzzy = report
                .counts
                .fuzzy
                .get(question)
                .and_then(|per_line| per_line.get(line))
                .copied()
                .unwrap_or(0);
            println!("    line {:>5}  exact {:>3}  fuzzy {:>3}", line, exact, fuzzy);
        }
    }
    println!();
}
