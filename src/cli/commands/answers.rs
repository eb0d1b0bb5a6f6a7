//! Answers command - inspect the answer index

use std::collections::BTreeMap;

use clap::Parser;

use super::super::output::write_output;
use super::super::parser::InputArgs;
use super::{build_index, resolve_survey};

use crate::agreement::natural_sorted;
use crate::index::AnswerIndex;

/// Inspect the answer index built from the survey export
#[derive(Parser, Debug)]
pub struct AnswersArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Restrict output to one question id
    #[arg(short, long, value_name = "ID")]
    pub question: Option<String>,

    /// Emit JSON instead of the text listing
    #[arg(long)]
    pub json: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

pub fn run(args: AnswersArgs) -> Result<(), String> {
    let survey = resolve_survey(&args.input)?;
    let index = build_index(&survey, &args.input)?;

    let questions: Vec<&str> = match &args.question {
        Some(question) => {
            if index.lines_for(question).is_none() {
                return Err(format!(
                    "question {} not found; known questions: {}",
                    question,
                    index.questions().collect::<Vec<_>>().join(", ")
                ));
            }
            vec![question.as_str()]
        }
        None => index.questions().collect(),
    };

    let rendered = if args.json {
        render_json(&index, &questions)?
    } else {
        render_text(&index, &questions)
    };
    write_output(&rendered, args.output.as_deref())
}

fn render_text(index: &AnswerIndex, questions: &[&str]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Respondents: {}\n\n", index.respondent_count()));
    for question in questions {
        let Some(lines) = index.lines_for(question) else {
            continue;
        };
        out.push_str(&format!("{} ({} lines):\n", question, lines.len()));
        for line in natural_sorted(lines.keys()) {
            let count = lines.get(line).map_or(0, Vec::len);
            let shown = if line.is_empty() { "(none)" } else { line };
            out.push_str(&format!("  {:>8}  {:>3}\n", shown, count));
        }
        out.push('\n');
    }
    out
}

fn render_json(index: &AnswerIndex, questions: &[&str]) -> Result<String, String> {
    let mut per_question: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
    for question in questions {
        let Some(lines) = index.lines_for(question) else {
            continue;
        };
        let counts = lines
            .iter()
            .map(|(line, respondents)| (line.as_str(), respondents.len()))
            .collect();
        per_question.insert(question, counts);
    }

    let value = serde_json::json!({
        "respondents": index.respondent_count(),
        "questions": per_question,
    });
    serde_json::to_string_pretty(&value).map_err(|e| format!("JSON rendering failed: {}", e))
}
