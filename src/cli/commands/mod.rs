//! Command implementations for the concord CLI
//!
//! Each command has its own module/file for better organization.

pub mod answers;
pub mod charts;
pub mod evaluate;

// Re-export argument types for parser
pub use answers::AnswersArgs;
pub use charts::ChartsArgs;
pub use evaluate::EvaluateArgs;

use std::path::PathBuf;

use super::parser::InputArgs;
use crate::config::{EvalOptions, FileSet, QuestionLayout};
use crate::index::AnswerIndex;

/// Resolve the four run paths from the shared input flags.
pub(crate) fn resolve_files(input: &InputArgs) -> Result<FileSet, String> {
    FileSet::resolve(&input.filenames, input.overrides()).map_err(|e| e.to_string())
}

/// Resolve just the survey path; the filenames config is only consulted
/// when no `--survey` override is present.
pub(crate) fn resolve_survey(input: &InputArgs) -> Result<PathBuf, String> {
    match &input.survey {
        Some(path) => Ok(path.clone()),
        None => FileSet::load(&input.filenames)
            .map(|files| files.survey_csv)
            .map_err(|e| e.to_string()),
    }
}

/// Read the survey and build the answer index with the flagged options.
pub(crate) fn build_index(survey: &PathBuf, input: &InputArgs) -> Result<AnswerIndex, String> {
    let layout = QuestionLayout::survey_default();
    let rows = crate::survey::read_survey(survey, &layout).map_err(|e| e.to_string())?;
    let options = EvalOptions {
        only_experienced_respondents: input.experienced_only,
    };
    Ok(AnswerIndex::build(&layout, &rows, &options))
}
