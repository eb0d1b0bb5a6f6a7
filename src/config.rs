//! Run configuration: survey column layout, respondent filtering options,
//! and the filenames config that names the four run artifacts.
//!
//! The survey export is a fixed-shape CSV; which columns hold answers is
//! declared here as an explicit ordered table ([`QuestionLayout`]) rather
//! than discovered at runtime. The default layout mirrors the export this
//! tool was built for: ten free-selection questions (`q1`-`q10`), then ten
//! pre-marked questions each followed by a free-text companion column
//! (`marked1`, `marked1a`, ...).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Survey answer marking a respondent as never having used TypeScript.
pub const NO_TYPESCRIPT_EXPERIENCE: &str = "I have never written or read TypeScript before";

/// Survey answer marking a respondent as never having programmed at all.
pub const NO_PROGRAMMING_EXPERIENCE: &str = "I have never written a software program before";

/// Column holding the general programming experience answer.
pub const EXPERIENCE_PROGRAMMING_COLUMN: usize = 3;

/// Column holding the TypeScript experience answer.
pub const EXPERIENCE_TYPESCRIPT_COLUMN: usize = 4;

// ============================================================================
// Question layout
// ============================================================================

/// Ordered list of (question id, survey column) pairs.
///
/// Declares which columns of the export carry answers and the identifier
/// each column is indexed under. Order matters: respondent rows carry
/// their raw answers in layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionLayout {
    entries: Vec<(String, usize)>,
}

impl QuestionLayout {
    /// The layout of the comment-requirement survey export: `q1`-`q10` at
    /// columns 7-16, then `marked1`/`marked1a` through `marked10`/`marked10a`
    /// at columns 17-36.
    #[must_use]
    pub fn survey_default() -> QuestionLayout {
        let mut entries = Vec::with_capacity(30);
        for (offset, n) in (1..=10).enumerate() {
            entries.push((format!("q{}", n), 7 + offset));
        }
        let mut column = 17;
        for n in 1..=10 {
            entries.push((format!("marked{}", n), column));
            entries.push((format!("marked{}a", n), column + 1));
            column += 2;
        }
        QuestionLayout { entries }
    }

    /// Build a layout from explicit (question id, column) pairs.
    pub fn from_entries<I, S>(entries: I) -> QuestionLayout
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        QuestionLayout {
            entries: entries.into_iter().map(|(q, c)| (q.into(), c)).collect(),
        }
    }

    /// The (question id, column) pairs in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Number of tracked questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the layout tracks no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest column index any entry reads from.
    #[must_use]
    pub fn max_column(&self) -> usize {
        self.entries.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}

impl Default for QuestionLayout {
    fn default() -> Self {
        QuestionLayout::survey_default()
    }
}

// ============================================================================
// Evaluation options
// ============================================================================

/// Toggles applied while building the answer index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalOptions {
    /// Drop respondents who reported never having written TypeScript or
    /// never having programmed at all. Off by default: every respondent
    /// contributes.
    pub only_experienced_respondents: bool,
}

// ============================================================================
// Filenames config
// ============================================================================

/// The four paths one evaluation run works with.
///
/// Conventionally loaded from a filenames config: a plain text file with
/// one path per line, in order survey CSV, predictions JSON, chart
/// template, chart output. Blank lines are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    /// Semicolon-delimited survey export.
    pub survey_csv: PathBuf,
    /// JSON object mapping question ids to predicted line arrays.
    pub predictions: PathBuf,
    /// Chart template text with `PLACEHOLDER_*` markers.
    pub chart_template: PathBuf,
    /// Destination for the rendered chart artifact.
    pub chart_output: PathBuf,
}

/// Per-path overrides applied on top of a filenames config.
#[derive(Debug, Clone, Default)]
pub struct FileOverrides {
    /// Replacement for [`FileSet::survey_csv`].
    pub survey_csv: Option<PathBuf>,
    /// Replacement for [`FileSet::predictions`].
    pub predictions: Option<PathBuf>,
    /// Replacement for [`FileSet::chart_template`].
    pub chart_template: Option<PathBuf>,
    /// Replacement for [`FileSet::chart_output`].
    pub chart_output: Option<PathBuf>,
}

impl FileSet {
    /// Load the four run paths from a filenames config.
    ///
    /// Lines are trimmed; blank lines are skipped; the first four usable
    /// lines are taken in order. Fewer than four is a configuration error.
    pub fn load(path: impl AsRef<Path>) -> Result<FileSet> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {}", path.display(), e)))?;

        let lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(4)
            .collect();
        if lines.len() < 4 {
            return Err(Error::config(format!(
                "{}: expected 4 paths (survey CSV, predictions JSON, chart template, chart output), found {}",
                path.display(),
                lines.len()
            )));
        }

        Ok(FileSet {
            survey_csv: PathBuf::from(lines[0]),
            predictions: PathBuf::from(lines[1]),
            chart_template: PathBuf::from(lines[2]),
            chart_output: PathBuf::from(lines[3]),
        })
    }

    /// Resolve the run paths from a filenames config plus overrides.
    ///
    /// The config file is only read when some path is not overridden, so a
    /// fully flag-driven invocation needs no config file at all.
    pub fn resolve(filenames: impl AsRef<Path>, overrides: FileOverrides) -> Result<FileSet> {
        let FileOverrides {
            survey_csv,
            predictions,
            chart_template,
            chart_output,
        } = overrides;

        match (survey_csv, predictions, chart_template, chart_output) {
            (Some(survey_csv), Some(predictions), Some(chart_template), Some(chart_output)) => {
                Ok(FileSet {
                    survey_csv,
                    predictions,
                    chart_template,
                    chart_output,
                })
            }
            (survey_csv, predictions, chart_template, chart_output) => {
                let base = FileSet::load(filenames)?;
                Ok(FileSet {
                    survey_csv: survey_csv.unwrap_or(base.survey_csv),
                    predictions: predictions.unwrap_or(base.predictions),
                    chart_template: chart_template.unwrap_or(base.chart_template),
                    chart_output: chart_output.unwrap_or(base.chart_output),
                })
            }
        }
    }
}
