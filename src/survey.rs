//! Survey export ingestion.
//!
//! The export is one row per respondent, semicolon-delimited, double-quote
//! quoted, with a single header row. Rows are validated for width against
//! the question layout and materialized as [`Respondent`] values; answer
//! tokenization happens later, in the answer index.

use std::path::Path;

use crate::config::{
    QuestionLayout, EXPERIENCE_PROGRAMMING_COLUMN, EXPERIENCE_TYPESCRIPT_COLUMN,
    NO_PROGRAMMING_EXPERIENCE, NO_TYPESCRIPT_EXPERIENCE,
};
use crate::error::{Error, Result};

/// One survey participant's row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Respondent {
    /// Self-reported general programming experience.
    pub experience_programming: String,
    /// Self-reported TypeScript experience.
    pub experience_typescript: String,
    /// Raw selection text per tracked question, in layout order.
    pub answers: Vec<String>,
}

impl Respondent {
    /// True when the respondent reported never having used TypeScript or
    /// never having written a program at all.
    #[must_use]
    pub fn is_inexperienced(&self) -> bool {
        self.experience_typescript == NO_TYPESCRIPT_EXPERIENCE
            || self.experience_programming == NO_PROGRAMMING_EXPERIENCE
    }
}

/// Read every respondent row from a survey export.
///
/// The header row is skipped. A data row narrower than the layout requires
/// is a fatal validation error naming the 1-based row number.
pub fn read_survey(path: impl AsRef<Path>, layout: &QuestionLayout) -> Result<Vec<Respondent>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .quote(b'"')
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::survey(format!("failed to open {}: {}", path.display(), e)))?;

    // Width must cover the experience columns and every layout column.
    let min_width = layout
        .max_column()
        .max(EXPERIENCE_PROGRAMMING_COLUMN)
        .max(EXPERIENCE_TYPESCRIPT_COLUMN)
        + 1;

    let mut respondents = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row_number = i + 1;
        let record = record.map_err(|e| {
            Error::survey(format!("{}: row {}: {}", path.display(), row_number, e))
        })?;

        if record.len() < min_width {
            return Err(Error::survey(format!(
                "{}: row {}: expected at least {} columns, found {}",
                path.display(),
                row_number,
                min_width,
                record.len()
            )));
        }

        let field = |column: usize| record.get(column).unwrap_or_default().to_string();
        respondents.push(Respondent {
            experience_programming: field(EXPERIENCE_PROGRAMMING_COLUMN),
            experience_typescript: field(EXPERIENCE_TYPESCRIPT_COLUMN),
            answers: layout.entries().iter().map(|(_, c)| field(*c)).collect(),
        });
    }

    log::debug!("read {} respondent rows from {}", respondents.len(), path.display());
    Ok(respondents)
}
