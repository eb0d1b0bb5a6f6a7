//! Answer indexing: group per-question line selections by respondent.
//!
//! Respondent rows are reduced into an immutable index mapping each
//! question to the lines respondents selected for it, and each line to the
//! respondents who selected it. All later stages (matching, averaging,
//! charts) read from this index; nothing writes to it after construction.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{EvalOptions, QuestionLayout};
use crate::survey::Respondent;

/// Identifier assigned to an accepted respondent: 1-based and sequential
/// in acceptance order. Filtered-out respondents never consume one.
pub type RespondentId = u32;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Per-question, per-line respondent sets built from the survey rows.
///
/// Line selections are kept as strings: lookups use exact textual
/// equality, and the empty string is a valid "no comment needed"
/// selection. Each line's respondents are stored in acceptance order
/// without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerIndex {
    answers: BTreeMap<String, BTreeMap<String, Vec<RespondentId>>>,
    respondent_count: usize,
}

impl AnswerIndex {
    /// Build the index from respondent rows.
    ///
    /// When [`EvalOptions::only_experienced_respondents`] is set, rows
    /// whose experience answers match the "never" sentinels are dropped
    /// entirely: they get no id and contribute to no question.
    ///
    /// Per accepted row, each question's raw answer has all whitespace
    /// removed and is split on commas. Every resulting token is one line
    /// selection; an empty raw answer yields the single empty-string
    /// selection. A token repeated within one row counts once.
    #[must_use]
    pub fn build(layout: &QuestionLayout, rows: &[Respondent], options: &EvalOptions) -> AnswerIndex {
        let mut answers: BTreeMap<String, BTreeMap<String, Vec<RespondentId>>> = BTreeMap::new();
        let mut accepted = 0usize;

        for row in rows {
            if options.only_experienced_respondents && row.is_inexperienced() {
                continue;
            }
            accepted += 1;
            let id = accepted as RespondentId;

            for ((question, _), raw) in layout.entries().iter().zip(&row.answers) {
                let stripped = WHITESPACE.replace_all(raw, "");
                for token in stripped.split(',') {
                    let respondents = answers
                        .entry(question.clone())
                        .or_default()
                        .entry(token.to_string())
                        .or_default();
                    // Ids ascend, so a repeated token within one row can
                    // only collide with the list tail.
                    if respondents.last() != Some(&id) {
                        respondents.push(id);
                    }
                }
            }
        }

        log::debug!(
            "indexed {} respondents over {} questions",
            accepted,
            answers.len()
        );
        AnswerIndex {
            answers,
            respondent_count: accepted,
        }
    }

    /// Assemble an index from pre-grouped data.
    ///
    /// Useful when answers come from somewhere other than a survey export;
    /// `respondent_count` is the agreement denominator.
    #[must_use]
    pub fn from_parts(
        answers: BTreeMap<String, BTreeMap<String, Vec<RespondentId>>>,
        respondent_count: usize,
    ) -> AnswerIndex {
        AnswerIndex {
            answers,
            respondent_count,
        }
    }

    /// Number of respondents accepted into the index.
    #[must_use]
    pub fn respondent_count(&self) -> usize {
        self.respondent_count
    }

    /// Number of questions with at least one recorded selection.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    /// True when no question has any recorded selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Question ids present in the index, in sorted order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.answers.keys().map(String::as_str)
    }

    /// Per-line respondent lists for one question.
    #[must_use]
    pub fn lines_for(&self, question: &str) -> Option<&BTreeMap<String, Vec<RespondentId>>> {
        self.answers.get(question)
    }

    /// Respondents who selected `line` for `question`, in acceptance order.
    #[must_use]
    pub fn respondents_for(&self, question: &str, line: &str) -> Option<&[RespondentId]> {
        self.answers
            .get(question)
            .and_then(|lines| lines.get(line))
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NO_PROGRAMMING_EXPERIENCE, NO_TYPESCRIPT_EXPERIENCE};

    fn row(answers: &[&str]) -> Respondent {
        Respondent {
            experience_programming: "5+ years".to_string(),
            experience_typescript: "2 years".to_string(),
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn layout() -> QuestionLayout {
        QuestionLayout::from_entries([("q1", 7), ("q2", 8)])
    }

    #[test]
    fn whitespace_is_stripped_before_tokenizing() {
        let rows = vec![row(&[" 3 ,\t5", "12"])];
        let index = AnswerIndex::build(&layout(), &rows, &EvalOptions::default());

        assert_eq!(index.respondents_for("q1", "3"), Some(&[1u32][..]));
        assert_eq!(index.respondents_for("q1", "5"), Some(&[1u32][..]));
        assert_eq!(index.respondents_for("q2", "12"), Some(&[1u32][..]));
        assert_eq!(index.respondents_for("q1", "35"), None);
    }

    #[test]
    fn empty_answer_is_a_valid_selection() {
        let rows = vec![row(&["", "7"])];
        let index = AnswerIndex::build(&layout(), &rows, &EvalOptions::default());

        assert_eq!(index.respondents_for("q1", ""), Some(&[1u32][..]));
    }

    #[test]
    fn duplicate_token_in_one_row_counts_once() {
        let rows = vec![row(&["5, 5,5", ""])];
        let index = AnswerIndex::build(&layout(), &rows, &EvalOptions::default());

        assert_eq!(index.respondents_for("q1", "5"), Some(&[1u32][..]));
    }

    #[test]
    fn filtered_rows_consume_no_id() {
        let mut novice = row(&["1", "1"]);
        novice.experience_typescript = NO_TYPESCRIPT_EXPERIENCE.to_string();
        let mut beginner = row(&["1", "1"]);
        beginner.experience_programming = NO_PROGRAMMING_EXPERIENCE.to_string();
        let rows = vec![row(&["1", "2"]), novice, beginner, row(&["1", "2"])];

        let options = EvalOptions {
            only_experienced_respondents: true,
        };
        let index = AnswerIndex::build(&layout(), &rows, &options);

        assert_eq!(index.respondent_count(), 2);
        assert_eq!(index.respondents_for("q1", "1"), Some(&[1u32, 2][..]));
    }

    #[test]
    fn filter_is_off_by_default() {
        let mut novice = row(&["1", "1"]);
        novice.experience_typescript = NO_TYPESCRIPT_EXPERIENCE.to_string();
        let rows = vec![novice];

        let index = AnswerIndex::build(&layout(), &rows, &EvalOptions::default());
        assert_eq!(index.respondent_count(), 1);
    }

    #[test]
    fn ids_are_sequential_across_rows() {
        let rows = vec![row(&["4", ""]), row(&["4,6", ""]), row(&["6", ""])];
        let index = AnswerIndex::build(&layout(), &rows, &EvalOptions::default());

        assert_eq!(index.respondent_count(), 3);
        assert_eq!(index.respondents_for("q1", "4"), Some(&[1u32, 2][..]));
        assert_eq!(index.respondents_for("q1", "6"), Some(&[2u32, 3][..]));
    }
}
