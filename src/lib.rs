//! # concord
//!
//! Survey agreement evaluation for predicted comment locations.
//!
//! An analysis algorithm flags source-code lines as needing a comment;
//! survey respondents mark the lines they would comment. concord measures
//! how strongly the two agree:
//!
//! - **AnswerIndex**: groups each question's line selections by respondent
//! - **Matching**: exact counts per predicted line, plus fuzzy counts over
//!   the ±1 neighborhood with no double counting
//! - **Agreement**: mean agreement ratios, with and without each
//!   question's first line
//! - **Charts**: (line, count) coordinates substituted into a text
//!   template, one chart per question
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use concord::{calculate_agreement, match_predictions, AnswerIndex, PredictionSet};
//!
//! // question -> line -> respondents who selected it
//! let answers: BTreeMap<String, BTreeMap<String, Vec<u32>>> = [(
//!     "q1".to_string(),
//!     [("4".to_string(), vec![1, 2]), ("9".to_string(), vec![2])]
//!         .into_iter()
//!         .collect(),
//! )]
//! .into_iter()
//! .collect();
//! let index = AnswerIndex::from_parts(answers, 2);
//!
//! let predictions = PredictionSet::from_entries([("q1", vec!["4", "9"])]);
//! let counts = match_predictions(&predictions, &index);
//! assert_eq!(counts.exact["q1"]["4"], 2);
//!
//! let agreement = calculate_agreement(&counts.exact, index.respondent_count());
//! assert_eq!(agreement.overall, 0.75);
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | [`survey::read_survey`] | semicolon-delimited export | [`survey::Respondent`] rows |
//! | [`AnswerIndex::build`] | rows + [`config::EvalOptions`] | question → line → respondents |
//! | [`match_predictions`] | [`PredictionSet`] + index | exact + fuzzy [`MatchCounts`] |
//! | [`calculate_agreement`] | one count map | overall / excluding-first ratios |
//! | [`ChartSet::render`] | template + count map | chart artifact |
//!
//! ## Matching Semantics
//!
//! Exact counts are distinct respondents per predicted line, zero-filled
//! for predictions nobody corroborated. Fuzzy counts widen each numeric
//! prediction `L` to `{L-1, L, L+1}`, deduplicated per line, and skip the
//! upward neighbor when the next predicted line is at most 2 above `L` so
//! adjacent predictions never share credit. Non-numeric selections (the
//! empty "no comment needed" answer included) only ever match exactly.
//!
//! ## Design Philosophy
//!
//! - **Pure reducers**: matching and averaging are functions over
//!   immutable maps; the index never changes after construction
//! - **Strings stay strings**: line selections are compared textually,
//!   sorted naturally ("2" before "10")
//! - **Tolerant matching, strict ingestion**: unanswered questions are
//!   skipped with a warning; malformed survey rows fail the run

#![warn(missing_docs)]

pub mod agreement;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod matching;
pub mod predictions;
pub mod report;
pub mod survey;

pub use agreement::{calculate_agreement, natural_cmp, natural_sorted, Agreement};
pub use chart::{charted_questions, ChartSet};
pub use config::{EvalOptions, FileOverrides, FileSet, QuestionLayout};
pub use error::{Error, Result};
pub use index::{AnswerIndex, RespondentId};
pub use matching::{match_predictions, CountMap, MatchCounts};
pub use predictions::PredictionSet;
pub use report::AgreementReport;
pub use survey::{read_survey, Respondent};

/// Commonly used imports.
///
/// ```rust
/// use concord::prelude::*;
/// ```
pub mod prelude {
    pub use crate::agreement::{calculate_agreement, Agreement};
    pub use crate::chart::ChartSet;
    pub use crate::config::{EvalOptions, FileSet, QuestionLayout};
    pub use crate::error::{Error, Result};
    pub use crate::index::{AnswerIndex, RespondentId};
    pub use crate::matching::{match_predictions, CountMap, MatchCounts};
    pub use crate::predictions::PredictionSet;
    pub use crate::report::AgreementReport;
    pub use crate::survey::{read_survey, Respondent};
}
