//! Exact and fuzzy matching of predicted lines against indexed answers.
//!
//! For every question, each predicted line is scored two ways: the exact
//! count of distinct respondents who selected precisely that line, and a
//! fuzzy count that widens the lookup to the ±1 neighborhood. The fuzzy
//! union never counts a respondent twice for one predicted line, and the
//! upward neighbor is suppressed when the next predicted line sits close
//! enough that both neighborhoods would claim the same selections.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::index::{AnswerIndex, RespondentId};
use crate::predictions::PredictionSet;

/// Per-question, per-line match totals for one match mode.
pub type CountMap = BTreeMap<String, BTreeMap<String, usize>>;

/// Output of [`match_predictions`]: exact and fuzzy counts, keyed like the
/// input prediction set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchCounts {
    /// Distinct respondents whose selection equals the predicted line.
    pub exact: CountMap,
    /// Distinct respondents within the predicted line's neighborhood.
    pub fuzzy: CountMap,
}

/// Match every prediction against the answer index.
///
/// Every predicted line appears in both output maps, zero-valued when no
/// respondent corroborates it. Questions with no entry in the index are
/// skipped entirely (nobody answered them); the skip is logged, not an
/// error.
///
/// Fuzzy counting per predicted line `L`:
/// - unions the respondents of `L-1`, `L`, and `L+1`, deduplicated;
/// - skips the upward neighbor when the next line in the question's
///   prediction order parses as an integer at most 2 above `L`, so two
///   adjacent predictions never credit the same selection twice;
/// - falls back to the exact count when `L` is not an integer (no
///   neighborhood exists).
#[must_use]
pub fn match_predictions(predictions: &PredictionSet, index: &AnswerIndex) -> MatchCounts {
    let mut counts = MatchCounts::default();

    for (question, predicted_lines) in predictions.questions() {
        let Some(answer_lines) = index.lines_for(question) else {
            log::warn!("no survey answers for predicted question {question}; skipping");
            continue;
        };

        let mut exact = BTreeMap::new();
        let mut fuzzy = BTreeMap::new();
        for (position, line) in predicted_lines.iter().enumerate() {
            exact.insert(line.clone(), answer_lines.get(line).map_or(0, Vec::len));
            fuzzy.insert(
                line.clone(),
                fuzzy_count(line, position, predicted_lines, answer_lines),
            );
        }

        counts.exact.insert(question.to_string(), exact);
        counts.fuzzy.insert(question.to_string(), fuzzy);
    }

    counts
}

/// Distinct respondents within the neighborhood of one predicted line.
fn fuzzy_count(
    line: &str,
    position: usize,
    predicted_lines: &[String],
    answer_lines: &BTreeMap<String, Vec<RespondentId>>,
) -> usize {
    let Ok(center) = line.parse::<i64>() else {
        // Non-numeric selections have no neighborhood.
        return answer_lines.get(line).map_or(0, Vec::len);
    };

    let skip_upward = predicted_lines
        .get(position + 1)
        .and_then(|next| next.parse::<i64>().ok())
        .is_some_and(|next| next - center <= 2);

    let mut counted: HashSet<RespondentId> = HashSet::new();
    for offset in [-1i64, 0, 1] {
        if offset > 0 && skip_upward {
            continue;
        }
        if let Some(respondents) = answer_lines.get(&(center + offset).to_string()) {
            counted.extend(respondents);
        }
    }
    counted.len()
}
