//! Run reports: aggregate agreement plus per-question detail.
//!
//! [`AgreementReport`] is the final product of one evaluation run. It
//! renders either as an aligned text summary for the terminal or as
//! pretty-printed JSON for downstream tooling.

use std::fmt;

use serde::Serialize;

use crate::agreement::{calculate_agreement, natural_cmp, Agreement};
use crate::error::{Error, Result};
use crate::matching::MatchCounts;

/// Full result of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgreementReport {
    /// Respondents accepted into the index (the agreement denominator).
    pub respondents: usize,
    /// Exact and fuzzy per-line counts.
    pub counts: MatchCounts,
    /// Agreement over the exact counts.
    pub exact: Agreement,
    /// Agreement over the fuzzy counts.
    pub fuzzy: Agreement,
}

impl AgreementReport {
    /// Build the report from match counts, computing both agreement pairs.
    #[must_use]
    pub fn new(respondents: usize, counts: MatchCounts) -> AgreementReport {
        let exact = calculate_agreement(&counts.exact, respondents);
        let fuzzy = calculate_agreement(&counts.fuzzy, respondents);
        AgreementReport {
            respondents,
            counts,
            exact,
            fuzzy,
        }
    }

    /// Human-readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::new();

        out.push_str("=== Survey Agreement Report ===\n");
        out.push_str(&format!("Respondents: {}\n", self.respondents));
        out.push_str(&format!("Questions matched: {}\n\n", self.counts.exact.len()));

        if !self.counts.exact.is_empty() {
            out.push_str("## Per-Question Matches\n");
            for (question, lines) in &self.counts.exact {
                out.push_str(&format!("  {}\n", question));

                let mut ordered: Vec<(&str, usize)> = lines
                    .iter()
                    .map(|(line, &count)| (line.as_str(), count))
                    .collect();
                ordered.sort_by(|a, b| natural_cmp(a.0, b.0));

                for (line, exact) in ordered {
                    let fuzzy = self
                        .counts
                        .fuzzy
                        .get(question)
                        .and_then(|per_line| per_line.get(line))
                        .copied()
                        .unwrap_or(0);
                    out.push_str(&format!(
                        "    line {:>5}  exact {:>3}  fuzzy {:>3}\n",
                        line, exact, fuzzy
                    ));
                }
            }
            out.push('\n');
        }

        out.push_str("## Agreement\n");
        out.push_str(&format!(
            "  Exact: overall {:5.1}%  excluding first {:5.1}%\n",
            self.exact.overall * 100.0,
            self.exact.excluding_first * 100.0
        ));
        out.push_str(&format!(
            "  Fuzzy: overall {:5.1}%  excluding first {:5.1}%\n",
            self.fuzzy.overall * 100.0,
            self.fuzzy.excluding_first * 100.0
        ));

        out
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::report(format!("JSON serialization failed: {}", e)))
    }
}

impl fmt::Display for AgreementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::AnswerIndex;
    use crate::matching::match_predictions;
    use crate::predictions::PredictionSet;

    fn sample_report() -> AgreementReport {
        let answers = [(
            "q1".to_string(),
            [
                ("1".to_string(), vec![1, 2, 3]),
                ("10".to_string(), vec![2]),
            ]
            .into_iter()
            .collect(),
        )]
        .into_iter()
        .collect();
        let index = AnswerIndex::from_parts(answers, 4);
        let predictions = PredictionSet::from_entries([("q1", vec!["1", "10"])]);
        AgreementReport::new(4, match_predictions(&predictions, &index))
    }

    #[test]
    fn summary_lists_lines_in_natural_order() {
        let summary = sample_report().summary();
        assert!(summary.contains("Respondents: 4"));
        let first = summary.find("line     1").expect("line 1 listed");
        let second = summary.find("line    10").expect("line 10 listed");
        assert!(first < second, "natural order expected:\n{}", summary);
    }

    #[test]
    fn summary_reports_both_agreement_pairs() {
        let report = sample_report();
        // exact: (3/4 + 1/4) / 2 = 0.5; excluding first: 1/4.
        assert_eq!(report.exact.overall, 0.5);
        assert_eq!(report.exact.excluding_first, 0.25);
        let summary = report.summary();
        assert!(summary.contains("Exact: overall  50.0%"), "got:\n{}", summary);
        assert!(summary.contains("excluding first  25.0%"), "got:\n{}", summary);
    }

    #[test]
    fn json_round_trips_through_serde() {
        let json = sample_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["respondents"], 4);
        assert_eq!(value["counts"]["exact"]["q1"]["1"], 3);
        assert_eq!(value["exact"]["overall"], 0.5);
    }
}
