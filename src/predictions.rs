//! Prediction loading.
//!
//! Predictions arrive as a JSON object mapping question ids to arrays of
//! line-number strings, e.g. `{"q3": ["1", "14", "15"]}`. Array order is
//! preserved: the fuzzy matcher reads adjacency between consecutive
//! predicted lines from it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered predicted line selections per question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionSet {
    per_question: BTreeMap<String, Vec<String>>,
}

impl PredictionSet {
    /// Load predictions from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<PredictionSet> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::predictions(format!("failed to read {}: {}", path.display(), e)))?;
        PredictionSet::from_json(&raw)
            .map_err(|e| Error::predictions(format!("{}: {}", path.display(), e)))
    }

    /// Parse predictions from a JSON string.
    pub fn from_json(raw: &str) -> Result<PredictionSet> {
        serde_json::from_str(raw).map_err(|e| Error::predictions(e.to_string()))
    }

    /// Build a prediction set from (question id, predicted lines) pairs.
    pub fn from_entries<I, Q, L>(entries: I) -> PredictionSet
    where
        I: IntoIterator<Item = (Q, Vec<L>)>,
        Q: Into<String>,
        L: Into<String>,
    {
        PredictionSet {
            per_question: entries
                .into_iter()
                .map(|(q, lines)| (q.into(), lines.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// (question id, predicted lines) pairs, questions in sorted order.
    pub fn questions(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.per_question
            .iter()
            .map(|(q, lines)| (q.as_str(), lines.as_slice()))
    }

    /// Predicted lines for one question, in prediction order.
    #[must_use]
    pub fn lines_for(&self, question: &str) -> Option<&[String]> {
        self.per_question.get(question).map(Vec::as_slice)
    }

    /// Number of questions with predictions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.per_question.len()
    }

    /// True when no question has predictions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_question.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_prediction_object() {
        let set = PredictionSet::from_json(r#"{"q1": ["5", "12"], "marked3": ["1"]}"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.lines_for("q1"),
            Some(&["5".to_string(), "12".to_string()][..])
        );
        assert_eq!(set.lines_for("marked3"), Some(&["1".to_string()][..]));
        assert_eq!(set.lines_for("q2"), None);
    }

    #[test]
    fn prediction_order_is_preserved() {
        let set = PredictionSet::from_json(r#"{"q1": ["9", "2", "30"]}"#).unwrap();
        assert_eq!(
            set.lines_for("q1"),
            Some(&["9".to_string(), "2".to_string(), "30".to_string()][..])
        );
    }

    #[test]
    fn rejects_non_string_lines() {
        let err = PredictionSet::from_json(r#"{"q1": [5]}"#).unwrap_err();
        assert!(matches!(err, Error::Predictions(_)));
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(PredictionSet::from_json(r#"["q1"]"#).is_err());
    }
}
