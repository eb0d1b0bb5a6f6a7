//! Agreement averaging over match counts.
//!
//! Reduces a per-question count map to two scalar ratios: the mean
//! agreement over every predicted line, and the same mean with each
//! question's first line dropped. The first predicted line of a question
//! is frequently a structural location (an import block, a file header)
//! that attracts agreement trivially; the second ratio shows how much of
//! the average it carries.

use std::cmp::Ordering;

use serde::Serialize;

use crate::matching::CountMap;

/// Aggregate agreement ratios for one match mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Agreement {
    /// Mean ratio over every predicted line of every question.
    pub overall: f64,
    /// Mean ratio excluding each question's first line in natural order.
    pub excluding_first: f64,
}

/// Average per-line agreement ratios over a count map.
///
/// Each question's lines are visited in natural order ("2" before "10");
/// each count becomes `count / total_respondents`. The overall mean runs
/// over all lines, the second mean skips every question's first line.
/// Zero denominators (no respondents, no lines, single-line questions for
/// the second mean) yield 0 instead of dividing.
#[must_use]
pub fn calculate_agreement(counts: &CountMap, total_respondents: usize) -> Agreement {
    let mut sum = 0.0;
    let mut lines = 0usize;
    let mut sum_rest = 0.0;
    let mut lines_rest = 0usize;

    for per_line in counts.values() {
        let mut ordered: Vec<(&str, usize)> = per_line
            .iter()
            .map(|(line, &count)| (line.as_str(), count))
            .collect();
        ordered.sort_by(|a, b| natural_cmp(a.0, b.0));

        for (i, (_, count)) in ordered.iter().enumerate() {
            let ratio = if total_respondents == 0 {
                0.0
            } else {
                *count as f64 / total_respondents as f64
            };
            sum += ratio;
            lines += 1;
            if i > 0 {
                sum_rest += ratio;
                lines_rest += 1;
            }
        }
    }

    Agreement {
        overall: if lines == 0 { 0.0 } else { sum / lines as f64 },
        excluding_first: if lines_rest == 0 {
            0.0
        } else {
            sum_rest / lines_rest as f64
        },
    }
}

/// Order line-selection strings numerically where possible.
///
/// Integer-parseable strings compare by value ("2" before "10");
/// non-numeric strings sort after all numeric ones, lexicographically
/// among themselves.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Collect strings sorted with [`natural_cmp`].
pub fn natural_sorted<'a, I>(items: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut sorted: Vec<&str> = items.into_iter().map(String::as_str).collect();
    sorted.sort_by(|a, b| natural_cmp(a, b));
    sorted
}
