//! Chart template rendering.
//!
//! The chart template is opaque text carrying `PLACEHOLDER_*` markers. One
//! fragment is rendered per charted question, with the question's match
//! counts as (line, count) coordinates, and the fragments are joined into
//! a single artifact. Whether the counts are exact or fuzzy is the
//! caller's choice; rendering is the same.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::agreement::natural_cmp;
use crate::error::{Error, Result};
use crate::matching::CountMap;

/// X-axis label for free-selection questions.
const X_LABEL_FREE: &str = "Comment Requirement Location Line Numbers";

/// X-axis label for pre-marked questions.
const X_LABEL_MARKED: &str = "Highlighted Comment Requirement Locations";

/// Display-name/question-id pairs charted by [`ChartSet::render`], in
/// output order. "Question 1"-"Question 10" are the free-selection
/// questions `q1`-`q10`; "Question 11"-"Question 20" are the pre-marked
/// `marked1`-`marked10`.
#[must_use]
pub fn charted_questions() -> Vec<(String, String)> {
    let mut table = Vec::with_capacity(20);
    for n in 1..=10 {
        table.push((format!("Question {}", n), format!("q{}", n)));
    }
    for n in 1..=10 {
        table.push((format!("Question {}", n + 10), format!("marked{}", n)));
    }
    table
}

/// Rendered chart fragments in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSet {
    charts: Vec<String>,
}

impl ChartSet {
    /// Render one chart per charted question present in `counts`.
    ///
    /// Display names whose question id has no counts produce no fragment;
    /// with partial predictions that is expected, so it is only logged.
    #[must_use]
    pub fn render(template: &str, counts: &CountMap) -> ChartSet {
        let mut charts = Vec::new();
        for (display_name, question) in charted_questions() {
            let Some(lines) = counts.get(&question) else {
                log::debug!("no match counts for {question}; chart skipped");
                continue;
            };
            charts.push(render_chart(template, &display_name, &question, lines));
        }
        ChartSet { charts }
    }

    /// The rendered fragments, in display order.
    #[must_use]
    pub fn charts(&self) -> &[String] {
        &self.charts
    }

    /// Number of rendered fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    /// True when nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// The output artifact: fragments joined with a blank line.
    #[must_use]
    pub fn artifact(&self) -> String {
        self.charts.join("\n\n")
    }

    /// Write the artifact to a file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.artifact())
            .map_err(|e| Error::chart(format!("failed to write {}: {}", path.display(), e)))
    }
}

impl fmt::Display for ChartSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.artifact())
    }
}

fn render_chart(
    template: &str,
    display_name: &str,
    question: &str,
    lines: &BTreeMap<String, usize>,
) -> String {
    let (x_label, image_dir) = if question.starts_with('q') {
        (X_LABEL_FREE, "01_unmarked")
    } else {
        (X_LABEL_MARKED, "02_marked")
    };
    let image_path = format!("survey_images/{}/{}.png", image_dir, question);

    let mut ordered: Vec<(&str, usize)> = lines
        .iter()
        .map(|(line, &count)| (line.as_str(), count))
        .collect();
    ordered.sort_by(|a, b| natural_cmp(a.0, b.0));

    let x_coords = ordered
        .iter()
        .map(|(line, _)| *line)
        .collect::<Vec<_>>()
        .join(",");
    // Continuation lines are indented to sit under the template's
    // coordinate list.
    let separator = format!("\n{}", " ".repeat(16));
    let values = ordered
        .iter()
        .map(|(line, count)| format!("({},{})", line, count))
        .collect::<Vec<_>>()
        .join(&separator);

    template
        .replace("PLACEHOLDER_X_LABEL", x_label)
        .replace("PLACEHOLDER_SURVEY_IMAGE", &image_path)
        .replace("PLACEHOLDER_CAPTION", display_name)
        .replace("PLACEHOLDER_LABEL", &format!("fig:{}", question))
        .replace("PLACEHOLDER_X_COORDS", &x_coords)
        .replace("PLACEHOLDER_VALUES", &values)
}
