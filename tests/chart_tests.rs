//! Chart rendering against a template resembling the production pgfplots
//! fragment: every placeholder, including repeated ones, is substituted
//! per question.

use std::collections::BTreeMap;

use concord::{charted_questions, ChartSet, CountMap};

const TEMPLATE: &str = r"\begin{figure}
    \includegraphics{PLACEHOLDER_SURVEY_IMAGE}
    \begin{axis}[xlabel={PLACEHOLDER_X_LABEL},
                 symbolic x coords={PLACEHOLDER_X_COORDS}]
        \addplot coordinates {
                PLACEHOLDER_VALUES
        };
    \end{axis}
    \caption{PLACEHOLDER_CAPTION}
    \label{PLACEHOLDER_LABEL}
\end{figure}";

fn counts(entries: &[(&str, &[(&str, usize)])]) -> CountMap {
    entries
        .iter()
        .map(|(question, lines)| {
            let lines: BTreeMap<String, usize> = lines
                .iter()
                .map(|(line, count)| (line.to_string(), *count))
                .collect();
            (question.to_string(), lines)
        })
        .collect()
}

#[test]
fn every_placeholder_is_substituted() {
    let counts = counts(&[("q3", &[("2", 4), ("10", 1)])]);

    let set = ChartSet::render(TEMPLATE, &counts);

    assert_eq!(set.len(), 1);
    let chart = &set.charts()[0];
    assert!(
        !chart.contains("PLACEHOLDER"),
        "unsubstituted marker left in:\n{}",
        chart
    );
    assert!(chart.contains(r"\includegraphics{survey_images/01_unmarked/q3.png}"));
    assert!(chart.contains("xlabel={Comment Requirement Location Line Numbers}"));
    assert!(chart.contains(r"\caption{Question 3}"));
    assert!(chart.contains(r"\label{fig:q3}"));
}

#[test]
fn coordinates_follow_natural_line_order() {
    let counts = counts(&[("q1", &[("10", 1), ("2", 4), ("note", 0)])]);

    let set = ChartSet::render(TEMPLATE, &counts);

    let chart = &set.charts()[0];
    assert!(chart.contains("symbolic x coords={2,10,note}"));
    let sep = format!("\n{}", " ".repeat(16));
    let expected_values = format!("(2,4){sep}(10,1){sep}(note,0)");
    assert!(
        chart.contains(&expected_values),
        "values block missing or misindented in:\n{}",
        chart
    );
}

#[test]
fn each_chart_carries_its_own_label() {
    let counts = counts(&[
        ("q1", &[("1", 1)]),
        ("q2", &[("1", 1)]),
        ("marked9", &[("1", 1)]),
    ]);

    let set = ChartSet::render(TEMPLATE, &counts);

    assert_eq!(set.len(), 3);
    assert!(set.charts()[0].contains(r"\label{fig:q1}"));
    assert!(set.charts()[1].contains(r"\label{fig:q2}"));
    assert!(set.charts()[2].contains(r"\label{fig:marked9}"));
    assert!(set.charts()[2].contains(r"\caption{Question 19}"));
    assert!(set.charts()[2].contains("survey_images/02_marked/marked9.png"));
    assert!(set.charts()[2].contains("xlabel={Highlighted Comment Requirement Locations}"));
}

#[test]
fn questions_without_counts_render_no_fragment() {
    let counts = counts(&[("q5", &[("3", 2)])]);

    let set = ChartSet::render(TEMPLATE, &counts);

    assert_eq!(set.len(), 1);
    assert!(set.charts()[0].contains(r"\caption{Question 5}"));
}

#[test]
fn artifact_joins_fragments_with_a_blank_line() {
    let counts = counts(&[("q1", &[("1", 1)]), ("q2", &[("2", 2)])]);

    let set = ChartSet::render("chart:PLACEHOLDER_CAPTION", &counts);

    assert_eq!(set.artifact(), "chart:Question 1\n\nchart:Question 2");
    assert_eq!(set.to_string(), set.artifact());
}

#[test]
fn display_order_is_free_questions_then_marked() {
    let counts = counts(&[("marked1", &[("1", 1)]), ("q10", &[("1", 1)])]);

    let set = ChartSet::render("PLACEHOLDER_LABEL", &counts);

    // q10 precedes marked1 regardless of map iteration order.
    assert_eq!(set.charts(), ["fig:q10", "fig:marked1"]);
    assert_eq!(charted_questions().len(), 20);
}
