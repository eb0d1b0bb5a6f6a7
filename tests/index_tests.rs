//! Index construction from respondent rows: id assignment, token
//! normalization, and the experience filter.

use concord::{AnswerIndex, EvalOptions, QuestionLayout, Respondent};

const NO_TS: &str = "I have never written or read TypeScript before";

fn layout() -> QuestionLayout {
    QuestionLayout::from_entries([("q1", 0), ("q2", 1)])
}

fn respondent(q1: &str, q2: &str) -> Respondent {
    Respondent {
        experience_programming: "5+ years".to_string(),
        experience_typescript: "2 years".to_string(),
        answers: vec![q1.to_string(), q2.to_string()],
    }
}

#[test]
fn ids_are_sequential_over_accepted_rows() {
    let rows = vec![respondent("4", ""), respondent("4,6", ""), respondent("6", "")];

    let index = AnswerIndex::build(&layout(), &rows, &EvalOptions::default());

    assert_eq!(index.respondent_count(), 3);
    assert_eq!(index.respondents_for("q1", "4"), Some(&[1, 2][..]));
    assert_eq!(index.respondents_for("q1", "6"), Some(&[2, 3][..]));
}

#[test]
fn filtered_rows_consume_no_id() {
    let mut inexperienced = respondent("9", "");
    inexperienced.experience_typescript = NO_TS.to_string();
    let rows = vec![respondent("4", ""), inexperienced, respondent("4", "")];
    let options = EvalOptions {
        only_experienced_respondents: true,
    };

    let index = AnswerIndex::build(&layout(), &rows, &options);

    // The dropped middle row leaves no gap: the third respondent is id 2.
    assert_eq!(index.respondent_count(), 2);
    assert_eq!(index.respondents_for("q1", "4"), Some(&[1, 2][..]));
    assert_eq!(index.respondents_for("q1", "9"), None);
}

#[test]
fn whitespace_is_stripped_before_splitting() {
    let rows = vec![respondent("3, 14,\t15", "8\n9")];

    let index = AnswerIndex::build(&layout(), &rows, &EvalOptions::default());

    assert_eq!(index.respondents_for("q1", "3"), Some(&[1][..]));
    assert_eq!(index.respondents_for("q1", "14"), Some(&[1][..]));
    assert_eq!(index.respondents_for("q1", "15"), Some(&[1][..]));
    // A line break inside one token fuses the digits, it does not split.
    assert_eq!(index.respondents_for("q2", "89"), Some(&[1][..]));
    assert_eq!(index.respondents_for("q2", "8"), None);
}

#[test]
fn repeated_token_in_one_row_counts_once() {
    let rows = vec![respondent("7,7, 7", ""), respondent("7", "")];

    let index = AnswerIndex::build(&layout(), &rows, &EvalOptions::default());

    assert_eq!(index.respondents_for("q1", "7"), Some(&[1, 2][..]));
}

#[test]
fn empty_answer_is_a_selection_of_the_empty_line() {
    let rows = vec![respondent("", "12")];

    let index = AnswerIndex::build(&layout(), &rows, &EvalOptions::default());

    assert_eq!(index.respondents_for("q1", ""), Some(&[1][..]));
    assert_eq!(index.lines_for("q1").map(|m| m.len()), Some(1));
}

#[test]
fn no_rows_yield_an_empty_index() {
    let index = AnswerIndex::build(&layout(), &[], &EvalOptions::default());

    assert_eq!(index.respondent_count(), 0);
    assert_eq!(index.question_count(), 0);
    assert!(index.is_empty());
}

#[test]
fn default_layout_tracks_thirty_questions() {
    let layout = QuestionLayout::survey_default();

    assert_eq!(layout.len(), 30);
    let names: Vec<&str> = layout.entries().iter().map(|(q, _)| q.as_str()).collect();
    assert!(names.contains(&"q1"));
    assert!(names.contains(&"q10"));
    assert!(names.contains(&"marked7"));
    assert!(names.contains(&"marked7a"));
    assert_eq!(layout.max_column(), 36);
}
