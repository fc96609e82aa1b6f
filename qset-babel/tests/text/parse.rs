//! Parse tests for the text notation (text → questions)

use qset_babel::{parse, Answer, Question};
use rstest::rstest;

#[test]
fn test_help_example() {
    let questions = parse("What number is PI?\n*3.14\n9.82\n\nWhat is 4 * 0?\n1\n4\n*0");

    assert_eq!(
        questions,
        vec![
            Question::multiple_choice("What number is PI?")
                .with_answer(Answer::correct("3.14"))
                .with_answer(Answer::wrong("9.82")),
            Question::multiple_choice("What is 4 * 0?")
                .with_answer(Answer::wrong("1"))
                .with_answer(Answer::wrong("4"))
                .with_answer(Answer::correct("0")),
        ]
    );
    assert!(questions.iter().all(|q| q.single_answer_only));
}

#[test]
fn test_feedback_fields() {
    let questions = parse("Q\n*Answer 1.0:d:e\n*Answer 1.1:::f");
    let answers = &questions[0].answers;

    assert_eq!(
        answers[0],
        Answer::correct("Answer 1.0")
            .with_tip("d")
            .with_chosen_feedback("e")
    );
    assert_eq!(
        answers[1],
        Answer::correct("Answer 1.1").with_not_chosen_feedback("f")
    );
    assert!(!questions[0].single_answer_only);
}

#[test]
fn test_blank_line_separates_questions() {
    let questions = parse("First\n*a\n\nSecond\n*b");
    let texts: Vec<_> = questions.iter().map(|q| q.question_text.as_str()).collect();
    assert_eq!(texts, vec!["First", "Second"]);
}

#[test]
fn test_repeated_blank_lines() {
    let questions = parse("\n\nFirst\n*a\n\n\n\nSecond\n\n");
    assert_eq!(questions.len(), 2);
    assert!(questions[1].answers.is_empty());
}

#[test]
fn test_question_without_answers() {
    let questions = parse("Lonely question");
    assert_eq!(questions.len(), 1);
    assert!(questions[0].answers.is_empty());
    assert!(questions[0].single_answer_only);
}

#[rstest]
#[case::one_of_three("Q\n*a\nb\nc", true)]
#[case::two_of_three("Q\n*a\n*b\nc", false)]
#[case::none("Q\na\nb", true)]
#[case::all("Q\n*a\n*b\n*c", false)]
fn test_single_answer_mode(#[case] source: &str, #[case] single: bool) {
    assert_eq!(parse(source)[0].single_answer_only, single);
}

#[rstest]
#[case::plain("Answer", "Answer", None)]
#[case::padded("   Answer  ", "Answer", None)]
#[case::padded_marker("  *Answer", "Answer", None)]
#[case::space_after_marker("* Answer", "Answer", None)]
#[case::escaped_colon("12\\:30", "12:30", None)]
#[case::escaped_colon_in_tip("Now:at 12\\:30", "Now", Some("at 12:30"))]
#[case::blank_tip("Answer:   ", "Answer", None)]
#[case::padded_tip("Answer : hint ", "Answer", Some("hint"))]
#[case::only_separator(":hint", "", Some("hint"))]
fn test_answer_line(#[case] line: &str, #[case] text: &str, #[case] tip: Option<&str>) {
    let questions = parse(&format!("Q\n{line}"));
    let answer = &questions[0].answers[0];
    assert_eq!(answer.text, text);
    assert_eq!(answer.tip.as_deref(), tip);
}

#[test]
fn test_marker_only_inside_text_is_not_a_marker() {
    let questions = parse("Q\n2*3");
    assert!(!questions[0].answers[0].correct);
    assert_eq!(questions[0].answers[0].text, "2*3");
}

#[test]
fn test_numbering_is_kept_by_the_parser() {
    let questions = parse("3. Third\n*a");
    assert_eq!(questions[0].question_text, "3. Third");
}

#[test]
fn test_ampersand_is_escaped() {
    let questions = parse("Salt & pepper?\n*yes & no");
    assert_eq!(questions[0].question_text, "Salt &amp; pepper?");
    assert_eq!(questions[0].answers[0].text, "yes &amp; no");
}
