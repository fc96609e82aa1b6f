//! Serialization tests for the text notation (questions → text)

use insta::assert_snapshot;
use qset_babel::formats::text::serializer::TextSerializer;
use qset_babel::{serialize, Answer, Format, Question, TextFormat, TextRules};
use serde_json::json;

fn rich_question() -> Question {
    Question::multiple_choice("<p>Which of these are <strong>prime</strong>?</p>\n")
        .with_answer(
            Answer::correct("<p>2</p>")
                .with_tip("<em>Even</em> numbers can be prime")
                .with_chosen_feedback("Right: the only even prime"),
        )
        .with_answer(Answer::correct("3"))
        .with_answer(Answer::wrong("4").with_not_chosen_feedback("4 = 2 &times; 2"))
        .with_extra("media", json!({"type": "image", "path": "primes.png"}))
}

#[test]
fn test_rich_question_block() {
    assert_snapshot!(serialize(&rich_question(), 0), @r"
    1. Which of these are prime?
    *2:Even numbers can be prime:Right\: the only even prime
    *3
    4:::4 = 2 × 2
    ");
}

#[test]
fn test_whole_set() {
    let questions = vec![
        rich_question(),
        Question::unsupported("drag-text"),
        Question::multiple_choice("Last").with_answer(Answer::correct("yes")),
    ];
    let output = TextFormat::default().serialize(&questions).unwrap();

    assert_snapshot!(output, @r"
    1. Which of these are prime?
    *2:Even numbers can be prime:Right\: the only even prime
    *3
    4:::4 = 2 × 2

    2. Non-editable question type

    3. Last
    *yes
    ");
}

#[test]
fn test_empty_question_text_round_trips() {
    let question = Question::multiple_choice("<p></p>")
        .with_answer(Answer::correct("a"))
        .with_answer(Answer::wrong("b"));
    let text = serialize(&question, 2);
    assert_eq!(text, "3. \n*a\nb\n");

    let parsed = TextFormat::default().parse(&text).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].question_text, "");
    assert_eq!(parsed[0].answers, question.answers);
}

#[test]
fn test_leading_marker_in_wrong_answer_is_lost() {
    // The notation has no escape for a leading `*`.
    let question =
        Question::multiple_choice("Pointer syntax?").with_answer(Answer::wrong("*ptr"));
    let parsed = qset_babel::parse(&serialize(&question, 0));
    assert_eq!(parsed[0].answers, vec![Answer::correct("ptr")]);
}

#[test]
fn test_trailing_backslash_swallows_the_separator() {
    let question =
        Question::multiple_choice("Escape?").with_answer(Answer::wrong("a\\").with_tip("t"));
    let text = serialize(&question, 0);
    assert_eq!(text, "1. Escape?\na\\:t\n");

    let parsed = qset_babel::parse(&text);
    assert_eq!(parsed[0].answers[0].text, "a:t");
    assert_eq!(parsed[0].answers[0].tip, None);
}

#[test]
fn test_custom_placeholder() {
    let serializer = TextSerializer::new(TextRules {
        placeholder: "(not editable here)".to_string(),
        ..TextRules::default()
    });
    assert_eq!(
        serializer.serialize(&Question::unsupported("essay"), 9),
        "10. (not editable here)\n"
    );
}

#[test]
fn test_empty_set() {
    assert_eq!(TextFormat::default().serialize(&[]).unwrap(), "");
}
