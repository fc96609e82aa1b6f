//! Round-trip tests: serialize, edit nothing, parse and recycle.

use proptest::prelude::*;
use qset_babel::{parse, recycle, serialize, Answer, Format, FormatRegistry, Question, TextFormat};
use serde_json::json;

/// Plain single-line text that survives escaping and markup stripping.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ?!.,:()-]{0,24}".prop_map(|s| s.trim().to_string())
}

fn optional_text_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(text_strategy())
}

fn answer_strategy() -> impl Strategy<Value = Answer> {
    (
        text_strategy(),
        any::<bool>(),
        optional_text_strategy(),
        optional_text_strategy(),
        optional_text_strategy(),
    )
        .prop_map(|(text, correct, tip, chosen, not_chosen)| Answer {
            text,
            correct,
            tip,
            chosen_feedback: chosen,
            not_chosen_feedback: not_chosen,
        })
}

fn question_strategy() -> impl Strategy<Value = Question> {
    (text_strategy(), prop::collection::vec(answer_strategy(), 0..6)).prop_map(
        |(text, answers)| {
            answers
                .into_iter()
                .fold(Question::multiple_choice(text), Question::with_answer)
        },
    )
}

proptest! {
    #[test]
    fn test_question_survives_round_trip(question in question_strategy(), position in 0usize..50) {
        let text = serialize(&question, position);
        let fresh = parse(&text);
        prop_assert_eq!(fresh.len(), 1, "Failed to parse back: {}", text);

        let mut stored = vec![Question::multiple_choice("placeholder"); position];
        stored.push(question.clone());
        let recycled = recycle(&stored, fresh.into_iter().next().unwrap());
        prop_assert_eq!(recycled, question);
    }

    #[test]
    fn test_blocks_parse_in_order(questions in prop::collection::vec(question_strategy(), 1..6)) {
        let text = TextFormat::default().serialize(&questions).unwrap();
        let parsed = TextFormat::default().with_base(questions.clone()).parse(&text).unwrap();
        prop_assert_eq!(parsed, questions);
    }
}

#[test]
fn test_extra_fields_survive_text_editing() {
    let registry = FormatRegistry::with_defaults();
    let stored = vec![
        Question::multiple_choice("<p>Capital of France?</p>")
            .with_answer(Answer::correct("Paris"))
            .with_answer(Answer::wrong("Lyon"))
            .with_extra("behaviour", json!({"randomAnswers": true})),
        Question::unsupported("essay").with_extra("prompt", json!("Discuss")),
    ];

    let text = registry.serialize(&stored, "text").unwrap();
    let edited = text.replace("Lyon", "Marseille");
    let parsed = TextFormat::default().with_base(stored.clone()).parse(&edited).unwrap();

    assert_eq!(parsed[0].question_text, "Capital of France?");
    assert_eq!(parsed[0].answers[1], Answer::wrong("Marseille"));
    assert_eq!(parsed[0].extra["behaviour"]["randomAnswers"], true);
    assert_eq!(parsed[1], stored[1]);
}

#[test]
fn test_reordered_questions_keep_their_match() {
    let stored = vec![
        Question::multiple_choice("A")
            .with_answer(Answer::correct("a"))
            .with_extra("id", json!(1)),
        Question::multiple_choice("B")
            .with_answer(Answer::correct("b"))
            .with_extra("id", json!(2)),
    ];
    // Numbers travel with the text, so swapped blocks recycle their own item.
    let edited = "2. B\n*b\n\n1. A\n*a\n";
    let parsed = TextFormat::default().with_base(stored).parse(edited).unwrap();

    assert_eq!(parsed[0].extra["id"], 2);
    assert_eq!(parsed[1].extra["id"], 1);
}
