//! Editing session tests

use qset_babel::editor::DEFAULT_WARNING;
use qset_babel::{
    Answer, EditorOptions, FieldRef, FieldValue, ItemSource, Question, QuestionKind, QuestionList,
    TextRules, TextualEditor,
};
use serde_json::json;

/// A host list that records how it was rebuilt.
#[derive(Default)]
struct RecordingList {
    items: Vec<Question>,
    clears: usize,
}

impl QuestionList for RecordingList {
    fn get_value(&self) -> Vec<Question> {
        self.items.clone()
    }

    fn remove_all_items(&mut self) {
        self.clears += 1;
        self.items.clear();
    }

    fn add_item(&mut self, question: Question) {
        self.items.push(question);
    }
}

/// A host item whose rich-text fields fail validation.
struct BrokenFields;

impl ItemSource for BrokenFields {
    fn kind(&self) -> QuestionKind {
        QuestionKind::MultipleChoice
    }

    fn answer_count(&self) -> usize {
        2
    }

    fn is_correct(&self, answer: usize) -> bool {
        answer == 1
    }

    fn field(&self, field: FieldRef) -> FieldValue {
        match field {
            FieldRef::Question => FieldValue::Invalid,
            FieldRef::AnswerText(0) => FieldValue::Invalid,
            FieldRef::AnswerText(_) => FieldValue::Text("<b>Kept</b>".to_string()),
            _ => FieldValue::Text(String::new()),
        }
    }
}

#[test]
fn test_edit_session() {
    let mut list = RecordingList {
        items: vec![
            Question::multiple_choice("Old question")
                .with_answer(Answer::correct("a"))
                .with_extra("media", json!("a.png")),
            Question::unsupported("summary").with_extra("summaries", json!(["x"])),
        ],
        clears: 0,
    };

    let mut editor = TextualEditor::default();
    editor.load(&list);
    assert_eq!(editor.take_warning(), Some(DEFAULT_WARNING));

    let edited = format!("{}\n3. Added\n*new\n", editor.text());
    editor.set_text(edited);
    assert_eq!(editor.recreate_list(&mut list), 3);

    assert_eq!(list.clears, 1);
    assert_eq!(list.items[0].extra["media"], "a.png");
    assert!(!list.items[1].kind.is_multiple_choice());
    assert_eq!(list.items[2].question_text, "Added");
    assert!(list.items[2].extra.is_empty());
    assert_eq!(editor.take_warning(), None);
}

#[test]
fn test_invalid_host_fields_are_skipped() {
    let mut editor = TextualEditor::default();
    editor.add_item(&BrokenFields, 0);
    assert_eq!(editor.text(), "1. \n*Kept\n");
}

#[test]
fn test_clearing_the_text_empties_the_list() {
    let mut list = vec![Question::multiple_choice("Q").with_answer(Answer::correct("a"))];
    let mut editor = TextualEditor::default();
    editor.load(&list);
    editor.set_text("");

    assert_eq!(editor.recreate_list(&mut list), 0);
    assert!(list.is_empty());
}

#[test]
fn test_placeholders_can_be_left_as_questions() {
    let options = EditorOptions {
        rules: TextRules {
            recycle_placeholders: false,
            ..TextRules::default()
        },
        warning: "Careful".to_string(),
    };
    let mut list = vec![Question::unsupported("essay")];
    let mut editor = TextualEditor::new(options);
    editor.load(&list);
    assert_eq!(editor.take_warning(), Some("Careful"));

    editor.recreate_list(&mut list);
    assert!(list[0].kind.is_multiple_choice());
    assert_eq!(list[0].question_text, "Non-editable question type");
}
