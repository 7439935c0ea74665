use chrono::NaiveDate;
use serde_json::json;

use crate::{FieldDef, FieldEvent, FieldState, FieldValue, InputKind};

use super::{mk_field, type_text};

#[test]
fn prompt_text_shows_while_empty_and_unfocused() {
    let field = FieldState::new(FieldDef::new("name", "Name", InputKind::Text).required());
    assert_eq!(field.display_text(), "Name (required)");

    let optional = mk_field("nickname", InputKind::Text);
    assert_eq!(optional.display_text(), "nickname");
}

#[test]
fn focus_clears_the_prompt_from_display() {
    let mut field = FieldState::new(FieldDef::new("name", "Name", InputKind::Text).required());
    field.focus_gained();
    assert_eq!(field.display_text(), "");
    assert!(field.is_empty());
}

#[test]
fn blur_without_content_returns_to_the_prompt() {
    let mut field = FieldState::new(FieldDef::new("name", "Name", InputKind::Text).required());
    field.focus_gained();
    field.focus_lost();
    assert_eq!(field.display_text(), "Name (required)");
    assert_eq!(field.value(), None);
}

#[test]
fn a_value_equal_to_the_prompt_text_is_still_content() {
    let mut field = FieldState::new(FieldDef::new("name", "Name", InputKind::Text));
    field.focus_gained();
    type_text(&mut field, "Name");
    field.focus_lost();

    assert!(!field.is_empty());
    assert_eq!(field.value(), Some(FieldValue::Text("Name".to_string())));
}

#[test]
fn events_fire_after_each_transition() {
    let mut field = mk_field("name", InputKind::Text);
    field.focus_gained();
    type_text(&mut field, "ab");
    field.focus_lost();

    assert_eq!(
        field.take_events(),
        vec![
            FieldEvent::FocusGained,
            FieldEvent::TextChanged,
            FieldEvent::TextChanged,
            FieldEvent::FocusLost,
        ]
    );
    assert!(field.take_events().is_empty());
}

#[test]
fn redundant_focus_calls_do_not_fire_events() {
    let mut field = mk_field("name", InputKind::Text);
    field.focus_gained();
    field.focus_gained();
    field.take_events();

    field.focus_lost();
    field.focus_lost();
    assert_eq!(field.take_events(), vec![FieldEvent::FocusLost]);
}

#[test]
fn rejected_edits_leave_no_trace() {
    let mut field = mk_field("count", InputKind::Number);
    field.focus_gained();
    field.take_events();

    let accepted = field.propose_text_change(&crate::EditProposal::insert(0, "x"));
    // A character with no digits formats away to nothing.
    assert!(accepted);
    assert!(field.is_empty());
}

#[test]
fn fields_are_reusable_across_focus_cycles() {
    let mut field = mk_field("name", InputKind::Text);
    for round in 0..3 {
        field.focus_gained();
        type_text(&mut field, "v");
        field.focus_lost();
        assert_eq!(field.raw_text().len(), round + 1);
    }
}

#[test]
fn date_value_comes_from_the_picker_not_the_text() {
    let mut field = mk_field("when", InputKind::Date);
    let date = NaiveDate::from_ymd_opt(2024, 3, 14).expect("valid date");
    field.set_picker_date(date);
    assert_eq!(field.value(), None);

    field.focus_gained();
    field.confirm_picker();
    assert!(!field.is_focused());
    assert_eq!(field.raw_text(), "3/14/24");
    assert_eq!(field.value(), Some(FieldValue::Date(date)));
}

#[test]
fn seeded_dates_mirror_into_the_text() {
    let mut field = mk_field("when", InputKind::Date);
    field.seed_value(&json!("3/14/24"));
    assert_eq!(field.raw_text(), "3/14/24");
    assert_eq!(
        field.value(),
        Some(FieldValue::Date(
            NaiveDate::from_ymd_opt(2024, 3, 14).expect("valid date")
        ))
    );
}

#[test]
fn unparsable_date_seeds_fall_back_to_empty() {
    let mut field = mk_field("when", InputKind::Date);
    field.seed_value(&json!("14th of March"));
    assert!(field.is_empty());
    assert_eq!(field.value(), None);
}

#[test]
fn date_reset_empties_the_value_again() {
    let mut field = mk_field("when", InputKind::Date);
    field.seed_value(&json!("3/14/24"));
    assert!(field.value().is_some());

    field.reset();
    assert_eq!(field.value(), None);
}
