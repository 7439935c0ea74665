use crate::{EditProposal, FieldValue, InputConfig, InputKind};
use serde_json::json;

use super::{mk_field_with_config, type_text};

fn fixed_config(places: usize) -> InputConfig {
    InputConfig {
        decimal_places: places,
        decimal_places_fixed: true,
        ..InputConfig::default()
    }
}

#[test]
fn fixed_decimal_digits_flow_in_from_the_right() {
    let mut field = mk_field_with_config("amount", InputKind::Number, fixed_config(2));
    field.focus_gained();

    type_text(&mut field, "5");
    assert_eq!(field.raw_text(), "0.05");
    assert_eq!(field.value(), Some(FieldValue::Number(0.05)));

    type_text(&mut field, "0");
    assert_eq!(field.raw_text(), "0.50");
    assert_eq!(field.value(), Some(FieldValue::Number(0.5)));

    type_text(&mut field, "0");
    assert_eq!(field.raw_text(), "5.00");
    assert_eq!(field.value(), Some(FieldValue::Number(5.0)));
}

#[test]
fn fixed_decimal_backspace_shifts_digits_back_out() {
    let mut field = mk_field_with_config("amount", InputKind::Number, fixed_config(2));
    field.focus_gained();
    type_text(&mut field, "500");
    assert_eq!(field.raw_text(), "5.00");

    let end = field.raw_text().chars().count();
    field.propose_text_change(&EditProposal::delete(end - 1..end));
    assert_eq!(field.raw_text(), "0.50");
}

#[test]
fn fixed_decimal_full_delete_clears_the_field() {
    let mut field = mk_field_with_config("amount", InputKind::Number, fixed_config(2));
    field.focus_gained();
    type_text(&mut field, "42");
    assert_eq!(field.raw_text(), "0.42");

    let end = field.raw_text().chars().count();
    field.propose_text_change(&EditProposal::delete(0..end));
    assert_eq!(field.raw_text(), "");
    assert_eq!(field.value(), None);
}

#[test]
fn fixed_decimal_prepends_the_currency_symbol() {
    let config = InputConfig {
        currency_symbol: "$".to_string(),
        ..fixed_config(2)
    };
    let mut field = mk_field_with_config("price", InputKind::Number, config);
    field.focus_gained();
    type_text(&mut field, "1250");
    assert_eq!(field.raw_text(), "$12.50");
    assert_eq!(field.value(), Some(FieldValue::Number(12.5)));
}

#[test]
fn rejects_a_second_decimal_point() {
    let config = InputConfig::default();
    let mut field = mk_field_with_config("amount", InputKind::Number, config);
    field.focus_gained();
    type_text(&mut field, "1.5");
    assert_eq!(field.raw_text(), "1.5");

    let end = field.raw_text().chars().count();
    let accepted = field.propose_text_change(&EditProposal::insert(end, "."));
    assert!(!accepted);
    assert_eq!(field.raw_text(), "1.5");
}

#[test]
fn rejects_decimal_point_when_no_places_are_allowed() {
    let config = InputConfig {
        decimal_places: 0,
        ..InputConfig::default()
    };
    let mut field = mk_field_with_config("count", InputKind::Number, config);
    field.focus_gained();
    type_text(&mut field, "7");
    let accepted = field.propose_text_change(&EditProposal::insert(1, "."));
    assert!(!accepted);
    assert_eq!(field.raw_text(), "7");
}

#[test]
fn rejects_inserts_past_the_maximum() {
    let config = InputConfig {
        max_value: 100.0,
        ..InputConfig::default()
    };
    let mut field = mk_field_with_config("amount", InputKind::Number, config);
    field.focus_gained();
    type_text(&mut field, "99");
    assert_eq!(field.raw_text(), "99");

    let accepted = field.propose_text_change(&EditProposal::insert(2, "9"));
    assert!(!accepted);
    assert_eq!(field.raw_text(), "99");
}

#[test]
fn deletions_may_fall_below_the_minimum() {
    let config = InputConfig {
        min_value: 10.0,
        ..InputConfig::default()
    };
    let mut field = mk_field_with_config("amount", InputKind::Number, config);
    field.seed_value(&json!(50));
    field.focus_gained();
    assert_eq!(field.raw_text(), "50");

    let accepted = field.propose_text_change(&EditProposal::delete(1..2));
    assert!(accepted);
    assert_eq!(field.raw_text(), "5");
}

#[test]
fn rejects_inserts_below_the_minimum() {
    let config = InputConfig {
        min_value: 10.0,
        ..InputConfig::default()
    };
    let mut field = mk_field_with_config("amount", InputKind::Number, config);
    field.focus_gained();
    let accepted = field.propose_text_change(&EditProposal::insert(0, "5"));
    assert!(!accepted);
    assert_eq!(field.raw_text(), "");
}

#[test]
fn comma_separators_reformat_on_every_keystroke() {
    let mut field = mk_field_with_config("amount", InputKind::Number, InputConfig::default());
    field.focus_gained();
    type_text(&mut field, "1234567");
    assert_eq!(field.raw_text(), "1,234,567");
}

#[test]
fn clearing_all_digits_empties_the_field() {
    let mut field = mk_field_with_config("amount", InputKind::Number, InputConfig::default());
    field.focus_gained();
    type_text(&mut field, "8");
    field.propose_text_change(&EditProposal::delete(0..1));
    assert_eq!(field.raw_text(), "");
    assert_eq!(field.value(), None);
}

#[test]
fn seeded_number_round_trips_through_fixed_formatting() {
    let mut field = mk_field_with_config("amount", InputKind::Number, fixed_config(1));
    field.seed_value(&json!(5.5));
    assert_eq!(field.raw_text(), "5.5");
    assert_eq!(field.value(), Some(FieldValue::Number(5.5)));
}

#[test]
fn seeds_clamp_to_the_minimum() {
    let config = InputConfig {
        min_value: 10.0,
        ..InputConfig::default()
    };
    let mut field = mk_field_with_config("amount", InputKind::Number, config);
    field.seed_value(&json!(3));
    assert_eq!(field.value(), Some(FieldValue::Number(10.0)));
}

#[test]
fn newline_commits_instead_of_inserting() {
    let mut field = mk_field_with_config("amount", InputKind::Number, InputConfig::default());
    field.focus_gained();
    type_text(&mut field, "12");
    field.propose_text_change(&EditProposal::insert(2, "\n"));
    assert!(!field.is_focused());
    assert_eq!(field.raw_text(), "12");
}
