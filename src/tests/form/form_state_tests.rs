use serde_json::json;

use crate::{FieldDef, FieldEvent, FieldState, FormState, InputConfig, InputKind};

use super::{mk_field, mk_select, type_text};

fn mk_form() -> FormState {
    let mut form = FormState::new();
    form.push(FieldState::new(
        FieldDef::new("name", "Name", InputKind::Text).required(),
    ));
    form.push(FieldState::new(
        FieldDef::new("email", "Email", InputKind::Email).required(),
    ));
    form.push(mk_field("notes", InputKind::Text));
    form
}

#[test]
fn focus_cycles_forward_and_backward() {
    let mut form = mk_form();
    form.focus_next();
    assert_eq!(form.focused_index(), Some(0));
    form.focus_next();
    assert_eq!(form.focused_index(), Some(1));
    form.focus_next();
    form.focus_next();
    assert_eq!(form.focused_index(), Some(0), "wraps past the last field");

    form.focus_prev();
    assert_eq!(form.focused_index(), Some(2));
}

#[test]
fn moving_focus_blurs_the_previous_field() {
    let mut form = mk_form();
    form.focus_field(0);
    if let Some(field) = form.focused_field_mut() {
        type_text(field, "Ada");
        field.take_events();
    }
    form.focus_next();

    let first = &mut form.fields_mut()[0];
    assert!(!first.is_focused());
    assert_eq!(first.take_events(), vec![FieldEvent::FocusLost]);
    assert!(form.fields()[1].is_focused());
}

#[test]
fn submit_polling_reports_every_field() {
    let mut form = mk_form();
    assert!(!form.all_valid());
    assert_eq!(form.first_invalid().map(|f| f.def.name.as_str()), Some("name"));

    form.field_mut("name").expect("field exists").seed_value(&json!("Ada"));
    assert!(!form.all_valid());

    form.field_mut("email")
        .expect("field exists")
        .seed_value(&json!("ada@example.com"));
    assert!(form.all_valid(), "optional empty field does not block");
}

#[test]
fn build_value_exports_populated_fields_only() {
    let mut form = mk_form();
    form.push(mk_select(
        "flavor",
        InputConfig {
            type_in_select_allows_unique: true,
            ..InputConfig::default()
        },
        &["Crush", "Fun"],
    ));

    form.field_mut("name").expect("field exists").seed_value(&json!("Ada"));
    form.field_mut("email")
        .expect("field exists")
        .seed_value(&json!("ada@example.com"));
    form.field_mut("flavor").expect("field exists").seed_value(&json!("Fun"));

    let value = form.build_value();
    assert_eq!(
        value,
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "flavor": { "name": "Fun", "id": "1" },
        })
    );
}

#[test]
fn unique_select_entries_export_as_plain_strings() {
    let mut form = FormState::new();
    form.push(mk_select(
        "flavor",
        InputConfig {
            type_in_select_allows_unique: true,
            ..InputConfig::default()
        },
        &["Crush", "Fun"],
    ));

    form.focus_field(0);
    if let Some(field) = form.focused_field_mut() {
        type_text(field, "lemon");
    }
    form.blur();

    assert_eq!(form.build_value(), json!({ "flavor": "lemon" }));
}

#[test]
fn number_fields_export_numbers() {
    let mut form = FormState::new();
    let config = InputConfig {
        decimal_places: 2,
        decimal_places_fixed: true,
        ..InputConfig::default()
    };
    form.push(FieldState::new(
        FieldDef::new("price", "Price", InputKind::Number).with_config(config),
    ));
    form.field_mut("price").expect("field exists").seed_value(&json!(12.5));

    assert_eq!(form.build_value(), json!({ "price": 12.5 }));
}
