use serde_json::{Value, json};

use crate::domain::InputKind;
use crate::format::is_valid_email;

use super::super::value::FieldValue;
use super::FieldState;

impl FieldState {
    /// Usable typed value, `None` while the field is empty.
    pub fn value(&self) -> Option<FieldValue> {
        if self.is_empty() {
            return None;
        }
        self.component.value(&self.def, &self.raw)
    }

    /// Email fields validate their format whenever text has been entered,
    /// required or not. Every other kind is valid once it has a value, or
    /// always when optional.
    pub fn value_is_valid(&self) -> bool {
        match self.def.kind {
            InputKind::Email => match self.value() {
                Some(FieldValue::Text(text)) => is_valid_email(&text),
                _ => !self.def.required,
            },
            _ => self.value().is_some() || !self.def.required,
        }
    }

    /// What a rendering layer should show: the content text, or the prompt
    /// while the field is empty and unfocused.
    pub fn display_text(&self) -> String {
        if !self.is_focused() && self.is_empty() {
            self.def.prompt_text()
        } else {
            self.raw.clone()
        }
    }

    /// The value as JSON for whole-form export.
    pub fn json_value(&self) -> Option<Value> {
        self.value().map(|value| match value {
            FieldValue::Text(text) | FieldValue::Unique(text) => Value::String(text),
            FieldValue::Number(number) => json!(number),
            FieldValue::Choice(option) => json!({ "name": option.name, "id": option.id }),
            FieldValue::Date(date) => {
                Value::String(date.format(self.def.config.date_format_str()).to_string())
            }
        })
    }
}
