use serde_json::Value;

use crate::domain::FieldDef;
use crate::form::error::SeedError;

use super::super::value::FieldValue;
use super::{ComponentKind, EditOutcome, EditProposal, FieldComponent};

/// Free-text entry, shared by text and email fields. Holds no auxiliary
/// state; the buffer lives in `FieldState`.
#[derive(Debug, Clone, Default)]
pub struct TextComponent;

impl FieldComponent for TextComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Text
    }

    fn propose_edit(&mut self, def: &FieldDef, raw: &str, edit: &EditProposal) -> EditOutcome {
        if edit.text == "\n" {
            return EditOutcome::Commit;
        }
        if edit.is_delete(raw.chars().count()) {
            return EditOutcome::Accept;
        }
        if def.config.max_chars == 0 {
            return EditOutcome::Accept;
        }
        let next = edit.apply(raw);
        if next.chars().count() > def.config.max_chars {
            EditOutcome::Reject
        } else {
            EditOutcome::Accept
        }
    }

    fn seed(&mut self, def: &FieldDef, raw: &mut String, value: &Value) -> Result<(), SeedError> {
        match value.as_str() {
            Some(text) => {
                *raw = text.to_string();
                Ok(())
            }
            None => Err(SeedError::new(&def.name, "expected a string initial value")),
        }
    }

    fn value(&self, _def: &FieldDef, raw: &str) -> Option<FieldValue> {
        Some(FieldValue::Text(raw.to_string()))
    }
}
