use serde::{Deserialize, Serialize};

use super::InputConfig;

/// The entry mode of a field.
///
/// Text and Email are free-text entry. Number formats per keystroke. Select
/// and Date are picker-backed: their confirmed value comes from a discrete
/// chooser rather than free-text parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Number,
    Select,
    Date,
}

impl InputKind {
    pub fn is_picker_type(self) -> bool {
        matches!(self, InputKind::Select | InputKind::Date)
    }
}

/// One selectable entry of a select field.
///
/// Names are not required to be unique; lookups take the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
    pub id: String,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Immutable definition of one field: export key, display title, kind,
/// required flag, and configuration. Fixed at construction.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub title: String,
    pub kind: InputKind,
    pub required: bool,
    pub config: InputConfig,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, title: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind,
            required: false,
            config: InputConfig::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_config(mut self, config: InputConfig) -> Self {
        self.config = config;
        self
    }

    /// Prompt text shown while the field has no content and no focus.
    pub fn prompt_text(&self) -> String {
        if self.required {
            format!("{} (required)", self.title)
        } else {
            self.title.clone()
        }
    }

    /// Picker-backed fields that take no typed text at all: date pickers and
    /// selects without type-in filtering.
    pub(crate) fn is_non_text_entry(&self) -> bool {
        self.kind == InputKind::Date
            || (self.kind == InputKind::Select && !self.config.type_in_select)
    }
}
