use serde_json::{Map, Value};

use super::field::FieldState;

/// An ordered collection of fields with at most one focused at a time.
///
/// Focus moves drive the blur/focus transitions of the fields involved, so a
/// chooser closes and its text snaps before the next field starts editing.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<FieldState>,
    focus: Option<usize>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FieldState) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [FieldState] {
        &mut self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|field| field.def.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|field| field.def.name == name)
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.focus.and_then(|idx| self.fields.get(idx))
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        self.focus.and_then(|idx| self.fields.get_mut(idx))
    }

    pub fn focus_field(&mut self, index: usize) {
        if index >= self.fields.len() || self.focus == Some(index) {
            return;
        }
        self.blur();
        self.focus = Some(index);
        self.fields[index].focus_gained();
    }

    pub fn blur(&mut self) {
        if let Some(idx) = self.focus.take() {
            if let Some(field) = self.fields.get_mut(idx) {
                field.focus_lost();
            }
        }
    }

    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let next = match self.focus {
            Some(idx) => (idx + 1) % self.fields.len(),
            None => 0,
        };
        self.focus_field(next);
    }

    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len();
        let prev = match self.focus {
            Some(idx) => (idx + len - 1) % len,
            None => len - 1,
        };
        self.focus_field(prev);
    }

    /// Submit-time poll: every field either holds a valid value or is
    /// allowed to stay empty.
    pub fn all_valid(&self) -> bool {
        self.fields.iter().all(FieldState::value_is_valid)
    }

    pub fn first_invalid(&self) -> Option<&FieldState> {
        self.fields.iter().find(|field| !field.value_is_valid())
    }

    /// Exports every populated field as a JSON object keyed by field name.
    pub fn build_value(&self) -> Value {
        let mut map = Map::new();
        for field in &self.fields {
            if let Some(value) = field.json_value() {
                map.insert(field.def.name.clone(), value);
            }
        }
        Value::Object(map)
    }
}
