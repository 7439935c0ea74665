use std::ops::Range;

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::{FieldDef, SelectOption};
use crate::form::error::SeedError;

use super::super::value::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Text,
    Number,
    Select,
    Date,
}

/// One proposed text edit: replace `range` (char indices into the current
/// text) with `text`. An empty `text` is a deletion, an empty `range` an
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditProposal {
    pub range: Range<usize>,
    pub text: String,
}

impl EditProposal {
    pub fn new(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::new(at..at, text)
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self::new(range, "")
    }

    /// The text as it would read with this edit applied.
    pub fn apply(&self, raw: &str) -> String {
        let mut next: String = raw.chars().take(self.range.start).collect();
        next.push_str(&self.text);
        next.extend(raw.chars().skip(self.range.end));
        next
    }

    /// Whether the edit touches existing text rather than appending past it.
    pub(crate) fn is_delete(&self, raw_chars: usize) -> bool {
        self.range.start < raw_chars
    }
}

/// Verdict on a proposed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Apply the edit as proposed.
    Accept,
    /// Drop the edit; the text stays as it was.
    Reject,
    /// Replace the whole text with this string instead of applying the edit.
    /// Fixed-decimal number entry manages its text this way.
    Rewrite(String),
    /// End editing; the field loses focus.
    Commit,
}

/// Kind-specific behavior behind a `FieldState`.
///
/// The state owns the raw text buffer; components vet edits against it, react
/// to changes, and hold whatever auxiliary state their kind needs (candidate
/// lists, a picker date). Picker hooks default to no-ops so plain text kinds
/// implement only the entry contract.
pub(crate) trait FieldComponent: FieldComponentClone + std::fmt::Debug {
    fn kind(&self) -> ComponentKind;

    fn propose_edit(&mut self, def: &FieldDef, raw: &str, edit: &EditProposal) -> EditOutcome;

    /// Runs after the buffer changed: reformat number text, refilter
    /// candidates.
    fn text_changed(&mut self, def: &FieldDef, raw: &mut String) {
        let _ = (def, raw);
    }

    /// Focus gained; picker-backed components surface their chooser.
    fn opened(&mut self, def: &FieldDef, raw: &str) {
        let _ = (def, raw);
    }

    /// Focus about to be lost; picker-backed components may snap the text to
    /// the chooser value.
    fn closing(&mut self, def: &FieldDef, raw: &mut String) {
        let _ = (def, raw);
    }

    fn seed(&mut self, def: &FieldDef, raw: &mut String, value: &Value) -> Result<(), SeedError>;

    /// Typed value for a non-empty buffer. Emptiness is gated by the state.
    fn value(&self, def: &FieldDef, raw: &str) -> Option<FieldValue>;

    fn candidates(&self) -> Option<&[SelectOption]> {
        None
    }

    fn selected_row(&self) -> Option<usize> {
        None
    }

    fn select_row(&mut self, _row: usize, _raw: &mut String) -> bool {
        false
    }

    fn can_create_unique(&self, _def: &FieldDef, _raw: &str) -> bool {
        false
    }

    fn mark_create_requested(&mut self) {}

    /// Current chooser value rendered as display text.
    fn picker_text(&self, _def: &FieldDef) -> Option<String> {
        None
    }

    fn picker_date(&self) -> Option<NaiveDate> {
        None
    }

    fn set_picker_date(&mut self, _date: NaiveDate) -> bool {
        false
    }

    /// Moves the chooser by whole rows (select) or days (date).
    fn step_picker(&mut self, _def: &FieldDef, _raw: &mut String, _delta: i32) -> bool {
        false
    }
}

pub(crate) trait FieldComponentClone {
    fn clone_box(&self) -> Box<dyn FieldComponent>;
}

impl<T> FieldComponentClone for T
where
    T: 'static + FieldComponent + Clone,
{
    fn clone_box(&self) -> Box<dyn FieldComponent> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn FieldComponent> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
