mod builder;
#[cfg(feature = "tui")]
mod input;
mod value_ops;

use chrono::NaiveDate;

use crate::domain::{FieldDef, InputKind, SelectOption};
use crate::form::event::FieldEvent;
use crate::format::is_valid_email;

use super::components::{ComponentKind, EditOutcome, EditProposal, FieldComponent};

/// One form-input field: the raw display text, the focus flag, and the
/// kind-specific component behind it.
///
/// The field cycles empty → editing → filled and back indefinitely; nothing
/// is terminal, and every operation runs synchronously to completion before
/// the next event is handled.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub def: FieldDef,
    /// Visible validation failure, set when an invalid value is committed.
    /// Editing resumes regardless; the field never locks up.
    pub error: Option<String>,
    pub(crate) raw: String,
    pub(crate) component: Box<dyn FieldComponent>,
    focused: bool,
    events: Vec<FieldEvent>,
}

impl FieldState {
    pub fn component_kind(&self) -> ComponentKind {
        self.component.kind()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the field has no content. The prompt text is display-only and
    /// never enters the buffer, so content equality with it cannot confuse
    /// this check.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The current content text. Differs from `display_text`, which falls
    /// back to the prompt while the field is empty and unfocused.
    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    /// Replaces the content text without firing change handling, mirroring a
    /// programmatic set on a native text widget.
    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        self.raw = text.into();
    }

    pub fn focus_gained(&mut self) {
        if self.focused {
            return;
        }
        self.focused = true;
        self.error = None;
        self.component.opened(&self.def, &self.raw);
        self.push_event(FieldEvent::FocusGained);
    }

    pub fn focus_lost(&mut self) {
        if !self.focused {
            return;
        }
        self.focused = false;
        self.component.closing(&self.def, &mut self.raw);
        if self.def.kind == InputKind::Email
            && !self.raw.is_empty()
            && !is_valid_email(&self.raw)
        {
            self.error = Some("invalid email address".to_string());
        }
        self.push_event(FieldEvent::FocusLost);
    }

    /// Vets one proposed text edit and applies whatever the component
    /// decides. Returns whether the proposal itself was accepted; a rewrite
    /// (fixed-decimal entry) reports `false` while still updating the text.
    pub fn propose_text_change(&mut self, edit: &EditProposal) -> bool {
        match self.component.propose_edit(&self.def, &self.raw, edit) {
            EditOutcome::Accept => {
                self.raw = edit.apply(&self.raw);
                self.text_did_change();
                true
            }
            EditOutcome::Rewrite(text) => {
                self.raw = text;
                self.text_did_change();
                false
            }
            EditOutcome::Commit => {
                self.focus_lost();
                false
            }
            EditOutcome::Reject => false,
        }
    }

    /// Chooser row picked directly (the native picker-wheel path). Sets the
    /// text without re-entering the filter.
    pub fn picker_row_selected(&mut self, row: usize) {
        self.component.select_row(row, &mut self.raw);
    }

    /// The Select button: mirror the chooser value into the text and finish
    /// editing.
    pub fn confirm_picker(&mut self) {
        if !self.def.kind.is_picker_type() {
            return;
        }
        if let Some(text) = self.component.picker_text(&self.def) {
            self.raw = text;
        }
        self.focus_lost();
    }

    /// The Create button: commit the typed text as a unique entry, skipping
    /// the usual snap to the highlighted candidate.
    pub fn request_create(&mut self) {
        self.component.mark_create_requested();
        self.focus_lost();
    }

    /// The Reset button: clear the field entirely and finish editing.
    pub fn reset(&mut self) {
        self.raw.clear();
        self.focus_lost();
    }

    pub fn set_picker_date(&mut self, date: NaiveDate) {
        self.component.set_picker_date(date);
    }

    pub fn picker_date(&self) -> Option<NaiveDate> {
        self.component.picker_date()
    }

    /// The filtered candidate view a select chooser currently shows.
    pub fn candidates(&self) -> &[SelectOption] {
        self.component.candidates().unwrap_or(&[])
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.component.selected_row()
    }

    /// Whether the typed text diverges from the highlighted candidate enough
    /// to offer creating it as a unique entry.
    pub fn can_create_unique(&self) -> bool {
        self.component.can_create_unique(&self.def, &self.raw)
    }

    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    fn text_did_change(&mut self) {
        self.error = None;
        self.component.text_changed(&self.def, &mut self.raw);
        self.push_event(FieldEvent::TextChanged);
    }

    fn push_event(&mut self, event: FieldEvent) {
        self.events.push(event);
    }
}
