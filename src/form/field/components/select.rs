use regex::Regex;
use serde_json::Value;

use crate::domain::{FieldDef, SelectOption};
use crate::form::error::SeedError;

use super::super::value::FieldValue;
use super::{ComponentKind, EditOutcome, EditProposal, FieldComponent};

/// Picker-backed choice entry with optional type-in filtering and unique
/// free-form entries.
///
/// `full` never changes after construction; `candidates` is the filtered view
/// the chooser shows, rebuilt on every keystroke and restored on open/close.
#[derive(Debug, Clone)]
pub struct SelectComponent {
    full: Vec<SelectOption>,
    candidates: Vec<SelectOption>,
    selected: usize,
    create_requested: bool,
}

impl SelectComponent {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            candidates: options.clone(),
            full: options,
            selected: 0,
            create_requested: false,
        }
    }

    fn selected_option(&self) -> Option<&SelectOption> {
        self.candidates.get(self.selected)
    }

    fn restore_full_list(&mut self) {
        self.candidates = self.full.clone();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.candidates.len() {
            self.selected = self.candidates.len().saturating_sub(1);
        }
    }

    fn refresh_candidates(&mut self, raw: &str) {
        let needle = raw.to_lowercase();
        if needle.is_empty() {
            self.restore_full_list();
            return;
        }

        let hits: Vec<SelectOption> = self
            .full
            .iter()
            .filter(|option| option.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        match hits.len() {
            0 => {
                // No narrowing: keep the previous candidates so a unique
                // entry can still surface against them.
            }
            1 => {
                // Whittled down to one hit: show the full list with the hit
                // selected rather than collapsing the chooser to a single row.
                let id = hits[0].id.clone();
                self.restore_full_list();
                if let Some(idx) = self.candidates.iter().position(|option| option.id == id) {
                    self.selected = idx;
                }
            }
            _ => {
                self.candidates = hits;
                // Substring hits match anywhere within a name; prefer a
                // candidate where a word starts with the typed first letter.
                if let Some(first) = needle.chars().next() {
                    if let Some(idx) = self
                        .candidates
                        .iter()
                        .position(|option| word_starts_with(&option.name, first))
                    {
                        self.selected = idx;
                    }
                }
                self.clamp_selection();
            }
        }
    }
}

fn word_starts_with(name: &str, first: char) -> bool {
    let pattern = format!(r"(?i)\b{}", regex::escape(&first.to_string()));
    Regex::new(&pattern)
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}

impl FieldComponent for SelectComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Select
    }

    fn propose_edit(&mut self, def: &FieldDef, raw: &str, edit: &EditProposal) -> EditOutcome {
        if edit.text == "\n" {
            return EditOutcome::Commit;
        }
        if def.is_non_text_entry() {
            return EditOutcome::Reject;
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

    fn text_changed(&mut self, def: &FieldDef, raw: &mut String) {
        if def.config.type_in_select {
            self.refresh_candidates(raw);
        }
    }

    fn opened(&mut self, _def: &FieldDef, _raw: &str) {
        // Never open with the search filter applied.
        self.restore_full_list();
    }

    fn closing(&mut self, def: &FieldDef, raw: &mut String) {
        let config = &def.config;
        if !self.create_requested && !def.is_non_text_entry() && !raw.is_empty() {
            if config.type_in_select && self.can_create_unique(def, raw) {
                // A partial word match is assumed to mean a search result the
                // user settled on; anything else stays as a unique entry. The
                // explicit create request covers the unlikely partial-match
                // unique case.
                if let Some(selected) = self.selected_option() {
                    if selected.name.to_lowercase().contains(&raw.to_lowercase()) {
                        *raw = selected.name.clone();
                    }
                }
            } else if let Some(selected) = self.selected_option() {
                *raw = selected.name.clone();
            }
        }
        self.create_requested = false;
        if config.type_in_select {
            self.restore_full_list();
        }
    }

    fn seed(&mut self, def: &FieldDef, raw: &mut String, value: &Value) -> Result<(), SeedError> {
        let name = value
            .as_str()
            .or_else(|| value.get("name").and_then(Value::as_str))
            .ok_or_else(|| {
                SeedError::new(&def.name, "expected a string or {name, id} initial value")
            })?;

        if let Some(idx) = self.full.iter().position(|option| option.name == name) {
            self.selected = idx;
            *raw = name.to_string();
            Ok(())
        } else if def.config.type_in_select && def.config.type_in_select_allows_unique {
            *raw = name.to_string();
            Ok(())
        } else {
            Err(SeedError::new(
                &def.name,
                format!("initial value '{name}' not found in the option list"),
            ))
        }
    }

    fn value(&self, def: &FieldDef, raw: &str) -> Option<FieldValue> {
        let config = &def.config;
        if config.type_in_select && config.type_in_select_allows_unique {
            if let Some(option) = self.candidates.iter().find(|option| option.name == raw) {
                return Some(FieldValue::Choice(option.clone()));
            }
            return Some(FieldValue::Unique(raw.to_string()));
        }
        self.selected_option().cloned().map(FieldValue::Choice)
    }

    fn candidates(&self) -> Option<&[SelectOption]> {
        Some(&self.candidates)
    }

    fn selected_row(&self) -> Option<usize> {
        if self.candidates.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    fn select_row(&mut self, row: usize, raw: &mut String) -> bool {
        let Some(option) = self.candidates.get(row) else {
            return false;
        };
        *raw = option.name.clone();
        self.selected = row;
        true
    }

    fn can_create_unique(&self, def: &FieldDef, raw: &str) -> bool {
        let config = &def.config;
        if !config.type_in_select || !config.type_in_select_allows_unique || raw.is_empty() {
            return false;
        }
        match self.selected_option() {
            Some(selected) => {
                raw.chars().count() > selected.name.chars().count()
                    || raw.to_lowercase() != selected.name.to_lowercase()
            }
            None => true,
        }
    }

    fn mark_create_requested(&mut self) {
        self.create_requested = true;
    }

    fn picker_text(&self, _def: &FieldDef) -> Option<String> {
        self.selected_option().map(|option| option.name.clone())
    }

    fn step_picker(&mut self, _def: &FieldDef, raw: &mut String, delta: i32) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        let len = self.candidates.len() as i32;
        let next = (self.selected as i32 + delta).rem_euclid(len) as usize;
        self.select_row(next, raw)
    }
}
