use chrono::{Days, Local, NaiveDate};
use serde_json::Value;

use crate::domain::FieldDef;
use crate::form::error::SeedError;

use super::super::value::FieldValue;
use super::{ComponentKind, EditOutcome, EditProposal, FieldComponent};

/// Date chooser. Takes no typed text; the buffer only mirrors the chosen
/// date once it is confirmed.
#[derive(Debug, Clone)]
pub struct DateComponent {
    date: NaiveDate,
}

impl DateComponent {
    pub fn new() -> Self {
        Self {
            date: Local::now().date_naive(),
        }
    }

    fn render(&self, def: &FieldDef) -> String {
        self.date.format(def.config.date_format_str()).to_string()
    }
}

impl Default for DateComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldComponent for DateComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Date
    }

    fn propose_edit(&mut self, _def: &FieldDef, _raw: &str, edit: &EditProposal) -> EditOutcome {
        if edit.text == "\n" {
            EditOutcome::Commit
        } else {
            EditOutcome::Reject
        }
    }

    fn seed(&mut self, def: &FieldDef, raw: &mut String, value: &Value) -> Result<(), SeedError> {
        let text = value
            .as_str()
            .ok_or_else(|| SeedError::new(&def.name, "expected a date string initial value"))?;
        let format = def.config.date_format_str();
        let date = NaiveDate::parse_from_str(text, format).map_err(|err| {
            SeedError::new(&def.name, format!("'{text}' does not match '{format}': {err}"))
        })?;
        self.date = date;
        *raw = self.render(def);
        Ok(())
    }

    fn value(&self, _def: &FieldDef, _raw: &str) -> Option<FieldValue> {
        Some(FieldValue::Date(self.date))
    }

    fn picker_text(&self, def: &FieldDef) -> Option<String> {
        Some(self.render(def))
    }

    fn picker_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn set_picker_date(&mut self, date: NaiveDate) -> bool {
        self.date = date;
        true
    }

    fn step_picker(&mut self, _def: &FieldDef, _raw: &mut String, delta: i32) -> bool {
        let days = Days::new(delta.unsigned_abs() as u64);
        let next = if delta < 0 {
            self.date.checked_sub_days(days)
        } else {
            self.date.checked_add_days(days)
        };
        match next {
            Some(date) => {
                self.date = date;
                true
            }
            None => false,
        }
    }
}
