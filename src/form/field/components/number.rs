use serde_json::Value;

use crate::domain::{FieldDef, InputConfig};
use crate::form::error::SeedError;
use crate::format::{extract_decimal_digits, extract_double_value, format_number_string};

use super::super::value::FieldValue;
use super::{ComponentKind, EditOutcome, EditProposal, FieldComponent};

/// Numeric entry. In fixed-decimal mode digits flow in from the right like a
/// calculator display and the component rewrites the text itself; otherwise
/// edits are vetted against the configured bounds and the text is reformatted
/// after each change.
#[derive(Debug, Clone, Default)]
pub struct NumberComponent;

impl NumberComponent {
    /// Numeric value of the buffer, `None` when nothing numeric was typed.
    fn buffer_value(raw: &str) -> Option<f64> {
        if extract_decimal_digits(raw).is_empty() {
            None
        } else {
            Some(extract_double_value(raw))
        }
    }

    fn clamp_min(config: &InputConfig, value: f64) -> f64 {
        value.max(config.min_value)
    }
}

impl FieldComponent for NumberComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Number
    }

    fn propose_edit(&mut self, def: &FieldDef, raw: &str, edit: &EditProposal) -> EditOutcome {
        if edit.text == "\n" {
            return EditOutcome::Commit;
        }

        let config = &def.config;
        let fixed = config.decimal_places_fixed && config.decimal_places > 0;
        let raw_chars = raw.chars().count();
        let is_delete = edit.is_delete(raw_chars);
        if is_delete && !fixed {
            return EditOutcome::Accept;
        }

        if edit.text == "." {
            return if config.decimal_places > 0 && !raw.contains('.') {
                EditOutcome::Accept
            } else {
                EditOutcome::Reject
            };
        }

        let next = edit.apply(raw);
        let next_number = extract_double_value(&next);
        if !is_delete && config.max_value > 0.0 && next_number > config.max_value {
            return EditOutcome::Reject;
        }

        if fixed {
            // Digits shift through the fixed fraction: inserts land in the
            // rightmost place, deletes divide back out.
            let rewritten = if is_delete {
                let mut new_value = next_number;
                if new_value == 0.0 {
                    String::new()
                } else {
                    let deleted = edit.range.len();
                    if deleted == 1 && edit.range.end == raw_chars {
                        new_value /= 10.0;
                    } else if deleted == raw_chars {
                        new_value = extract_double_value(&edit.text)
                            / 10f64.powi(config.decimal_places as i32);
                    }
                    Self::clamp_min(config, new_value).to_string()
                }
            } else {
                let incoming =
                    extract_double_value(&edit.text) / 10f64.powi(config.decimal_places as i32);
                let mut current = Self::buffer_value(raw).unwrap_or(0.0);
                current *= 10f64.powi(edit.text.chars().count() as i32);
                Self::clamp_min(config, current + incoming).to_string()
            };
            return EditOutcome::Rewrite(rewritten);
        }

        if config.min_value != 0.0 && next_number < config.min_value {
            return EditOutcome::Reject;
        }

        EditOutcome::Accept
    }

    fn text_changed(&mut self, def: &FieldDef, raw: &mut String) {
        if raw.as_str() == "-" {
            return;
        }
        // A buffer with no digits left clears fully instead of sticking at 0.
        if Self::buffer_value(raw).is_none() && raw.as_str() != "." {
            raw.clear();
            return;
        }
        let config = &def.config;
        let formatted = format_number_string(
            raw,
            config.decimal_places,
            config.decimal_places_fixed,
            config.comma_separators,
        );
        *raw = format!("{}{formatted}", config.currency_symbol);
    }

    fn seed(&mut self, def: &FieldDef, raw: &mut String, value: &Value) -> Result<(), SeedError> {
        match value.as_f64() {
            Some(number) => {
                *raw = number.max(def.config.min_value).to_string();
                self.text_changed(def, raw);
                Ok(())
            }
            None => Err(SeedError::new(&def.name, "expected a numeric initial value")),
        }
    }

    fn value(&self, _def: &FieldDef, raw: &str) -> Option<FieldValue> {
        Self::buffer_value(raw).map(FieldValue::Number)
    }
}
