use serde_json::Value;
use tracing::warn;

use crate::domain::{FieldDef, InputKind, SelectOption};
use crate::form::error::SeedError;

use super::super::components::{
    DateComponent, FieldComponent, NumberComponent, SelectComponent, TextComponent,
};
use super::FieldState;

impl FieldState {
    /// Builds an empty field of the definition's kind. Select fields built
    /// this way have no candidates; use `with_options` for those.
    pub fn new(def: FieldDef) -> Self {
        Self::with_options(def, Vec::new())
    }

    pub fn with_options(def: FieldDef, options: Vec<SelectOption>) -> Self {
        let component: Box<dyn FieldComponent> = match def.kind {
            InputKind::Text | InputKind::Email => Box::new(TextComponent),
            InputKind::Number => Box::new(NumberComponent),
            InputKind::Select => Box::new(SelectComponent::new(options)),
            InputKind::Date => Box::new(DateComponent::new()),
        };
        Self {
            def,
            error: None,
            raw: String::new(),
            component,
            focused: false,
            events: Vec::new(),
        }
    }

    /// Applies an initial value. A value the field cannot take (a select
    /// entry missing from the candidate list, an unparsable date) is logged
    /// and the field falls back to its empty state.
    pub fn seed_value(&mut self, value: &Value) {
        if let Err(err) = self.try_seed(value) {
            warn!("initial value dropped, field starts empty: {err}");
            self.raw.clear();
        }
    }

    fn try_seed(&mut self, value: &Value) -> Result<(), SeedError> {
        self.component.seed(&self.def, &mut self.raw, value)
    }
}
