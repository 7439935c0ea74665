#![deny(rust_2018_idioms)]

mod domain;
mod form;
mod format;
#[cfg(feature = "tui")]
mod presentation;


pub use domain::{DateStyle, FieldDef, InputConfig, InputKind, SelectOption};
pub use form::{
    ComponentKind, EditOutcome, EditProposal, FieldEvent, FieldState, FieldValue, FormState,
    SeedError,
};
pub use format::{
    extract_decimal_digits, extract_double_value, format_number_string, is_valid_email,
};
#[cfg(feature = "tui")]
pub use presentation::render_form;

pub mod prelude {
    pub use super::{
        DateStyle, FieldDef, FieldState, FieldValue, FormState, InputConfig, InputKind,
        SelectOption,
    };
}
