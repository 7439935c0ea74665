mod config;
mod field;

pub use config::{DateStyle, InputConfig};
pub use field::{FieldDef, InputKind, SelectOption};
