mod error;
mod event;
mod field;
mod state;

pub use error::SeedError;
pub use event::FieldEvent;
pub use field::{ComponentKind, EditOutcome, EditProposal, FieldState, FieldValue};
pub use state::FormState;
