/// Failure to apply an initial value to a field.
///
/// Never fatal: constructors log the error and fall back to an empty field.
#[derive(Debug, Clone)]
pub struct SeedError {
    pub field: String,
    pub message: String,
}

impl SeedError {
    pub(crate) fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for SeedError {}
