/// Preset display formats for date fields, from shortest to longest.
///
/// `InputConfig::date_format` overrides the preset when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Short,
    Medium,
    Long,
}

impl DateStyle {
    pub(crate) fn format_str(self) -> &'static str {
        match self {
            DateStyle::Short => "%-m/%-d/%y",
            DateStyle::Medium => "%b %-d, %Y",
            DateStyle::Long => "%B %-d, %Y",
        }
    }
}

/// Per-field configuration knobs.
///
/// Make one config and modify it per field instance; it is a plain value
/// struct, so every field keeps its own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    /// Character limit for text-entry kinds. `0` = unlimited.
    pub max_chars: usize,
    /// Rendering hint: lay the value out over multiple lines. Entry behavior
    /// is unchanged; a newline always finishes editing.
    pub multiline: bool,

    /// Lower bound for number fields. `0.0` disables the check on inserts
    /// but still clamps fixed-decimal rewrites.
    pub min_value: f64,
    /// Upper bound for number fields. `0.0` = unlimited.
    pub max_value: f64,
    pub comma_separators: bool,
    pub decimal_places: usize,
    /// When set, decimal places always show and digits flow in from the
    /// right, calculator-style.
    pub decimal_places_fixed: bool,
    /// Left-hand currency symbol prepended to formatted number text.
    pub currency_symbol: String,

    /// Allows type-in filtering of select candidates.
    pub type_in_select: bool,
    /// With `type_in_select`, accepts free-form text that matches no
    /// candidate as a unique entry.
    pub type_in_select_allows_unique: bool,

    pub date_style: DateStyle,
    /// A chrono format string. Overrides `date_style` when set.
    pub date_format: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_chars: 255,
            multiline: false,
            min_value: 0.0,
            max_value: 0.0,
            comma_separators: true,
            decimal_places: 2,
            decimal_places_fixed: false,
            currency_symbol: String::new(),
            type_in_select: true,
            type_in_select_allows_unique: false,
            date_style: DateStyle::Short,
            date_format: None,
        }
    }
}

impl InputConfig {
    pub(crate) fn date_format_str(&self) -> &str {
        self.date_format
            .as_deref()
            .unwrap_or_else(|| self.date_style.format_str())
    }
}
