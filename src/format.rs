use std::sync::OnceLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"^([a-zA-Z0-9_\-.+]+)@([a-zA-Z0-9_\-.]+)\.([a-zA-Z]{2,4})$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(&format!("(?i){EMAIL_PATTERN}")).expect("email pattern is valid")
    })
}

/// Whether the whole string is a plausible email address.
pub fn is_valid_email(s: &str) -> bool {
    email_regex().is_match(s)
}

/// Strips a string down to digits, decimal points, and minus signs, keeping
/// their original order. A building block for number entry, not a parser.
pub fn extract_decimal_digits(s: &str) -> String {
    s.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect()
}

/// Numeric value of a string where non-numerical characters are ignored.
///
/// Parses the longest leading run of the extracted digits that still forms a
/// number, so trailing garbage (a second decimal point, a stray sign) is
/// dropped rather than failing the parse. Returns `0.0` when nothing numeric
/// is left.
pub fn extract_double_value(s: &str) -> f64 {
    let digits = extract_decimal_digits(s);
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in digits.char_indices() {
        match ch {
            '-' if idx == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => {}
            _ => break,
        }
        end = idx + ch.len_utf8();
    }
    digits[..end].parse().unwrap_or(0.0)
}

/// Extracts a number string from arbitrary text with basic formatting: an
/// optional leading minus, comma grouping, and truncated (never rounded) or
/// zero-padded decimal places.
///
/// A simplified replacement for locale-aware number formatters, which are a
/// pain to drive from per-keystroke text input.
pub fn format_number_string(
    s: &str,
    decimal_places: usize,
    decimal_places_fixed: bool,
    include_commas: bool,
) -> String {
    let mut first_part;
    let mut second_part = String::new();

    if s.contains('.') || (decimal_places_fixed && decimal_places > 0) {
        let parts: Vec<&str> = s.split('.').collect();
        first_part = extract_decimal_digits(parts[0]);
        if decimal_places > 0 {
            if parts.len() == 2 {
                second_part = extract_decimal_digits(parts[1]);
            }
            if second_part.chars().count() > decimal_places {
                second_part.truncate(decimal_places);
            } else if decimal_places_fixed {
                let missing = decimal_places - second_part.chars().count();
                second_part.extend(std::iter::repeat_n('0', missing));
            }
            second_part.insert(0, '.');
        }
    } else {
        first_part = extract_decimal_digits(s);
    }

    first_part.retain(|ch| ch != '-');
    if include_commas {
        first_part = group_thousands(&first_part);
    }

    let sign = if s.starts_with('-') { "-" } else { "" };
    format!("{sign}{first_part}{second_part}")
}

fn group_thousands(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
    let mut grouped = String::with_capacity(trimmed.len() + trimmed.len() / 3);
    for (idx, ch) in trimmed.chars().enumerate() {
        if idx > 0 && (trimmed.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
