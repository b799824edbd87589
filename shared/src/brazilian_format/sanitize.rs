// Keystroke-level cleanup for numeric inputs.
// Users type "1.234,56", "1,234.56", "12.5" or "12.500" into the same field; each rule below
// handles one shape and the first rule that applies wins. The result keeps digits and at most
// one "," as decimal separator, which `parse` reads back without ambiguity.
use super::policy::SeparatorPolicy;

/// Sanitizes typed text with the default [`SeparatorPolicy`].
///
/// ```
/// use shared::brazilian_format::sanitize;
///
/// assert_eq!(sanitize("12.5"), "12,5");
/// assert_eq!(sanitize("1.234,56"), "1234,56");
/// assert_eq!(sanitize("abc123"), "123");
/// ```
pub fn sanitize(text: &str) -> String {
    sanitize_with(text, &SeparatorPolicy::default())
}

pub fn sanitize_with(text: &str, policy: &SeparatorPolicy) -> String {
    let cleaned = strip_foreign_chars(text);

    mixed_separators(&cleaned)
        .or_else(|| repeated_commas(&cleaned))
        .or_else(|| single_comma(&cleaned))
        .or_else(|| repeated_dots(&cleaned))
        .or_else(|| single_dot(&cleaned, policy))
        .unwrap_or(cleaned)
}

fn strip_foreign_chars(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect()
}

/// Both separators: the last one typed is the decimal point, the other one groups thousands.
fn mixed_separators(s: &str) -> Option<String> {
    let last_comma = s.rfind(',')?;
    let last_dot = s.rfind('.')?;
    let (decimal, grouping) = if last_comma > last_dot { (',', '.') } else { ('.', ',') };
    let without_grouping: String = s.chars().filter(|c| *c != grouping).collect();
    Some(join_decimal(&without_grouping, decimal))
}

/// "1,234,567": commas used as US-style thousands separators.
fn repeated_commas(s: &str) -> Option<String> {
    (s.matches(',').count() > 1).then(|| s.replace(',', ""))
}

fn single_comma(s: &str) -> Option<String> {
    (s.matches(',').count() == 1).then(|| join_decimal(s, ','))
}

/// "1.234.567": dots as pt-BR thousands separators.
fn repeated_dots(s: &str) -> Option<String> {
    (s.matches('.').count() > 1).then(|| s.replace('.', ""))
}

/// A lone dot is ambiguous ("12.5" vs "12.500"); the policy decides.
fn single_dot(s: &str, policy: &SeparatorPolicy) -> Option<String> {
    let (leading, trailing) = s.split_once('.')?;
    if policy.dot_is_thousands(leading, trailing) {
        Some(format!("{}{}", leading, trailing))
    } else {
        Some(format!("{},{}", leading, trailing))
    }
}

// First occurrence of `decimal` becomes ",", later occurrences are dropped and their digits kept.
fn join_decimal(s: &str, decimal: char) -> String {
    let mut runs = s.split(decimal);
    let integer = runs.next().unwrap_or_default();
    let fraction: String = runs.collect();
    format!("{},{}", integer, fraction)
}
