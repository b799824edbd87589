use super::parse::try_parse;
use crate::models::{FormatInput, NumberKind};

const CURRENCY_PREFIX: &str = "R$ ";
const PERCENT_SUFFIX: &str = "%";

/// Formats a value for display in pt-BR: `.` groups thousands, `,` separates decimals.
///
/// Fractional values get 2 decimals (1 for percentages), whole values none.
/// Empty, non-numeric or non-finite input gives an empty string.
///
/// ```
/// use shared::brazilian_format::format;
/// use shared::models::NumberKind;
///
/// assert_eq!(format(1000000.5, NumberKind::Currency), "R$ 1.000.000,50");
/// assert_eq!(format(12.5, NumberKind::Percentage), "12,5%");
/// assert_eq!(format("", NumberKind::Quantity), "");
/// ```
pub fn format(input: impl Into<FormatInput>, kind: NumberKind) -> String {
    let value = match input.into() {
        FormatInput::Empty => return String::new(),
        FormatInput::Number(value) => value,
        FormatInput::Text(text) => match try_parse(&text) {
            Some(value) => value,
            None => return String::new(),
        },
    };
    if !value.is_finite() {
        return String::new();
    }

    let decimals = decimals_for(value, kind);
    let rounded = round_half_away(value, decimals);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let number = group_thousands(rounded.abs(), decimals);

    match kind {
        NumberKind::Currency => format!("{}{}{}", sign, CURRENCY_PREFIX, number),
        NumberKind::Quantity => format!("{}{}", sign, number),
        NumberKind::Percentage => format!("{}{}{}", sign, number, PERCENT_SUFFIX),
    }
}

/// Formats a quantity followed by its unit, e.g. `1.200 kg`.
pub fn format_with_unit(input: impl Into<FormatInput>, unit: &str) -> String {
    let number = format(input, NumberKind::Quantity);
    let unit = unit.trim();
    if number.is_empty() || unit.is_empty() {
        return number;
    }
    format!("{} {}", number, unit)
}

/// Text shown while a field is being edited: no grouping, no affixes, `,` as decimal.
/// Zero gives an empty string so typing starts on a clean field.
pub fn to_edit_text(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return String::new();
    }
    // f64's Display is the shortest round-trip form and never uses exponents
    value.to_string().replace('.', ",")
}

fn decimals_for(value: f64, kind: NumberKind) -> usize {
    if value.fract() == 0.0 {
        return 0;
    }
    match kind {
        NumberKind::Percentage => 1,
        NumberKind::Currency | NumberKind::Quantity => 2,
    }
}

fn round_half_away(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // Very large magnitudes overflow the scaling; those have no fractional digits left anyway
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value);
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 4);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{},{}", grouped, fraction),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_whole_and_fractional() {
        assert_eq!(format(1000000.0, NumberKind::Currency), "R$ 1.000.000");
        assert_eq!(format(1000000.5, NumberKind::Currency), "R$ 1.000.000,50");
        assert_eq!(format(19.9, NumberKind::Currency), "R$ 19,90");
        assert_eq!(format(0.0, NumberKind::Currency), "R$ 0");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format(999.0, NumberKind::Quantity), "999");
        assert_eq!(format(1000.0, NumberKind::Quantity), "1.000");
        assert_eq!(format(123456789.0, NumberKind::Quantity), "123.456.789");
        assert_eq!(format(1234.567, NumberKind::Quantity), "1.234,57");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format(12.5, NumberKind::Percentage), "12,5%");
        assert_eq!(format(15.0, NumberKind::Percentage), "15%");
        assert_eq!(format(33.333, NumberKind::Percentage), "33,3%");
        assert_eq!(format(1500.25, NumberKind::Percentage), "1.500,3%");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format(0.125, NumberKind::Quantity), "0,13");
        assert_eq!(format(-0.125, NumberKind::Quantity), "-0,13");
        // Rounding can carry into the integer part
        assert_eq!(format(999.999, NumberKind::Currency), "R$ 1.000,00");
    }

    #[test]
    fn test_format_negative_values() {
        assert_eq!(format(-1234.5, NumberKind::Currency), "-R$ 1.234,50");
        assert_eq!(format(-1234.0, NumberKind::Quantity), "-1.234");
        assert_eq!(format(-2.5, NumberKind::Percentage), "-2,5%");
        // Rounds to zero, so no sign is left
        assert_eq!(format(-0.001, NumberKind::Quantity), "0,00");
    }

    #[test]
    fn test_format_empty_and_invalid_inputs() {
        assert_eq!(format(FormatInput::Empty, NumberKind::Currency), "");
        assert_eq!(format(None::<f64>, NumberKind::Currency), "");
        assert_eq!(format("", NumberKind::Currency), "");
        assert_eq!(format("   ", NumberKind::Quantity), "");
        assert_eq!(format("abc", NumberKind::Quantity), "");
        assert_eq!(format(f64::NAN, NumberKind::Quantity), "");
        assert_eq!(format(f64::INFINITY, NumberKind::Currency), "");
    }

    #[test]
    fn test_format_numeric_text() {
        assert_eq!(format("1.234,5", NumberKind::Currency), "R$ 1.234,50");
        assert_eq!(format("R$ 2.000", NumberKind::Quantity), "2.000");
        assert_eq!(format(String::from("7,25"), NumberKind::Percentage), "7,3%");
    }

    #[test]
    fn test_format_with_unit() {
        assert_eq!(format_with_unit(1200.0, "kg"), "1.200 kg");
        assert_eq!(format_with_unit(2.5, " un "), "2,50 un");
        assert_eq!(format_with_unit(1200.0, ""), "1.200");
        assert_eq!(format_with_unit("x", "kg"), "");
    }

    #[test]
    fn test_to_edit_text() {
        assert_eq!(to_edit_text(1234.5), "1234,5");
        assert_eq!(to_edit_text(1000000.0), "1000000");
        assert_eq!(to_edit_text(0.0), "");
        assert_eq!(to_edit_text(f64::NAN), "");
    }
}
