// Brazilian (pt-BR) number handling: "1.234,56" style display strings and the plain f64
// values behind them. Three pure operations:
// - `format`: canonical value -> display string ("R$ 1.234,56", "12,5%")
// - `parse`: display string -> canonical value (lossy, "." is always thousands)
// - `sanitize`: raw keystrokes -> edit string with at most one "," decimal separator
mod format;
mod parse;
mod policy;
mod sanitize;

pub use format::{format, format_with_unit, to_edit_text};
pub use parse::{parse, try_parse};
pub use policy::{SeparatorPolicy, ThreeDigitGroupRule};
pub use sanitize::{sanitize, sanitize_with};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NumberKind;

    #[test]
    fn test_quantity_round_trip_for_integers() {
        let samples = (0..2_000u64)
            .chain([9_999, 10_000, 99_999, 100_000, 999_999, 1_000_000, 123_456_789, 9_007_199_254_740_991]);
        for n in samples {
            let value = n as f64;
            assert_eq!(parse(&format(value, NumberKind::Quantity)), value, "round trip failed for {}", n);
        }
    }

    #[test]
    fn test_currency_round_trip_for_cents() {
        for cents in (0..200_000u64).step_by(7).chain([100_000_050, 123_456_789_01]) {
            let value = format!("{}.{:02}", cents / 100, cents % 100).parse::<f64>().unwrap();
            let text = format(value, NumberKind::Currency);
            assert_eq!(parse(&text), value, "round trip failed for {} ({})", value, text);
        }
    }

    #[test]
    fn test_documented_values() {
        assert_eq!(format(1000000.0, NumberKind::Currency), "R$ 1.000.000");
        assert_eq!(format(1000000.5, NumberKind::Currency), "R$ 1.000.000,50");
        assert_eq!(parse("R$ 1.234,56"), 1234.56);
        assert_eq!(parse("1.234.567"), 1234567.0);
    }

    #[test]
    fn test_display_string_round_trip() {
        for text in ["R$ 1.234,56", "R$ 1.000.000", "12,5%", "1.234"] {
            let kind = if text.starts_with("R$") {
                NumberKind::Currency
            } else if text.ends_with('%') {
                NumberKind::Percentage
            } else {
                NumberKind::Quantity
            };
            assert_eq!(format(parse(text), kind), text);
        }
    }
}
