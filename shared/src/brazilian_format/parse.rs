// Reading pt-BR text back into a plain number.
// "." is always taken as a thousands separator and "," as the decimal point,
// whatever the user meant. `sanitize` is what guesses intent while typing.

/// Canonical value of a displayed number; anything without digits reads as `0`.
///
/// ```
/// use shared::brazilian_format::parse;
///
/// assert_eq!(parse("R$ 1.234,56"), 1234.56);
/// assert_eq!(parse("1.234.567"), 1234567.0);
/// assert_eq!(parse("abc"), 0.0);
/// ```
pub fn parse(text: &str) -> f64 {
    try_parse(text).unwrap_or(0.0)
}

/// Same as [`parse`] but tells a missing number apart from zero.
pub fn try_parse(text: &str) -> Option<f64> {
    let normalized: String = text
        .replace("R$", "")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '%' && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    leading_float(&normalized)
}

// Reads the longest `[+-]digits[.digits][e[+-]digits]` prefix, ignoring whatever follows
// (units, stray text). Values that overflow to infinity count as no number.
fn leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let integer = digits_from(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        end += 1 + fraction;
    }
    if integer == 0 && fraction == 0 {
        return None;
    }

    // Exponent only counts when digits follow it ("12e" is just 12)
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
