//! Numeric text normalization.
//!
//! Price and quantity fields are typed by hand, in whatever locale the user
//! happens to think in. [`normalize`] turns that into a canonical decimal string
//! made only of ASCII digits and at most one `.`.
//!
//! ## Rules
//!
//! 1. Comma unification: when the input has no `.`, every `,` is the decimal
//!    separator (`"1,5"` → `"1.5"`). When a `.` is present, commas are thousands
//!    separators and are dropped (`"1,234.5"` → `"1234.5"`).
//! 2. Everything that is not a digit or `.` is stripped.
//! 3. With two or more periods, only the first survives; the digits around the
//!    later ones are kept and joined (`"1.2.3"` → `"1.23"`).
//!
//! The function is total and idempotent: its output contains no commas and at
//! most one period, so a second pass changes nothing.
//!
//! `normalize` drops signs along with every other symbol. Code that needs the
//! numeric value (validation, quantities read from text) goes through
//! [`parse_number`], which keeps a leading minus.

const DECIMAL_POINT: char = '.';
const COMMA: char = ',';

/// Sanitizes free-text numeric input into a canonical decimal string.
///
/// # Examples
/// ```
/// use curio::normalize::normalize;
///
/// assert_eq!(normalize("1,234.5.6"), "1234.56");
/// assert_eq!(normalize("12,5"), "12.5");
/// assert_eq!(normalize("€ 40"), "40");
/// assert_eq!(normalize("abc"), "");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let comma_is_decimal = !raw.contains(DECIMAL_POINT);
    let cleaned: String = raw
        .chars()
        .filter_map(|c| match c {
            COMMA if comma_is_decimal => Some(DECIMAL_POINT),
            c if c.is_ascii_digit() || c == DECIMAL_POINT => Some(c),
            _ => None,
        })
        .collect();

    match cleaned.find(DECIMAL_POINT) {
        Some(first) if cleaned[first + 1..].contains(DECIMAL_POINT) => {
            let (head, tail) = cleaned.split_at(first + 1);
            let mut result = head.to_string();
            result.extend(tail.chars().filter(|c| *c != DECIMAL_POINT));
            result
        }
        _ => cleaned,
    }
}

/// Parses free-text numeric input into a value, keeping its sign.
///
/// The input is negative when the first character that can belong to a number
/// (a digit, separator or `-`) is a minus, so `"-5"` and `"$-40"` are negative
/// while `"5-"` is not. The rest goes through [`normalize`]. Returns `None`
/// when no number is left.
///
/// ```
/// use curio::normalize::parse_number;
///
/// assert_eq!(parse_number("-5"), Some(-5.0));
/// assert_eq!(parse_number("1,5"), Some(1.5));
/// assert_eq!(parse_number("lots"), None);
/// ```
pub fn parse_number(raw: &str) -> Option<f64> {
    let negative = raw
        .chars()
        .find(|c| c.is_ascii_digit() || matches!(*c, DECIMAL_POINT | COMMA | '-'))
        == Some('-');
    let magnitude: f64 = normalize(raw).parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
