//! Numeric helpers shared by the operations
//!
//! Sanitization, lenient parsing and the textual rendering of results.

use crate::handler::OperationError;

/// First code point of every Unicode decimal digit run (`0`..`9` each)
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E950, 0x1FBF0,
];

/// ASCII equivalent of a decimal digit in any script
pub fn decimal_digit(c: char) -> Option<char> {
    let code = u32::from(c);
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .and_then(|&zero| char::from_digit(code - zero, 10))
}

/// Keep only decimal digits and decimal points
///
/// Digits from any script are normalized to ASCII. Signs, units and
/// whitespace are discarded; repeated points are kept and left for
/// [`parse_number`] to reject.
pub fn sanitize_numeric(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| if c == '.' { Some(c) } else { decimal_digit(c) })
        .collect()
}

/// Parse a floating point value, ignoring surrounding whitespace
///
/// Digits from any script are accepted, and single underscores may group
/// digits (`1_000`).
pub fn parse_number(raw: &str) -> Result<f64, OperationError> {
    let chars: Vec<char> = raw
        .trim()
        .chars()
        .map(|c| decimal_digit(c).unwrap_or(c))
        .collect();

    let mut cleaned = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let grouped = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(char::is_ascii_digit);
            if !grouped {
                return Err(OperationError::InvalidInput);
            }
            continue;
        }
        cleaned.push(c);
    }

    cleaned
        .parse::<f64>()
        .map_err(|_| OperationError::InvalidInput)
}

/// Render a number for a response line
///
/// Integral values keep one decimal (`77.0`), other values use the shortest
/// round-trip digits, and magnitudes outside `[1e-4, 1e16)` switch to
/// scientific notation with a signed, two-digit exponent (`1e+16`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .map_or((scientific.as_str(), 0), |(m, e)| {
            (m, e.parse::<i32>().unwrap_or(0))
        });

    if (-4..16).contains(&exponent) {
        let mut plain = value.to_string();
        if !plain.contains('.') {
            plain.push_str(".0");
        }
        plain
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_numeric("25"), "25");
        assert_eq!(sanitize_numeric(" 25°C "), "25");
        assert_eq!(sanitize_numeric("abc"), "");
        assert_eq!(sanitize_numeric("-3.5"), "3.5");
        assert_eq!(sanitize_numeric("1.2.3"), "1.2.3");
    }

    #[test]
    fn test_sanitize_other_scripts() {
        assert_eq!(sanitize_numeric("١٢"), "12");
        assert_eq!(sanitize_numeric("४२.५"), "42.5");
        assert_eq!(sanitize_numeric("１０"), "10");
        assert_eq!(sanitize_numeric("½"), "");
    }

    #[test]
    fn test_decimal_digit() {
        assert_eq!(decimal_digit('7'), Some('7'));
        assert_eq!(decimal_digit('٩'), Some('9'));
        assert_eq!(decimal_digit('a'), None);
        assert_eq!(decimal_digit('.'), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("10").unwrap(), 10.0);
        assert_eq!(parse_number(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
        assert_eq!(parse_number(""), Err(OperationError::InvalidInput));
        assert_eq!(parse_number("1.2.3"), Err(OperationError::InvalidInput));
        assert_eq!(parse_number("diez"), Err(OperationError::InvalidInput));
    }

    #[test]
    fn test_parse_number_underscores() {
        assert_eq!(parse_number("1_000").unwrap(), 1000.0);
        assert_eq!(parse_number("1_0.2_5").unwrap(), 10.25);
        assert_eq!(parse_number("_1"), Err(OperationError::InvalidInput));
        assert_eq!(parse_number("1_"), Err(OperationError::InvalidInput));
        assert_eq!(parse_number("1__0"), Err(OperationError::InvalidInput));
    }

    #[test]
    fn test_parse_number_other_scripts() {
        assert_eq!(parse_number("١٢").unwrap(), 12.0);
    }

    #[test]
    fn test_format_integral_values() {
        assert_eq!(format_number(25.0), "25.0");
        assert_eq!(format_number(77.0), "77.0");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
        assert_eq!(format_number(-12.0), "-12.0");
    }

    #[test]
    fn test_format_fractional_values() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1.5e20), "1.5e+20");
        assert_eq!(format_number(0.00001), "1e-05");
        assert_eq!(format_number(-2.5e-7), "-2.5e-07");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }
}
