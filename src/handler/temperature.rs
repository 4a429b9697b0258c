//! Unit conversion operation family
//!
//! Celsius to Fahrenheit from a request body that is either a raw number
//! or form data carrying a `temperature` field.

use super::OperationError;
use crate::cgi::{format_number, parse_number, sanitize_numeric, RawInput};
use crate::response::ScriptOutput;

/// `F = C * 9/5 + 32`
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0) + 32.0
}

/// Extract the raw temperature text from a request body
pub fn extract_temperature(body: &str) -> String {
    match RawInput::classify(body.trim()) {
        RawInput::Form(params) => params.get_or("temperature", "").trim().to_string(),
        RawInput::Scalar(raw) => raw.trim().to_string(),
    }
}

/// Sanitize and parse a temperature value in Celsius
pub fn parse_celsius(raw: &str) -> Result<f64, OperationError> {
    let sanitized = sanitize_numeric(raw);
    if sanitized.is_empty() {
        return Err(OperationError::InvalidInput);
    }
    parse_number(&sanitized)
}

/// Run the conversion against a request body
pub fn run(body: &str) -> ScriptOutput {
    let mut output = ScriptOutput::new();
    let line = match parse_celsius(&extract_temperature(body)) {
        Ok(celsius) => format!(
            "{}C equivale a {}F",
            format_number(celsius),
            format_number(celsius_to_fahrenheit(celsius))
        ),
        Err(e) => e.to_string(),
    };
    output.push(line);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion() {
        assert_eq!(celsius_to_fahrenheit(25.0), 77.0);
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    }

    #[test]
    fn test_raw_scalar_body() {
        let output = run("25");
        let line = output.result_line().unwrap();
        assert!(line.contains("25.0C"));
        assert!(line.contains("77.0F"));
        assert_eq!(line, "25.0C equivale a 77.0F");
    }

    #[test]
    fn test_form_body() {
        let output = run("temperature=100");
        assert_eq!(output.result_line(), Some("100.0C equivale a 212.0F"));
    }

    #[test]
    fn test_form_body_without_field() {
        let output = run("grados=100");
        assert_eq!(output.result_line(), Some("Error: Entrada no valida"));
    }

    #[test]
    fn test_non_numeric_input() {
        assert_eq!(parse_celsius("abc"), Err(OperationError::InvalidInput));
        assert_eq!(run("abc").lines(), ["Error: Entrada no valida"]);
        assert_eq!(run("").lines(), ["Error: Entrada no valida"]);
    }

    #[test]
    fn test_sanitized_input() {
        assert_eq!(parse_celsius(" 36.6 C"), Ok(36.6));
        // The sign is not a retained character
        assert_eq!(parse_celsius("-10"), Ok(10.0));
        assert_eq!(parse_celsius("1.2.3"), Err(OperationError::InvalidInput));
    }

    #[test]
    fn test_digits_from_other_scripts() {
        assert_eq!(run("١٢").result_line(), Some("12.0C equivale a 53.6F"));
    }

    #[test]
    fn test_fractional_result() {
        assert_eq!(run("37.5").result_line(), Some("37.5C equivale a 99.5F"));
    }
}
