//! Free-form numeric input parsing.
//!
//! Extracts the first signed decimal number from arbitrary user text,
//! accepting both `.` and `,` as decimal separators.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Compiled regex pattern (lazy initialized for performance)
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[-+]?\d*\.?\d+").unwrap()
});

/// Error raised when no number can be extracted from the input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Couldn't parse a number from '{input}'")]
pub struct ParseError {
    /// The raw text as the user typed it.
    pub input: String,
}

/// Extract the first signed decimal number from `text`.
///
/// Commas are treated as decimal separators ("1,75" reads as 1.75) and
/// surrounding non-numeric text is ignored ("175 cm" reads as 175.0).
/// Empty input and input without digits fail with [`ParseError`].
pub fn parse_number(text: &str) -> Result<f64, ParseError> {
    let normalized = text.trim().replace(',', ".");

    let found = NUMBER_REGEX.find(&normalized).ok_or_else(|| ParseError {
        input: text.to_string(),
    })?;

    found.as_str().parse::<f64>().map_err(|_| ParseError {
        input: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_number("70").unwrap(), 70.0);
    }

    #[test]
    fn test_decimal_point() {
        assert_eq!(parse_number("1.75").unwrap(), 1.75);
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_number("1,75").unwrap(), 1.75);
    }

    #[test]
    fn test_surrounding_text_ignored() {
        assert_eq!(parse_number("175 cm").unwrap(), 175.0);
        assert_eq!(parse_number("about 62.5 kg").unwrap(), 62.5);
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(parse_number("-5").unwrap(), -5.0);
        assert_eq!(parse_number("+0.5").unwrap(), 0.5);
    }

    #[test]
    fn test_leading_separator() {
        assert_eq!(parse_number(",5").unwrap(), 0.5);
    }

    #[test]
    fn test_first_number_wins() {
        assert_eq!(parse_number("1.2.3").unwrap(), 1.2);
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(parse_number("").is_err());
        assert!(parse_number("   ").is_err());
    }

    #[test]
    fn test_no_digits_fails() {
        assert!(parse_number("abc").is_err());
    }

    #[test]
    fn test_error_message_cites_raw_input() {
        let err = parse_number("abc").unwrap_err();
        assert_eq!(err.to_string(), "Couldn't parse a number from 'abc'");
    }
}
