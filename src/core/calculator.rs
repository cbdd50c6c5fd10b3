//! Input interpreter that turns raw form text into a BMI reading.
//!
//! Combines the numeric parser, the height normalizer, and the BMI
//! calculator behind a single operation for the form controller.

use crate::core::bmi::{self, BmiReading, ValidationError};
use crate::core::parser::{parse_number, ParseError};
use thiserror::Error;

/// Union of everything that can go wrong with user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parse both fields, normalize the height, validate, and compute.
///
/// Weight is parsed first, then height. Nothing is mutated on failure;
/// the caller decides how to surface the error.
pub fn evaluate(weight_text: &str, height_text: &str) -> Result<BmiReading, InputError> {
    let weight = parse_number(weight_text)?;
    let height = bmi::normalize_height(parse_number(height_text)?);
    Ok(bmi::compute(weight, height)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bmi::Category;

    #[test]
    fn test_metric_height_in_meters() {
        let reading = evaluate("70", "1.75").unwrap();
        assert!((reading.bmi - 22.857142857).abs() < 1e-6);
        assert_eq!(reading.category, Category::Normal);
    }

    #[test]
    fn test_centimeter_heuristic() {
        let meters = evaluate("70", "1.75").unwrap();
        let centimeters = evaluate("70", "175").unwrap();
        assert!((meters.bmi - centimeters.bmi).abs() < 1e-9);
        assert_eq!(centimeters.category, Category::Normal);
    }

    #[test]
    fn test_light_build_still_normal() {
        let reading = evaluate("50", "1.60").unwrap();
        assert!((reading.bmi - 19.53125).abs() < 1e-9);
        assert_eq!(reading.category, Category::Normal);
    }

    #[test]
    fn test_obese_classification() {
        let reading = evaluate("120", "1.80").unwrap();
        assert!((reading.bmi - 37.037037037).abs() < 1e-6);
        assert_eq!(reading.category, Category::Obese);
    }

    #[test]
    fn test_comma_separator_accepted() {
        let reading = evaluate("70", "1,75").unwrap();
        assert_eq!(reading.category, Category::Normal);
    }

    #[test]
    fn test_unparsable_weight() {
        let err = evaluate("abc", "1.75").unwrap_err();
        assert!(matches!(err, InputError::Parse(_)));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_zero_height() {
        let err = evaluate("70", "0").unwrap_err();
        assert_eq!(
            err,
            InputError::Validation(ValidationError::NonPositiveHeight)
        );
        assert_eq!(err.to_string(), "Height must be > 0");
    }

    #[test]
    fn test_negative_weight() {
        let err = evaluate("-70", "1.75").unwrap_err();
        assert_eq!(
            err,
            InputError::Validation(ValidationError::NonPositiveWeight)
        );
    }
}
