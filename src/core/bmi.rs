//! BMI computation and health-category classification.

use thiserror::Error;

/// Heights above this value are assumed to be centimeters.
pub const CENTIMETERS_THRESHOLD: f64 = 3.0;

/// Error raised when a parsed measurement is out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Weight must be > 0")]
    NonPositiveWeight,
    #[error("Height must be > 0")]
    NonPositiveHeight,
}

/// Health category derived from a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    /// Classify a BMI value. Bins are left-inclusive, contiguous, and
    /// cover all non-negative reals.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Category::Underweight
        } else if bmi < 25.0 {
            Category::Normal
        } else if bmi < 30.0 {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    /// Display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }
}

/// A computed BMI together with its category. The two are derived as one
/// unit and never displayed independently of each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: Category,
}

/// Interpret a raw height reading. Values above [`CENTIMETERS_THRESHOLD`]
/// are taken to be centimeters and converted to meters; everything else is
/// assumed to be meters already.
///
/// This is a magnitude heuristic, not a unit tag: a genuine height above
/// 3 m would be misread. Accepted approximation.
pub fn normalize_height(height: f64) -> f64 {
    if height > CENTIMETERS_THRESHOLD {
        height / 100.0
    } else {
        height
    }
}

/// Compute `weight / height²` and classify it.
///
/// Height is checked before weight, so input with both out of range
/// reports the height problem.
pub fn compute(weight_kg: f64, height_m: f64) -> Result<BmiReading, ValidationError> {
    if height_m <= 0.0 {
        return Err(ValidationError::NonPositiveHeight);
    }
    if weight_kg <= 0.0 {
        return Err(ValidationError::NonPositiveWeight);
    }

    let bmi = weight_kg / (height_m * height_m);
    Ok(BmiReading {
        bmi,
        category: Category::from_bmi(bmi),
    })
}
