//! Validation errors for new reference data

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Invalid value {value} for nutrient '{nutrient}' (must be finite and non-negative)")]
    InvalidNutrientValue { nutrient: &'static str, value: f64 },

    #[error("Portion gram weight must be a positive number, got {0}")]
    InvalidGramWeight(f64),

    #[error("servings must be greater than 0, got {0}")]
    InvalidServings(i64),
}
