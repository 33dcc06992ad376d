//! Unit normalization and classification
//!
//! Canonical unit spellings and the fixed conversion tables used by the
//! gram converter.

use serde::Serialize;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

pub const G_PER_KG: f64 = 1000.0;
pub const G_PER_OZ: f64 = 28.35;
pub const G_PER_LB: f64 = 453.59;

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

pub const ML_PER_CUP: f64 = 240.0;
pub const ML_PER_TBSP: f64 = 15.0;
pub const ML_PER_TSP: f64 = 5.0;
pub const ML_PER_LITER: f64 = 1000.0;
pub const ML_PER_FL_OZ: f64 = 29.57;

/// How a unit contributes to a gram weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// g, kg, oz, lb
    Weight,
    /// cup, tbsp, tsp, ml, l, floz
    Volume,
    /// pinch, dash, "to taste"... always 0 g
    Negligible,
    /// Anything else; only resolvable through an ingredient portion
    Portion,
}

/// Canonical short form for a lowercased, trimmed unit
fn canonical_alias(unit: &str) -> Option<&'static str> {
    let canonical = match unit {
        "cups" => "cup",
        "tablespoons" | "tablespoon" => "tbsp",
        "teaspoons" | "teaspoon" => "tsp",
        "grams" | "gram" => "g",
        "kilograms" | "kilogram" => "kg",
        "ounces" | "ounce" => "oz",
        "pounds" | "pound" | "lbs" => "lb",
        "liters" | "liter" | "litres" | "litre" => "l",
        "milliliters" | "milliliter" | "millilitres" | "millilitre" => "ml",
        "fl oz" | "fluid ounce" | "fluid ounces" => "floz",
        _ => return None,
    };
    Some(canonical)
}

/// Lowercase, trim and resolve known aliases. Unknown units pass through.
pub fn normalize_unit(unit: &str) -> String {
    let lower = unit.trim().to_lowercase();
    match canonical_alias(&lower) {
        Some(canonical) => canonical.to_string(),
        None => lower,
    }
}

/// Conversion factor to grams for a weight unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    match normalize_unit(unit).as_str() {
        "g" => Some(1.0),
        "kg" => Some(G_PER_KG),
        "oz" => Some(G_PER_OZ),
        "lb" => Some(G_PER_LB),
        _ => None,
    }
}

/// Conversion factor to milliliters for a volume unit
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    match normalize_unit(unit).as_str() {
        "cup" => Some(ML_PER_CUP),
        "tbsp" => Some(ML_PER_TBSP),
        "tsp" => Some(ML_PER_TSP),
        "ml" => Some(1.0),
        "l" => Some(ML_PER_LITER),
        "floz" => Some(ML_PER_FL_OZ),
        _ => None,
    }
}

pub fn is_weight_unit(unit: &str) -> bool {
    grams_per_unit(unit).is_some()
}

pub fn is_volume_unit(unit: &str) -> bool {
    ml_per_unit(unit).is_some()
}

pub fn is_negligible_unit(unit: &str) -> bool {
    matches!(
        normalize_unit(unit).as_str(),
        "pinch" | "dash" | "smidgen" | "drop" | "to taste" | "as needed"
    )
}

/// Determine the category of a unit string
pub fn categorize_unit(unit: &str) -> UnitCategory {
    if is_negligible_unit(unit) {
        UnitCategory::Negligible
    } else if is_weight_unit(unit) {
        UnitCategory::Weight
    } else if is_volume_unit(unit) {
        UnitCategory::Volume
    } else {
        UnitCategory::Portion
    }
}
