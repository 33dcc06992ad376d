//! Nutrition calculation module
//!
//! Quantity parsing, unit conversion to grams, nutrient aggregation and the
//! per-recipe pipeline.

pub mod aggregate;
pub mod converter;
pub mod pipeline;
pub mod quantity;
pub mod sources;
pub mod units;

pub use aggregate::{add, create_empty, divide_by_servings, scale};
pub use converter::{convert_to_grams, resolve_grams, ConversionMethod, GramConversion};
pub use pipeline::calculate_recipe_nutrition;
pub use quantity::parse_quantity;
pub use sources::{IngredientPortionLookup, RecipeIngredientsSource, SourceError, SourceResult};
pub use units::{
    categorize_unit, grams_per_unit, is_negligible_unit, is_volume_unit, is_weight_unit,
    ml_per_unit, normalize_unit, UnitCategory,
};
