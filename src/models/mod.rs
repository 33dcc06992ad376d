//! Data models
//!
//! Rust structs representing database entities and nutrient data.

mod ingredient;
mod nutrition;
mod portion;
mod recipe;
mod recipe_ingredient;
mod validation;

pub use ingredient::{Ingredient, IngredientCreate};
pub use nutrition::{
    Nutrient, NutrientProfile, NutrientValues, NutrientVector, RecipeNutritionResult,
    NUTRIENT_COUNT,
};
pub use portion::{IngredientPortion, IngredientPortionCreate};
pub use recipe::{Recipe, RecipeCreate};
pub use recipe_ingredient::{IngredientWithNutrition, RecipeIngredient, RecipeIngredientCreate};
pub use validation::ValidationError;
