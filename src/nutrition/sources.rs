//! Collaborator contracts
//!
//! The engine reads recipe lines and portion weights through these traits and
//! owns no storage of its own.

use async_trait::async_trait;
use thiserror::Error;

use crate::db::DbError;
use crate::models::IngredientWithNutrition;

/// Failure of a collaborator call
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(i64),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Supplies the ingredient lines and yield of a recipe
#[async_trait]
pub trait RecipeIngredientsSource: Send + Sync {
    /// Every ingredient line with its per-100g nutrition (or `None`)
    async fn get_ingredients_with_nutrition(
        &self,
        recipe_id: i64,
    ) -> SourceResult<Vec<IngredientWithNutrition>>;

    /// Servings the recipe yields; `None` when not recorded
    async fn get_servings(&self, recipe_id: i64) -> SourceResult<Option<i64>>;
}

/// Ingredient-specific gram weights for named units
#[async_trait]
pub trait IngredientPortionLookup: Send + Sync {
    async fn get_portion_gram_weight(
        &self,
        ingredient_id: i64,
        normalized_unit: &str,
    ) -> SourceResult<Option<f64>>;
}
