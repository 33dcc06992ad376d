//! SQLite-backed collaborators
//!
//! Serves recipe lines and portion weights to the nutrition pipeline.

use async_trait::async_trait;

use super::Database;
use crate::models::{IngredientPortion, IngredientWithNutrition, Recipe, RecipeIngredient};
use crate::nutrition::{
    IngredientPortionLookup, RecipeIngredientsSource, SourceError, SourceResult,
};

#[derive(Clone)]
pub struct SqliteStore {
    database: Database,
}

impl SqliteStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}

#[async_trait]
impl RecipeIngredientsSource for SqliteStore {
    async fn get_ingredients_with_nutrition(
        &self,
        recipe_id: i64,
    ) -> SourceResult<Vec<IngredientWithNutrition>> {
        let lines = self
            .database
            .with_conn(|conn| RecipeIngredient::get_with_nutrition_for_recipe(conn, recipe_id))?;
        Ok(lines)
    }

    async fn get_servings(&self, recipe_id: i64) -> SourceResult<Option<i64>> {
        let recipe = self
            .database
            .with_conn(|conn| Recipe::get_by_id(conn, recipe_id))?
            .ok_or(SourceError::RecipeNotFound(recipe_id))?;
        Ok(recipe.servings)
    }
}

#[async_trait]
impl IngredientPortionLookup for SqliteStore {
    async fn get_portion_gram_weight(
        &self,
        ingredient_id: i64,
        normalized_unit: &str,
    ) -> SourceResult<Option<f64>> {
        let weight = self.database.with_conn(|conn| {
            IngredientPortion::get_gram_weight(conn, ingredient_id, normalized_unit)
        })?;
        Ok(weight)
    }
}
