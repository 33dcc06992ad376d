//! Nutrition MCP Tools
//!
//! Recipe nutrition calculation plus quantity and unit diagnostics.

use serde::Serialize;

use crate::db::SqliteStore;
use crate::models::{IngredientPortion, RecipeNutritionResult};
use crate::nutrition::{
    calculate_recipe_nutrition as run_pipeline, categorize_unit, normalize_unit, parse_quantity,
    resolve_grams, ConversionMethod, SourceError, UnitCategory,
};

/// Response for parse_quantity
#[derive(Debug, Serialize)]
pub struct ParseQuantityResponse {
    pub text: String,
    pub quantity: f64,
}

/// Response for convert_to_grams
#[derive(Debug, Serialize)]
pub struct ConvertToGramsResponse {
    pub ingredient_id: i64,
    pub quantity_text: String,
    pub unit_text: String,
    pub quantity: f64,
    pub normalized_unit: String,
    pub category: UnitCategory,
    pub grams: f64,
    pub method: ConversionMethod,
    /// Portions recorded for the ingredient
    pub known_portions: Vec<IngredientPortion>,
}

/// Compute nutrition for a recipe
pub async fn calculate_recipe_nutrition(
    store: &SqliteStore,
    recipe_id: i64,
) -> Result<RecipeNutritionResult, String> {
    run_pipeline(store, store, recipe_id).await.map_err(|e| match e {
        SourceError::RecipeNotFound(id) => format!("Recipe not found: {}", id),
        other => format!("Failed to calculate nutrition: {}", other),
    })
}

/// Show how a quantity string is read
pub fn parse_quantity_text(text: &str) -> ParseQuantityResponse {
    ParseQuantityResponse {
        text: text.to_string(),
        quantity: parse_quantity(text),
    }
}

/// Show how a quantity and unit resolve to grams for an ingredient
pub async fn convert_to_grams(
    store: &SqliteStore,
    ingredient_id: i64,
    quantity: &str,
    unit: &str,
) -> Result<ConvertToGramsResponse, String> {
    let conversion = resolve_grams(store, ingredient_id, quantity, unit).await;
    let known_portions = store
        .database()
        .with_conn(|conn| IngredientPortion::list_for_ingredient(conn, ingredient_id))
        .map_err(|e| format!("Failed to list portions: {}", e))?;

    Ok(ConvertToGramsResponse {
        ingredient_id,
        quantity_text: quantity.to_string(),
        unit_text: unit.to_string(),
        quantity: parse_quantity(quantity),
        normalized_unit: normalize_unit(unit),
        category: categorize_unit(unit),
        grams: conversion.grams,
        method: conversion.method,
        known_portions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::db::seed::seed_demo_data;
    use crate::db::Database;

    fn seeded() -> (SqliteStore, crate::db::seed::SeedSummary) {
        let database = Database::in_memory().unwrap();
        database.with_conn(run_migrations).unwrap();
        let summary = database.with_conn_mut(|conn| seed_demo_data(conn)).unwrap();
        (SqliteStore::new(database), summary)
    }

    #[test]
    fn test_parse_quantity_text() {
        let response = parse_quantity_text("1 1/2");
        assert_eq!(response.quantity, 1.5);
        assert_eq!(response.text, "1 1/2");
    }

    #[tokio::test]
    async fn test_convert_reports_method() {
        let (store, summary) = seeded();

        let portion = convert_to_grams(&store, summary.flour_id, "2", "Cups").await.unwrap();
        assert_eq!(portion.normalized_unit, "cup");
        assert_eq!(portion.category, UnitCategory::Volume);
        assert_eq!(portion.grams, 250.0);
        assert_eq!(portion.method, ConversionMethod::Portion);
        let units: Vec<&str> = portion
            .known_portions
            .iter()
            .map(|p| p.unit_name.as_str())
            .collect();
        assert_eq!(units, vec!["cup", "tbsp"]);

        let fallback = convert_to_grams(&store, summary.flour_id, "1", "ml").await.unwrap();
        assert_eq!(fallback.method, ConversionMethod::VolumeFallback);
        assert_eq!(fallback.grams, 1.0);
    }

    #[tokio::test]
    async fn test_vinaigrette_uses_range_and_defaults_servings() {
        let (store, summary) = seeded();
        let result = calculate_recipe_nutrition(&store, summary.vinaigrette_id)
            .await
            .unwrap();

        // 2.5 tbsp oil @ 13.5 g, 1 tbsp vinegar @ 15 g (water density)
        let expected = 0.3375 * 884.0 + 0.15 * 19.0;
        assert!((result.total.calories - expected).abs() < 1e-6);
        assert_eq!(result.servings, 1);
        assert_eq!(result.ingredients_processed, 2);
        assert_eq!(result.ingredients_skipped.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_recipe_message() {
        let (store, _) = seeded();
        let err = calculate_recipe_nutrition(&store, 12345).await.unwrap_err();
        assert_eq!(err, "Recipe not found: 12345");
    }
}
