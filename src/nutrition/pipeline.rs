//! Recipe nutrition pipeline
//!
//! Converts every ingredient line of a recipe to grams, scales its per-100g
//! nutrition and sums the result. Data-quality problems become skip
//! diagnostics; only collaborator failures return `Err`.

use super::aggregate::{add, create_empty, divide_by_servings, scale};
use super::converter::resolve_grams;
use super::sources::{IngredientPortionLookup, RecipeIngredientsSource, SourceResult};
use crate::models::RecipeNutritionResult;

/// Compute total and per-serving nutrition for a recipe
pub async fn calculate_recipe_nutrition<S, L>(
    source: &S,
    lookup: &L,
    recipe_id: i64,
) -> SourceResult<RecipeNutritionResult>
where
    S: RecipeIngredientsSource + ?Sized,
    L: IngredientPortionLookup + ?Sized,
{
    let ingredients = source.get_ingredients_with_nutrition(recipe_id).await?;
    let servings = source.get_servings(recipe_id).await?.unwrap_or(1);

    let mut total = create_empty();
    let mut processed = 0;
    let mut skipped = Vec::new();

    for item in &ingredients {
        let Some(nutrition) = item.nutrition.as_ref() else {
            tracing::warn!(
                "Recipe {}: ingredient {} has no nutrition data",
                recipe_id,
                item.ingredient_id
            );
            skipped.push(format!("Ingredient {}: no nutrition data", item.ingredient_id));
            continue;
        };

        let conversion =
            resolve_grams(lookup, item.ingredient_id, &item.quantity, &item.unit).await;
        if conversion.grams <= 0.0 {
            tracing::warn!(
                "Recipe {}: ingredient {} skipped, '{}' '{}' resolved to 0 g ({:?})",
                recipe_id,
                item.ingredient_id,
                item.quantity,
                item.unit,
                conversion.method
            );
            skipped.push(format!(
                "Ingredient {}: could not convert '{}' '{}' to grams",
                item.ingredient_id, item.quantity, item.unit
            ));
            continue;
        }

        // Source nutrition is per 100 g
        let scale_factor = conversion.grams / 100.0;
        total = add(&total, &scale(nutrition, scale_factor));
        processed += 1;

        tracing::debug!(
            "Recipe {}: ingredient {} = {:.2} g via {:?}",
            recipe_id,
            item.ingredient_id,
            conversion.grams,
            conversion.method
        );
    }

    let per_serving = divide_by_servings(&total, servings);

    tracing::info!(
        "Recipe {}: {} ingredients processed, {} skipped, {:.1} kcal total",
        recipe_id,
        processed,
        skipped.len(),
        total.calories
    );

    Ok(RecipeNutritionResult {
        per_serving,
        total,
        servings,
        ingredients_processed: processed,
        ingredients_skipped: skipped,
    })
}
