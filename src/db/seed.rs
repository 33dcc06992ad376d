//! Demo reference data
//!
//! Loads a handful of ingredients (USDA-style per-100g values), portions and
//! two recipes through the validating create paths.

use rusqlite::Connection;
use serde::Serialize;

use super::DbResult;
use crate::models::{
    Ingredient, IngredientCreate, IngredientPortion, IngredientPortionCreate, Nutrient,
    NutrientProfile, Recipe, RecipeCreate, RecipeIngredient, RecipeIngredientCreate,
};

/// IDs of the rows created by `seed_demo_data`
#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    pub flour_id: i64,
    pub pancakes_id: i64,
    pub vinaigrette_id: i64,
    pub ingredients_created: usize,
    pub portions_created: usize,
    pub recipes_created: usize,
}

struct IngredientSeed {
    name: &'static str,
    nutrition: Option<&'static [(Nutrient, f64)]>,
    portions: &'static [(&'static str, f64)],
}

const FLOUR: IngredientSeed = IngredientSeed {
    name: "All-purpose flour",
    nutrition: Some(&[
        (Nutrient::Calories, 364.0),
        (Nutrient::Protein, 10.3),
        (Nutrient::Carbohydrates, 76.3),
        (Nutrient::Fiber, 2.7),
        (Nutrient::Sugar, 0.3),
        (Nutrient::TotalFat, 1.0),
        (Nutrient::SaturatedFat, 0.2),
        (Nutrient::Sodium, 2.0),
        (Nutrient::Potassium, 107.0),
        (Nutrient::Calcium, 15.0),
        (Nutrient::Iron, 4.6),
        (Nutrient::Magnesium, 22.0),
        (Nutrient::Zinc, 0.7),
        (Nutrient::Folate, 183.0),
    ]),
    portions: &[("cup", 125.0), ("tbsp", 7.8)],
};

const EGG: IngredientSeed = IngredientSeed {
    name: "Egg, whole, raw",
    nutrition: Some(&[
        (Nutrient::Calories, 143.0),
        (Nutrient::Protein, 12.6),
        (Nutrient::Carbohydrates, 0.7),
        (Nutrient::TotalFat, 9.5),
        (Nutrient::SaturatedFat, 3.1),
        (Nutrient::MonounsatFat, 3.7),
        (Nutrient::PolyunsatFat, 1.9),
        (Nutrient::Cholesterol, 372.0),
        (Nutrient::Sodium, 142.0),
        (Nutrient::VitaminA, 160.0),
        (Nutrient::VitaminD, 2.0),
        (Nutrient::VitaminB12, 0.9),
    ]),
    portions: &[("large", 50.0), ("medium", 44.0), ("piece", 50.0)],
};

const MILK: IngredientSeed = IngredientSeed {
    name: "Milk, whole",
    nutrition: Some(&[
        (Nutrient::Calories, 61.0),
        (Nutrient::Protein, 3.2),
        (Nutrient::Carbohydrates, 4.8),
        (Nutrient::Sugar, 5.1),
        (Nutrient::TotalFat, 3.3),
        (Nutrient::SaturatedFat, 1.9),
        (Nutrient::Cholesterol, 10.0),
        (Nutrient::Sodium, 43.0),
        (Nutrient::Calcium, 113.0),
        (Nutrient::VitaminD, 1.3),
    ]),
    portions: &[],
};

const BUTTER: IngredientSeed = IngredientSeed {
    name: "Butter, salted",
    nutrition: Some(&[
        (Nutrient::Calories, 717.0),
        (Nutrient::Protein, 0.9),
        (Nutrient::TotalFat, 81.1),
        (Nutrient::SaturatedFat, 51.4),
        (Nutrient::TransFat, 3.3),
        (Nutrient::Cholesterol, 215.0),
        (Nutrient::Sodium, 643.0),
        (Nutrient::VitaminA, 684.0),
        (Nutrient::VitaminE, 2.3),
        (Nutrient::VitaminK, 7.0),
    ]),
    portions: &[("tbsp", 14.0), ("cup", 227.0)],
};

const SALT: IngredientSeed = IngredientSeed {
    name: "Salt, table",
    nutrition: Some(&[
        (Nutrient::Calories, 0.0),
        (Nutrient::Sodium, 38758.0),
        (Nutrient::Calcium, 24.0),
    ]),
    portions: &[("tsp", 6.0)],
};

const VANILLA: IngredientSeed = IngredientSeed {
    name: "Vanilla extract",
    nutrition: None,
    portions: &[],
};

const OLIVE_OIL: IngredientSeed = IngredientSeed {
    name: "Olive oil",
    nutrition: Some(&[
        (Nutrient::Calories, 884.0),
        (Nutrient::TotalFat, 100.0),
        (Nutrient::SaturatedFat, 13.8),
        (Nutrient::MonounsatFat, 73.0),
        (Nutrient::PolyunsatFat, 10.5),
        (Nutrient::VitaminE, 14.4),
        (Nutrient::VitaminK, 60.2),
    ]),
    portions: &[("tbsp", 13.5), ("cup", 216.0)],
};

const VINEGAR: IngredientSeed = IngredientSeed {
    name: "Red wine vinegar",
    nutrition: Some(&[
        (Nutrient::Calories, 19.0),
        (Nutrient::Carbohydrates, 0.3),
        (Nutrient::Potassium, 39.0),
    ]),
    portions: &[],
};

fn create_ingredient(conn: &Connection, seed: &IngredientSeed) -> DbResult<i64> {
    let nutrition = match seed.nutrition {
        Some(values) => Some(NutrientProfile::try_from_values(values.iter().copied())?),
        None => None,
    };
    let ingredient = Ingredient::create(
        conn,
        &IngredientCreate {
            name: seed.name.to_string(),
            nutrition,
        },
    )?;

    for (unit_name, gram_weight) in seed.portions {
        IngredientPortion::create(
            conn,
            &IngredientPortionCreate {
                ingredient_id: ingredient.id,
                unit_name: unit_name.to_string(),
                gram_weight: *gram_weight,
            },
        )?;
    }

    Ok(ingredient.id)
}

fn add_lines(conn: &Connection, recipe_id: i64, lines: &[(i64, &str, &str)]) -> DbResult<()> {
    for (ingredient_id, quantity, unit) in lines {
        RecipeIngredient::create(
            conn,
            &RecipeIngredientCreate {
                recipe_id,
                ingredient_id: *ingredient_id,
                quantity: quantity.to_string(),
                unit: unit.to_string(),
            },
        )?;
    }
    Ok(())
}

/// Insert the demo data in a single transaction
pub fn seed_demo_data(conn: &mut Connection) -> DbResult<SeedSummary> {
    let tx = conn.transaction()?;

    let seeds = [
        &FLOUR, &EGG, &MILK, &BUTTER, &SALT, &VANILLA, &OLIVE_OIL, &VINEGAR,
    ];
    let portions_created: usize = seeds.iter().map(|s| s.portions.len()).sum();

    let flour = create_ingredient(&tx, &FLOUR)?;
    let egg = create_ingredient(&tx, &EGG)?;
    let milk = create_ingredient(&tx, &MILK)?;
    let butter = create_ingredient(&tx, &BUTTER)?;
    let salt = create_ingredient(&tx, &SALT)?;
    let vanilla = create_ingredient(&tx, &VANILLA)?;
    let olive_oil = create_ingredient(&tx, &OLIVE_OIL)?;
    let vinegar = create_ingredient(&tx, &VINEGAR)?;

    let pancakes = Recipe::create(
        &tx,
        &RecipeCreate {
            name: "Classic pancakes".to_string(),
            servings: Some(4),
            notes: Some("Serves 4, about 8 small pancakes".to_string()),
        },
    )?;
    add_lines(
        &tx,
        pancakes.id,
        &[
            (flour, "1 1/2", "cups"),
            (egg, "2", "large"),
            (milk, "1 1/4", "cup"),
            (butter, "3", "tablespoons"),
            (salt, "1", "pinch"),
            (vanilla, "1", "tsp"),
        ],
    )?;

    let vinaigrette = Recipe::create(
        &tx,
        &RecipeCreate {
            name: "House vinaigrette".to_string(),
            servings: None,
            notes: None,
        },
    )?;
    add_lines(
        &tx,
        vinaigrette.id,
        &[
            (olive_oil, "2-3", "tbsp"),
            (vinegar, "1", "Tablespoon"),
            (salt, "", "to taste"),
        ],
    )?;

    tx.commit()?;

    tracing::info!(
        "Seeded {} ingredients, {} portions, 2 recipes",
        seeds.len(),
        portions_created
    );

    Ok(SeedSummary {
        flour_id: flour,
        pancakes_id: pancakes.id,
        vinaigrette_id: vinaigrette.id,
        ingredients_created: seeds.len(),
        portions_created,
        recipes_created: 2,
    })
}
