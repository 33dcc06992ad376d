//! Recipe Ingredient model
//!
//! Links an ingredient to a recipe with the quantity and unit as written
//! by the author ("1 1/2", "cups").

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use super::ingredient::profile_from_row;
use super::{Nutrient, NutrientProfile};
use crate::db::{DbError, DbResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub id: i64,
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub quantity: String,
    pub unit: String,
    pub created_at: String,
}

/// Data for adding an ingredient to a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredientCreate {
    pub recipe_id: i64,
    pub ingredient_id: i64,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

/// One recipe line joined with the ingredient's per-100g nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientWithNutrition {
    pub ingredient_id: i64,
    pub quantity: String,
    pub unit: String,
    pub nutrition: Option<NutrientProfile>,
}

impl RecipeIngredient {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            recipe_id: row.get("recipe_id")?,
            ingredient_id: row.get("ingredient_id")?,
            quantity: row.get("quantity")?,
            unit: row.get("unit")?,
            created_at: row.get("created_at")?,
        })
    }

    /// Add an ingredient to a recipe. Quantity and unit are stored verbatim.
    pub fn create(conn: &Connection, data: &RecipeIngredientCreate) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO recipe_ingredients (recipe_id, ingredient_id, quantity, unit)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![data.recipe_id, data.ingredient_id, data.quantity, data.unit],
        )?;

        let id = conn.last_insert_rowid();
        conn.query_row(
            "SELECT * FROM recipe_ingredients WHERE id = ?1",
            [id],
            Self::from_row,
        )
        .map_err(DbError::from)
    }

    /// Get all ingredient lines for a recipe
    #[cfg(test)]
    pub fn get_for_recipe(conn: &Connection, recipe_id: i64) -> DbResult<Vec<Self>> {
        let mut stmt =
            conn.prepare("SELECT * FROM recipe_ingredients WHERE recipe_id = ?1 ORDER BY id")?;

        let ingredients = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Get every ingredient line of a recipe with its nutrition, if any.
    ///
    /// A nutrition row with no values at all counts as no nutrition.
    pub fn get_with_nutrition_for_recipe(
        conn: &Connection,
        recipe_id: i64,
    ) -> DbResult<Vec<IngredientWithNutrition>> {
        let nutrient_columns = Nutrient::ALL
            .iter()
            .map(|n| format!("n.{}", n.column()))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            r#"
            SELECT ri.ingredient_id, ri.quantity, ri.unit,
                   n.ingredient_id AS nutrition_ingredient_id, {}
            FROM recipe_ingredients ri
            LEFT JOIN ingredient_nutrition n ON n.ingredient_id = ri.ingredient_id
            WHERE ri.recipe_id = ?1
            ORDER BY ri.id
            "#,
            nutrient_columns
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([recipe_id], |row| {
                let has_nutrition = row.get::<_, Option<i64>>("nutrition_ingredient_id")?.is_some();
                Ok(IngredientWithNutrition {
                    ingredient_id: row.get("ingredient_id")?,
                    quantity: row.get("quantity")?,
                    unit: row.get("unit")?,
                    nutrition: if has_nutrition {
                        Some(profile_from_row(row)?).filter(|p| p.present_count() > 0)
                    } else {
                        None
                    },
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}
