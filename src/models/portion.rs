//! Ingredient portion model
//!
//! Reference gram weights for a named unit of a specific ingredient
//! (e.g. 1 cup of flour = 125 g, 1 large egg = 50 g).

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::ValidationError;
use crate::db::{DbError, DbResult};
use crate::nutrition::normalize_unit;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientPortion {
    pub id: i64,
    pub ingredient_id: i64,
    /// Always stored in normalized form
    pub unit_name: String,
    pub gram_weight: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientPortionCreate {
    pub ingredient_id: i64,
    pub unit_name: String,
    pub gram_weight: f64,
}

impl IngredientPortion {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            ingredient_id: row.get("ingredient_id")?,
            unit_name: row.get("unit_name")?,
            gram_weight: row.get("gram_weight")?,
            created_at: row.get("created_at")?,
        })
    }

    /// Insert or replace the portion for (ingredient, unit)
    pub fn create(conn: &Connection, data: &IngredientPortionCreate) -> DbResult<Self> {
        let unit_name = normalize_unit(&data.unit_name);
        if unit_name.is_empty() {
            return Err(ValidationError::EmptyField("Portion unit").into());
        }
        if !data.gram_weight.is_finite() || data.gram_weight <= 0.0 {
            return Err(ValidationError::InvalidGramWeight(data.gram_weight).into());
        }

        conn.execute(
            r#"
            INSERT INTO ingredient_portions (ingredient_id, unit_name, gram_weight)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(ingredient_id, unit_name) DO UPDATE SET gram_weight = excluded.gram_weight
            "#,
            params![data.ingredient_id, unit_name, data.gram_weight],
        )?;

        conn.query_row(
            "SELECT * FROM ingredient_portions WHERE ingredient_id = ?1 AND unit_name = ?2",
            params![data.ingredient_id, unit_name],
            Self::from_row,
        )
        .map_err(DbError::from)
    }

    /// Gram weight of one `unit_name` of the ingredient, if recorded.
    ///
    /// `unit_name` must already be normalized.
    pub fn get_gram_weight(
        conn: &Connection,
        ingredient_id: i64,
        unit_name: &str,
    ) -> DbResult<Option<f64>> {
        let weight = conn
            .query_row(
                "SELECT gram_weight FROM ingredient_portions WHERE ingredient_id = ?1 AND unit_name = ?2",
                params![ingredient_id, unit_name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(weight)
    }

    pub fn list_for_ingredient(conn: &Connection, ingredient_id: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM ingredient_portions WHERE ingredient_id = ?1 ORDER BY unit_name",
        )?;

        let portions = stmt
            .query_map([ingredient_id], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(portions)
    }

    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM ingredient_portions", [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::models::{Ingredient, IngredientCreate};

    fn setup() -> (Connection, i64) {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let flour = Ingredient::create(
            &conn,
            &IngredientCreate {
                name: "Flour".to_string(),
                nutrition: None,
            },
        )
        .unwrap();
        (conn, flour.id)
    }

    #[test]
    fn test_unit_name_is_normalized_on_insert() {
        let (conn, id) = setup();
        let portion = IngredientPortion::create(
            &conn,
            &IngredientPortionCreate {
                ingredient_id: id,
                unit_name: " Cups".to_string(),
                gram_weight: 125.0,
            },
        )
        .unwrap();

        assert_eq!(portion.unit_name, "cup");
        assert_eq!(
            IngredientPortion::get_gram_weight(&conn, id, "cup").unwrap(),
            Some(125.0)
        );
        assert_eq!(IngredientPortion::get_gram_weight(&conn, id, "tbsp").unwrap(), None);
    }

    #[test]
    fn test_create_replaces_existing_weight() {
        let (conn, id) = setup();
        for weight in [120.0, 130.0] {
            IngredientPortion::create(
                &conn,
                &IngredientPortionCreate {
                    ingredient_id: id,
                    unit_name: "cup".to_string(),
                    gram_weight: weight,
                },
            )
            .unwrap();
        }
        assert_eq!(IngredientPortion::list_for_ingredient(&conn, id).unwrap().len(), 1);
        assert_eq!(
            IngredientPortion::get_gram_weight(&conn, id, "cup").unwrap(),
            Some(130.0)
        );
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let (conn, id) = setup();
        let result = IngredientPortion::create(
            &conn,
            &IngredientPortionCreate {
                ingredient_id: id,
                unit_name: "slice".to_string(),
                gram_weight: 0.0,
            },
        );
        assert!(matches!(
            result,
            Err(DbError::Validation(ValidationError::InvalidGramWeight(_)))
        ));
    }
}
