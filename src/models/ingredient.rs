//! Ingredient model
//!
//! An ingredient with optional per-100g nutrition.

use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use serde::{Deserialize, Serialize};

use super::{Nutrient, NutrientProfile, ValidationError, NUTRIENT_COUNT};
use crate::db::{DbError, DbResult};

/// An ingredient as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    /// Per-100g nutrition, `None` when no data has been recorded
    pub nutrition: Option<NutrientProfile>,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for creating a new ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub name: String,
    #[serde(default)]
    pub nutrition: Option<NutrientProfile>,
}

impl Ingredient {
    fn from_row(row: &Row, nutrition: Option<NutrientProfile>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            nutrition,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Insert a new ingredient, validating name and nutrition first
    pub fn create(conn: &Connection, data: &IngredientCreate) -> DbResult<Self> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("Ingredient name").into());
        }
        if let Some(ref nutrition) = data.nutrition {
            nutrition.validate()?;
        }

        conn.execute("INSERT INTO ingredients (name) VALUES (?1)", params![name])?;
        let id = conn.last_insert_rowid();

        if let Some(ref nutrition) = data.nutrition {
            Self::set_nutrition(conn, id, nutrition)?;
        }

        Self::get_by_id(conn, id)?
            .ok_or_else(|| DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    /// Get an ingredient by ID, including its nutrition
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let nutrition = Self::get_nutrition(conn, id)?;
        let mut stmt = conn.prepare("SELECT * FROM ingredients WHERE id = ?1")?;

        let result = stmt.query_row([id], |row| Self::from_row(row, nutrition.clone()));
        match result {
            Ok(item) => Ok(Some(item)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Load the stored per-100g nutrition for an ingredient
    pub fn get_nutrition(
        conn: &Connection,
        ingredient_id: i64,
    ) -> DbResult<Option<NutrientProfile>> {
        let profile = conn
            .query_row(
                "SELECT * FROM ingredient_nutrition WHERE ingredient_id = ?1",
                [ingredient_id],
                profile_from_row,
            )
            .optional()?;
        Ok(profile)
    }

    /// Insert or replace the per-100g nutrition for an ingredient
    pub fn set_nutrition(
        conn: &Connection,
        ingredient_id: i64,
        nutrition: &NutrientProfile,
    ) -> DbResult<()> {
        nutrition.validate()?;

        let columns = Nutrient::ALL
            .iter()
            .map(|n| n.column())
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (2..=NUTRIENT_COUNT + 1)
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT OR REPLACE INTO ingredient_nutrition (ingredient_id, {}) VALUES (?1, {})",
            columns, placeholders
        );

        let mut params_vec: Vec<Box<dyn ToSql>> = Vec::with_capacity(NUTRIENT_COUNT + 1);
        params_vec.push(Box::new(ingredient_id));
        for nutrient in Nutrient::ALL {
            params_vec.push(Box::new(nutrition.get(nutrient)));
        }

        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();
        conn.execute(&sql, params_refs.as_slice())?;
        conn.execute(
            "UPDATE ingredients SET updated_at = datetime('now') WHERE id = ?1",
            [ingredient_id],
        )?;
        Ok(())
    }

    /// Count all ingredients
    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM ingredients", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Read the nutrient columns of a row.
///
/// Rows were validated on insert, so this takes the trusted route.
pub(crate) fn profile_from_row(row: &Row) -> rusqlite::Result<NutrientProfile> {
    let mut values = Vec::with_capacity(NUTRIENT_COUNT);
    for nutrient in Nutrient::ALL {
        values.push((nutrient, row.get::<_, Option<f64>>(nutrient.column())?));
    }
    Ok(NutrientProfile::from_trusted_values(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_create_with_nutrition_round_trips_absent_fields() {
        let conn = conn();
        let nutrition = NutrientProfile::try_from_values([
            (Nutrient::Calories, 364.0),
            (Nutrient::Protein, 10.3),
        ])
        .unwrap();

        let created = Ingredient::create(
            &conn,
            &IngredientCreate {
                name: "  Flour ".to_string(),
                nutrition: Some(nutrition),
            },
        )
        .unwrap();

        assert_eq!(created.name, "Flour");
        let stored = created.nutrition.unwrap();
        assert_eq!(stored.calories, Some(364.0));
        assert_eq!(stored.protein, Some(10.3));
        assert_eq!(stored.folate, None);
    }

    #[test]
    fn test_create_without_nutrition() {
        let conn = conn();
        let created = Ingredient::create(
            &conn,
            &IngredientCreate {
                name: "Mystery spice".to_string(),
                nutrition: None,
            },
        )
        .unwrap();
        assert!(created.nutrition.is_none());
        assert_eq!(Ingredient::count(&conn).unwrap(), 1);
    }

    #[test]
    fn test_create_rejects_invalid_data() {
        let conn = conn();
        let empty = Ingredient::create(
            &conn,
            &IngredientCreate {
                name: "   ".to_string(),
                nutrition: None,
            },
        );
        assert!(matches!(empty, Err(DbError::Validation(ValidationError::EmptyField(_)))));

        let negative = Ingredient::create(
            &conn,
            &IngredientCreate {
                name: "Salt".to_string(),
                nutrition: Some(NutrientProfile {
                    sodium: Some(-5.0),
                    ..Default::default()
                }),
            },
        );
        assert!(matches!(negative, Err(DbError::Validation(_))));
        assert_eq!(Ingredient::count(&conn).unwrap(), 0);
    }

    #[test]
    fn test_get_missing_ingredient() {
        let conn = conn();
        assert!(Ingredient::get_by_id(&conn, 99).unwrap().is_none());
    }
}
