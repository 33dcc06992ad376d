//! Status Tool
//!
//! Runtime status of the nutrition service.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::db::{migrations, Database, DbResult};
use crate::models::{Ingredient, IngredientPortion, Recipe};

/// Usage notes for AI assistants
pub const NUTRITION_INSTRUCTIONS: &str = r#"
# Recipe Nutrition Instructions

## Computing nutrition

Call `calculate_recipe_nutrition` with a `recipe_id`. The result holds:
- `total`: nutrients for the whole recipe
- `perServing`: `total` divided by `servings` (a missing yield counts as 1)
- `ingredientsProcessed`: lines that contributed
- `ingredientsSkipped`: one message per line that was left out

Every vector has the same 25 keys. Values are per the whole amount used,
derived from per-100 g reference data.

## Why an ingredient is skipped

1. The ingredient has no nutrition data.
2. Its quantity and unit resolve to 0 g:
   - quantity is empty, zero or unreadable ("a few")
   - the unit is negligible: pinch, dash, smidgen, drop, "to taste", "as needed"
   - the unit is a count-style unit ("slice", "large") with no portion
     recorded for that ingredient

## How grams are worked out

1. Weight units (g, kg, oz, lb) convert directly.
2. Otherwise an ingredient-specific portion is used if one exists
   (e.g. 1 cup flour = 125 g).
3. Otherwise volume units (cup, tbsp, tsp, ml, l, floz) use water density,
   1 ml = 1 g. This is approximate for anything that is not water-like.

Use `convert_to_grams` to see which rule applied to a line and
`parse_quantity` to check how a quantity string is read
("2-3" = 2.5, "1 1/2" = 1.5).
"#;

/// Status response
#[derive(Debug, Clone, Serialize)]
pub struct NutritionStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub schema_current: bool,
    pub ingredient_count: i64,
    pub portion_count: i64,
    pub recipe_count: i64,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Tracks process start and reports status
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            database_path,
        }
    }

    /// Get the current status
    pub fn get_status(&self, database: &Database) -> DbResult<NutritionStatus> {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let (schema_current, ingredient_count, portion_count, recipe_count) =
            database.with_conn(|conn| {
                Ok((
                    migrations::is_current(conn)?,
                    Ingredient::count(conn)?,
                    IngredientPortion::count(conn)?,
                    Recipe::count(conn)?,
                ))
            })?;

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        Ok(NutritionStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            schema_current,
            ingredient_count,
            portion_count,
            recipe_count,
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_rows() {
        let database = Database::in_memory().unwrap();
        database.with_conn(migrations::run_migrations).unwrap();
        database
            .with_conn_mut(|conn| crate::db::seed::seed_demo_data(conn))
            .unwrap();

        let tracker = StatusTracker::new(PathBuf::from(":memory:"));
        let status = tracker.get_status(&database).unwrap();
        assert!(status.schema_current);
        assert_eq!(status.ingredient_count, 8);
        assert_eq!(status.recipe_count, 2);
        assert!(status.portion_count > 0);
        assert_eq!(status.database_size_bytes, None);
    }
}
