//! Print the nutrition of a recipe as JSON
//! Usage: cargo run --bin nutrition_report -- <recipe_id>

use recipe_nutrition::db::{migrations, Database, SqliteStore};
use recipe_nutrition::{config, nutrition};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init_logging()?;

    let args: Vec<String> = std::env::args().collect();
    let recipe_id: i64 = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => {
            eprintln!("Usage: nutrition_report <recipe_id>");
            std::process::exit(2);
        }
    };

    let db_path = config::database_path();
    eprintln!("Database: {}", db_path.display());

    let database = Database::new(&db_path)?;
    database.with_conn(migrations::run_migrations)?;

    let store = SqliteStore::new(database);
    let result = nutrition::calculate_recipe_nutrition(&store, &store, recipe_id).await?;

    for skipped in &result.ingredients_skipped {
        eprintln!("  skipped: {}", skipped);
    }
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
