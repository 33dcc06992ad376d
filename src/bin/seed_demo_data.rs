//! Load demo ingredients, portions and recipes
//! Usage: cargo run --bin seed_demo_data

use recipe_nutrition::config;
use recipe_nutrition::db::{migrations, seed, Database};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init_logging()?;

    let db_path = config::database_path();
    println!("Database: {}", db_path.display());

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = Database::new(&db_path)?;
    database.with_conn(migrations::run_migrations)?;

    let summary = database.with_conn_mut(|conn| seed::seed_demo_data(conn))?;

    println!(
        "Created {} ingredients, {} portions, {} recipes",
        summary.ingredients_created, summary.portions_created, summary.recipes_created
    );
    println!("Pancakes recipe id: {}", summary.pancakes_id);
    println!("Vinaigrette recipe id: {}", summary.vinaigrette_id);

    Ok(())
}
