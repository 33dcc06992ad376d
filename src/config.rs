//! Runtime configuration
//!
//! Settings come from the environment:
//! - `RECIPE_NUTRITION_DATABASE_PATH`: SQLite file (default `data/recipe_nutrition.db`
//!   under the project root)
//! - `RUST_LOG`: extra tracing directives

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

pub const DATABASE_PATH_ENV: &str = "RECIPE_NUTRITION_DATABASE_PATH";

/// Directive always added on top of `RUST_LOG`
pub const DEFAULT_LOG_DIRECTIVE: &str = "recipe_nutrition=info";

/// Get the database path from environment or use default
pub fn database_path() -> PathBuf {
    std::env::var(DATABASE_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_database_path())
}

fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path.push("recipe_nutrition.db");
    path
}

/// Initialize logging on stderr (stdout carries the MCP transport)
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_database_file() {
        let path = default_database_path();
        assert!(path.ends_with("data/recipe_nutrition.db"));
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(DEFAULT_LOG_DIRECTIVE
            .parse::<tracing_subscriber::filter::Directive>()
            .is_ok());
    }
}
