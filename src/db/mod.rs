//! Database module
//!
//! SQLite connection, migrations, demo data and the store the nutrition
//! pipeline reads from.

pub mod connection;
pub mod migrations;
pub mod seed;
pub mod store;

pub use connection::{Database, DbError, DbResult};
pub use store::SqliteStore;
