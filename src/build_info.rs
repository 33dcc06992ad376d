//! Build information
//!
//! Compile-time build number and timestamp, written by `build.rs`.

use serde::Serialize;

use crate::db::migrations::SCHEMA_VERSION;
use crate::models::NUTRIENT_COUNT;

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("RECIPE_NUTRITION_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("RECIPE_NUTRITION_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// What this binary was built from and what it computes
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub schema_version: i32,
    pub nutrient_count: usize,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            schema_version: SCHEMA_VERSION,
            nutrient_count: NUTRIENT_COUNT,
        }
    }

    pub fn banner(&self) -> String {
        let rule = "=".repeat(47);
        [
            rule.clone(),
            format!("  {} {} (build {})", self.name, self.version, self.build_number),
            format!("  Compiled: {}", self.build_timestamp),
            format!(
                "  Schema v{} | {} nutrients per profile",
                self.schema_version, self.nutrient_count
            ),
            rule,
        ]
        .join("\n")
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("{}", BuildInfo::current().banner());
}
