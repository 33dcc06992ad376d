//! Recipe Nutrition Engine Library
//!
//! Converts written ingredient quantities to grams and aggregates per-recipe
//! and per-serving nutrient profiles.

pub mod build_info;
pub mod config;
pub mod db;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
