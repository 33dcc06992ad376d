//! Tools module
//!
//! MCP tool implementations for the recipe nutrition service.

pub mod nutrition;
pub mod status;
