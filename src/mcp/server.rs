//! Recipe Nutrition MCP Server Implementation
//!
//! Implements the MCP server with the nutrition tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::db::{Database, SqliteStore};
use crate::tools::nutrition;
use crate::tools::status::{StatusTracker, NUTRITION_INSTRUCTIONS};

/// Recipe Nutrition MCP Service
#[derive(Clone)]
pub struct NutritionService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    store: SqliteStore,
    tool_router: ToolRouter<NutritionService>,
}

impl NutritionService {
    pub fn new(database_path: PathBuf, database: Database) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path))),
            store: SqliteStore::new(database),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateRecipeNutritionParams {
    /// Recipe ID
    pub recipe_id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseQuantityParams {
    /// Quantity as written, e.g. "2", "1 1/2", "1/4", "2-3"
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertToGramsParams {
    /// Ingredient ID (used for portion lookup)
    pub ingredient_id: i64,
    /// Quantity as written
    pub quantity: String,
    /// Unit as written, e.g. "cups", "tbsp", "g", "large"
    #[serde(default)]
    pub unit: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutritionService {
    #[tool(description = "Get the current status of the nutrition service including build info, database counts, and process information")]
    async fn nutrition_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker
            .get_status(self.store.database())
            .map_err(|e| McpError::internal_error(format!("Database error: {}", e), None))?;
        to_json(&status)
    }

    #[tool(description = "Explain how recipe nutrition is computed and why ingredients get skipped. Call this before interpreting results.")]
    fn nutrition_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(NUTRITION_INSTRUCTIONS)]))
    }

    #[tool(description = "Compute total and per-serving nutrition (25 nutrients) for a recipe, with diagnostics for skipped ingredients")]
    async fn calculate_recipe_nutrition(
        &self,
        Parameters(p): Parameters<CalculateRecipeNutritionParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = nutrition::calculate_recipe_nutrition(&self.store, p.recipe_id)
            .await
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Show how a written quantity is parsed (fractions, mixed numbers, ranges)")]
    fn parse_quantity(
        &self,
        Parameters(p): Parameters<ParseQuantityParams>,
    ) -> Result<CallToolResult, McpError> {
        to_json(&nutrition::parse_quantity_text(&p.text))
    }

    #[tool(description = "Show how an ingredient quantity and unit resolve to grams and which rule applied")]
    async fn convert_to_grams(
        &self,
        Parameters(p): Parameters<ConvertToGramsParams>,
    ) -> Result<CallToolResult, McpError> {
        let response =
            nutrition::convert_to_grams(&self.store, p.ingredient_id, &p.quantity, &p.unit)
                .await
                .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&response)
    }
}

#[tool_handler]
impl ServerHandler for NutritionService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "recipe-nutrition".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Recipe Nutrition Engine".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Recipe Nutrition Engine - per-recipe and per-serving nutrient profiles. \
                 Call nutrition_instructions first. \
                 Nutrition: calculate_recipe_nutrition. \
                 Diagnostics: parse_quantity, convert_to_grams, nutrition_status."
                    .into(),
            ),
        }
    }
}
