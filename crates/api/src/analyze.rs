//! Analysis API module for the Newslens HTTP API.
//!
//! Exposes the dispatch service over HTTP: one endpoint runs an analysis and
//! one lists the available tools for the dashboard's tool picker.

use crate::{ApiError, Dispatcher};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use newslens_core::tools::{analysis_tools, parse_tool_id, tool_display_name, tool_id};
use newslens_core::{Analysis, AnalysisRequest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

/// Analysis API router.
pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/tools", get(list_tools))
        .with_state(dispatcher)
}

// ==================== Request/Response Types ====================

/// Analysis request body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeParams {
    /// Input text. May be empty.
    pub text: String,
    /// Tool identifier (`summarizer`, `sentiment`, `plagiarism`, `fake-news`).
    pub tool: String,
}

/// Analysis response body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    /// Raw engine output, for verbatim display.
    pub result: String,
    /// Typed result parsed from the raw output.
    pub analysis: Analysis,
}

/// Tool listing entry.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    /// Stable tool identifier.
    pub id: String,
    /// Human-readable tool name.
    pub name: String,
}

// ==================== Handler Implementations ====================

#[instrument(skip_all, fields(tool = %params.tool))]
async fn analyze(
    State(dispatcher): State<Arc<Dispatcher>>,
    Json(params): Json<AnalyzeParams>,
) -> Result<Json<AnalyzeResult>, ApiError> {
    let tool = parse_tool_id(&params.tool).ok_or_else(|| {
        ApiError::InvalidRequest(format!("unknown analysis tool: {}", params.tool))
    })?;

    let dispatched = dispatcher
        .dispatch(&AnalysisRequest {
            tool,
            text: params.text,
        })
        .await
        .map_err(|e| ApiError::EngineUnavailable(e.to_string()))?;

    Ok(Json(AnalyzeResult {
        result: dispatched.raw,
        analysis: dispatched.analysis,
    }))
}

#[instrument(skip_all)]
async fn list_tools() -> Result<Json<Vec<ToolInfo>>, ApiError> {
    let tools = analysis_tools()
        .into_iter()
        .map(|tool| ToolInfo {
            id: tool_id(&tool).to_string(),
            name: tool_display_name(&tool).to_string(),
        })
        .collect();
    Ok(Json(tools))
}
