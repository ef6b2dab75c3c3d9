//! Axum route handlers for the chat assistant and market data mining.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assistant::chat::{chat, ChatReply};
use crate::assistant::data_mining::{
    generate_insight, india_market_data, AiInsight, IndiaMarketData, DEFAULT_MINING_LOCATION,
};
use crate::errors::{require_text, AppError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DataMiningRequest {
    pub query: Option<String>,
    pub location: Option<String>,
    pub sector: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMiningResponse {
    pub insights: AiInsight,
    pub market_data: IndiaMarketData,
    pub timestamp: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /ai/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload?;
    let message = require_text(request.message, "message")?;

    let reply = chat(message.trim(), state.llm.as_ref()).await;
    info!("Chat reply served from {:?}", reply.source);
    Ok(Json(reply))
}

/// POST /ai-data-mining
///
/// The generated insight degrades to a canned one; market data is static.
pub async fn handle_data_mining(
    State(state): State<AppState>,
    payload: Result<Json<DataMiningRequest>, JsonRejection>,
) -> Result<Json<DataMiningResponse>, AppError> {
    let Json(request) = payload?;
    let query = require_text(request.query, "query")?;
    let location = request
        .location
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MINING_LOCATION.to_string());
    let sector = request.sector.filter(|s| !s.trim().is_empty());

    info!("Data mining for {query:?} in {location}");
    let insights = generate_insight(
        query.trim(),
        location.trim(),
        sector.as_deref(),
        state.llm.as_ref(),
    )
    .await;

    Ok(Json(DataMiningResponse {
        insights,
        market_data: india_market_data(sector.as_deref(), &state.catalogs.market),
        timestamp: Utc::now(),
    }))
}
