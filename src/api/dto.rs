//! Request/response bodies of the trend backend

use serde::{Deserialize, Serialize};

use crate::types::{TickerHistory, TrendingTicker};

/// `GET /api/trending`
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingResponse {
    pub trending_tickers: Vec<TrendingTicker>,
}

/// `GET /api/ticker/{symbol}/history`
pub type HistoryResponse = TickerHistory;

/// `POST /api/ticker/validate` request body
#[derive(Debug, Clone, Serialize)]
pub struct ValidateRequest<'a> {
    pub ticker: &'a str,
}

/// `POST /api/ticker/validate` response body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    /// Canonical symbol; may be absent when the ticker is rejected
    #[serde(default)]
    pub ticker: Option<String>,
}

/// `GET /api/data/refresh`
///
/// Only logged. Every field is optional so an empty or unfamiliar body
/// still counts as success.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshSummary {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub items_processed: Option<u64>,
    #[serde(default)]
    pub trending_count: Option<u64>,
}

/// `GET /healthz`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
