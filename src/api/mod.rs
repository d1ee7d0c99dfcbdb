//! Trend Backend API
//!
//! Client side of the Reddit mention backend:
//!
//! - **Endpoint**: base URL parsing and Basic credentials
//! - **Client**: reqwest implementation of [`TickerSource`]
//! - **DTOs**: wire bodies for each endpoint

mod client;
mod dto;
mod endpoint;
mod error;

pub use client::BoardClient;
pub use dto::{HealthResponse, RefreshSummary, TrendingResponse, ValidateRequest, ValidateResponse};
pub use endpoint::{ApiEndpoint, BasicCredentials};
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

use crate::types::{TickerHistory, TrendingTicker};

/// Source of leaderboard and history data
///
/// Implemented by [`BoardClient`] for the real backend; the controller
/// only sees this trait.
#[async_trait]
pub trait TickerSource: Send + Sync {
    /// Trending leaderboard, highest mention count first
    async fn trending(&self) -> ApiResult<Vec<TrendingTicker>>;

    /// Daily mention history of one ticker
    async fn history(&self, symbol: &str) -> ApiResult<TickerHistory>;

    /// Ask the backend whether a symbol is a known ticker
    async fn validate(&self, symbol: &str) -> ApiResult<ValidateResponse>;

    /// Ask the backend to re-scrape and recompute its data
    async fn refresh(&self) -> ApiResult<RefreshSummary>;
}
