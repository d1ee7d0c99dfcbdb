//! Trend backend REST client
//!
//! HTTP client for the Reddit mention backend.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{
    HealthResponse, HistoryResponse, RefreshSummary, TrendingResponse, ValidateRequest,
    ValidateResponse,
};
use super::endpoint::ApiEndpoint;
use super::error::{ApiError, ApiResult};
use super::TickerSource;
use crate::config::ApiConfig;
use crate::types::{TickerHistory, TrendingTicker};

/// REST client for the trend backend
#[derive(Debug, Clone)]
pub struct BoardClient {
    client: Client,
    endpoint: ApiEndpoint,
    leaderboard_limit: Option<usize>,
}

impl BoardClient {
    /// Create a client from the `[api]` configuration section
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let endpoint = ApiEndpoint::parse(&config.base_url)?;

        let mut builder = Client::builder()
            .user_agent(concat!("tickerboard/", env!("CARGO_PKG_VERSION")));
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint,
            leaderboard_limit: config.leaderboard_limit,
        })
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Check that the backend is up
    pub async fn health_check(&self) -> ApiResult<String> {
        let health: HealthResponse = self.get_json("healthz", "/healthz").await?;
        Ok(health.status)
    }

    fn history_path(symbol: &str) -> String {
        format!("/api/ticker/{}/history", urlencoding::encode(symbol))
    }

    fn trending_path(&self) -> String {
        match self.leaderboard_limit {
            Some(limit) => format!("/api/trending?limit={}", limit),
            None => "/api/trending".to_string(),
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = self
            .endpoint
            .authorize(request)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    async fn read_body(response: Response) -> ApiResult<String> {
        response.text().await.map_err(ApiError::from_transport)
    }

    async fn get_json<T: DeserializeOwned>(&self, name: &'static str, path: &str) -> ApiResult<T> {
        let url = self.endpoint.url(path);
        tracing::debug!(endpoint = name, url = %url, "GET");

        let response = self.send(self.client.get(&url)).await?;
        let body = Self::read_body(response).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            endpoint: name,
            source,
        })
    }
}

#[async_trait]
impl TickerSource for BoardClient {
    async fn trending(&self) -> ApiResult<Vec<TrendingTicker>> {
        let resp: TrendingResponse = self.get_json("trending", &self.trending_path()).await?;
        tracing::debug!("Backend returned {} trending tickers", resp.trending_tickers.len());
        Ok(resp.trending_tickers)
    }

    async fn history(&self, symbol: &str) -> ApiResult<TickerHistory> {
        let resp: HistoryResponse = self.get_json("history", &Self::history_path(symbol)).await?;
        Ok(resp)
    }

    async fn validate(&self, symbol: &str) -> ApiResult<ValidateResponse> {
        let url = self.endpoint.url("/api/ticker/validate");
        tracing::debug!(endpoint = "validate", url = %url, symbol, "POST");

        let request = self
            .client
            .post(&url)
            .json(&ValidateRequest { ticker: symbol });
        let body = Self::read_body(self.send(request).await?).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            endpoint: "validate",
            source,
        })
    }

    async fn refresh(&self) -> ApiResult<RefreshSummary> {
        let url = self.endpoint.url("/api/data/refresh");
        tracing::debug!(endpoint = "refresh", url = %url, "GET");

        let body = Self::read_body(self.send(self.client.get(&url)).await?).await?;
        if body.trim().is_empty() {
            return Ok(RefreshSummary::default());
        }
        // Body is informational only
        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unexpected refresh response: {}", e);
            RefreshSummary::default()
        }))
    }
}
