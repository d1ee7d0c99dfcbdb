//! Ticker Board Controller
//!
//! Owns the leaderboard, the tracked ticker set and the merged chart rows.
//! The operations below are the only way that state changes.

use futures_util::future::try_join_all;
use serde::Serialize;
use std::sync::Arc;

use super::chart::{merge_histories, series_color};
use super::error::{BoardError, BoardResult};
use super::tracked::{normalize_symbol, TrackedTickers};
use crate::api::TickerSource;
use crate::config::BoardConfig;
use crate::types::{ChartRow, TickerHistory, TrendingTicker};

/// Whether an operation is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStatus {
    Idle,
    Loading,
}

/// What the chart area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartState {
    /// Rows are available
    Ready,
    /// No rows yet, a request is in flight
    Loading,
    /// No rows; prompt the user to select tickers
    Empty,
}

/// Result of [`TickerBoard::add_ticker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Symbol was appended and the chart rebuilt
    Added(String),
    /// Symbol was already tracked; nothing changed
    AlreadyTracked(String),
    /// Input was blank
    Ignored,
}

/// Result of applying a rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// Rows replaced; holds the new row count
    Applied(usize),
    /// A newer rebuild was issued meanwhile; result dropped
    Stale,
}

/// A rebuild request tagged with its generation
///
/// Only the ticket from the most recent [`TickerBoard::begin_rebuild`]
/// may replace the chart rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildTicket {
    generation: u64,
    symbols: Vec<String>,
}

impl RebuildTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

/// One tracked ticker as presented to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedEntry {
    /// 1-based position in the tracked set
    pub rank: usize,
    pub symbol: String,
    /// Leaderboard total, `None` for tickers not on the leaderboard
    pub total_mentions: Option<u64>,
    pub color: &'static str,
}

/// Read-only snapshot of the whole board
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub tracked: Vec<TrackedEntry>,
    pub leaderboard: Vec<TrendingTicker>,
    pub rows: Vec<ChartRow>,
    pub chart: ChartState,
    pub status: BoardStatus,
    pub error: Option<String>,
}

/// Fetch every symbol's history concurrently, all-or-nothing
///
/// Histories are re-keyed by the requested symbol so the merge always
/// matches the tracked set, whatever casing the backend echoes back.
pub async fn fetch_histories<S>(source: &S, symbols: &[String]) -> BoardResult<Vec<TickerHistory>>
where
    S: TickerSource + ?Sized,
{
    let fetches = symbols.iter().map(|symbol| async move {
        let mut history = source
            .history(symbol)
            .await
            .map_err(|e| BoardError::History {
                symbol: symbol.clone(),
                source: e,
            })?;

        if history.ticker != *symbol {
            tracing::debug!("Backend echoed {} for {}", history.ticker, symbol);
            history.ticker = symbol.clone();
        }
        Ok::<_, BoardError>(history)
    });

    try_join_all(fetches).await
}

/// Controller for the trending ticker dashboard
pub struct TickerBoard<S: TickerSource + ?Sized> {
    source: Arc<S>,
    top_n: usize,
    leaderboard: Vec<TrendingTicker>,
    tracked: TrackedTickers,
    rows: Vec<ChartRow>,
    status: BoardStatus,
    error: Option<String>,
    generation: u64,
}

impl<S: TickerSource + ?Sized> TickerBoard<S> {
    /// Create an empty board backed by `source`
    pub fn new(source: Arc<S>, config: &BoardConfig) -> Self {
        Self {
            source,
            top_n: config.top_n,
            leaderboard: Vec::new(),
            tracked: TrackedTickers::new(),
            rows: Vec::new(),
            status: BoardStatus::Idle,
            error: None,
            generation: 0,
        }
    }

    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    pub fn leaderboard(&self) -> &[TrendingTicker] {
        &self.leaderboard
    }

    pub fn tracked(&self) -> &TrackedTickers {
        &self.tracked
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    /// Current user-visible error, if the last failing operation left one
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Leaderboard total for a symbol
    pub fn mentions_for(&self, symbol: &str) -> Option<u64> {
        self.leaderboard
            .iter()
            .find(|t| t.symbol == symbol)
            .map(|t| t.total_mentions)
    }

    pub fn chart_state(&self) -> ChartState {
        if !self.rows.is_empty() {
            ChartState::Ready
        } else if self.status == BoardStatus::Loading {
            ChartState::Loading
        } else {
            ChartState::Empty
        }
    }

    pub fn snapshot(&self) -> BoardView {
        let tracked = self
            .tracked
            .iter()
            .enumerate()
            .map(|(idx, symbol)| TrackedEntry {
                rank: idx + 1,
                symbol: symbol.to_string(),
                total_mentions: self.mentions_for(symbol),
                color: series_color(idx),
            })
            .collect();

        BoardView {
            tracked,
            leaderboard: self.leaderboard.clone(),
            rows: self.rows.clone(),
            chart: self.chart_state(),
            status: self.status,
            error: self.error.clone(),
        }
    }

    // ============================================
    // Operations
    // ============================================

    /// Fetch the leaderboard and chart its top entries
    pub async fn load_leaderboard(&mut self) -> BoardResult<RebuildOutcome> {
        self.begin_operation();
        let result = self.load_leaderboard_inner().await;
        self.end_operation("load_leaderboard", result)
    }

    /// Re-fetch histories for the tracked set and replace the rows
    pub async fn rebuild_chart(&mut self) -> BoardResult<RebuildOutcome> {
        self.begin_operation();
        let result = self.rebuild_inner().await;
        self.end_operation("rebuild_chart", result)
    }

    /// Validate and track a user-entered symbol
    pub async fn add_ticker(&mut self, raw: &str) -> BoardResult<AddOutcome> {
        let Some(symbol) = normalize_symbol(raw) else {
            return Ok(AddOutcome::Ignored);
        };

        self.begin_operation();
        let result = self.add_inner(symbol).await;
        self.end_operation("add_ticker", result)
    }

    /// Stop tracking a symbol
    ///
    /// Returns `false` without touching any state when it was not tracked.
    /// A removal leaves the current error message in place; only a failed
    /// rebuild replaces it.
    pub async fn remove_ticker(&mut self, symbol: &str) -> BoardResult<bool> {
        let symbol = normalize_symbol(symbol).unwrap_or_default();
        if !self.tracked.contains(&symbol) {
            tracing::debug!("Ignoring removal of untracked {}", symbol);
            return Ok(false);
        }

        self.status = BoardStatus::Loading;
        self.tracked.remove(&symbol);
        tracing::info!("Removed {} ({} tracked)", symbol, self.tracked.len());
        let result = self.rebuild_inner().await.map(|_| true);
        self.end_operation("remove_ticker", result)
    }

    /// Ask the backend to recompute, then reload the leaderboard
    pub async fn refresh_all(&mut self) -> BoardResult<RebuildOutcome> {
        self.begin_operation();
        let result = self.refresh_inner().await;
        self.end_operation("refresh_all", result)
    }

    // ============================================
    // Rebuild tickets
    // ============================================

    /// Issue a rebuild for the current tracked set
    ///
    /// Any ticket issued earlier becomes stale. The board reports
    /// [`BoardStatus::Loading`] until the current ticket is finished.
    pub fn begin_rebuild(&mut self) -> RebuildTicket {
        self.generation += 1;
        self.status = BoardStatus::Loading;
        RebuildTicket {
            generation: self.generation,
            symbols: self.tracked.as_slice().to_vec(),
        }
    }

    /// Apply the result of a rebuild if its ticket is still current
    pub fn finish_rebuild(
        &mut self,
        ticket: RebuildTicket,
        result: BoardResult<Vec<TickerHistory>>,
    ) -> BoardResult<RebuildOutcome> {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping stale rebuild {} (latest is {})",
                ticket.generation,
                self.generation
            );
            return Ok(RebuildOutcome::Stale);
        }

        self.status = BoardStatus::Idle;
        let histories = result?;
        self.rows = merge_histories(&histories);
        tracing::info!(
            "Chart rebuilt: {} tickers, {} rows",
            ticket.symbols.len(),
            self.rows.len()
        );
        Ok(RebuildOutcome::Applied(self.rows.len()))
    }

    // ============================================
    // Internals
    // ============================================

    fn begin_operation(&mut self) {
        self.status = BoardStatus::Loading;
        self.error = None;
    }

    fn end_operation<T>(&mut self, op: &str, result: BoardResult<T>) -> BoardResult<T> {
        self.status = BoardStatus::Idle;
        if let Err(e) = &result {
            match e {
                BoardError::InvalidTicker(_) => tracing::warn!(operation = op, "{}", e),
                _ => tracing::error!(operation = op, error = %e, "Board operation failed"),
            }
            self.error = Some(e.user_message());
        }
        result
    }

    async fn rebuild_inner(&mut self) -> BoardResult<RebuildOutcome> {
        let ticket = self.begin_rebuild();
        if ticket.symbols.is_empty() {
            return self.finish_rebuild(ticket, Ok(Vec::new()));
        }

        let source = Arc::clone(&self.source);
        let result = fetch_histories(source.as_ref(), ticket.symbols()).await;
        self.finish_rebuild(ticket, result)
    }

    async fn load_leaderboard_inner(&mut self) -> BoardResult<RebuildOutcome> {
        let leaderboard = self
            .source
            .trending()
            .await
            .map_err(BoardError::Leaderboard)?;

        self.tracked = TrackedTickers::from_leaderboard(&leaderboard, self.top_n);
        self.leaderboard = leaderboard;
        tracing::info!(
            "Loaded {} trending tickers, tracking {}",
            self.leaderboard.len(),
            self.tracked.len()
        );

        self.rebuild_inner().await
    }

    async fn add_inner(&mut self, symbol: String) -> BoardResult<AddOutcome> {
        let response = self
            .source
            .validate(&symbol)
            .await
            .map_err(|e| BoardError::Validation {
                symbol: symbol.clone(),
                source: e,
            })?;

        if !response.valid {
            return Err(BoardError::InvalidTicker(symbol));
        }

        let canonical = response
            .ticker
            .as_deref()
            .and_then(normalize_symbol)
            .unwrap_or(symbol);

        if !self.tracked.insert(canonical.clone()) {
            tracing::info!("{} is already tracked", canonical);
            return Ok(AddOutcome::AlreadyTracked(canonical));
        }

        tracing::info!("Added {} ({} tracked)", canonical, self.tracked.len());
        self.rebuild_inner().await?;
        Ok(AddOutcome::Added(canonical))
    }

    async fn refresh_inner(&mut self) -> BoardResult<RebuildOutcome> {
        let summary = self.source.refresh().await.map_err(BoardError::Refresh)?;
        tracing::info!(
            status = summary.status.as_deref().unwrap_or("unknown"),
            items_processed = summary.items_processed,
            "Backend refresh completed"
        );
        self.load_leaderboard_inner().await
    }
}
