//! # Ticker Board
//!
//! Client for a backend that tracks stock ticker mentions on Reddit.
//! Fetches the trending leaderboard and per-ticker daily histories and
//! merges them into one date-keyed table ready for charting.
//!
//! ## Modules
//!
//! - [`api`]: REST client for the trend backend
//! - [`board`]: controller owning the tracked tickers and chart rows
//! - [`types`]: leaderboard, history and chart row types
//! - [`config`]: TOML + environment configuration
//! - [`display`]: table, CSV and JSON rendering
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tickerboard::{BoardClient, Config, TickerBoard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default().config;
//!     let client = Arc::new(BoardClient::new(&config.api)?);
//!     let mut board = TickerBoard::new(client, &config.board);
//!
//!     board.load_leaderboard().await?;
//!     board.add_ticker("pltr").await?;
//!
//!     for row in board.rows() {
//!         println!("{} {:?}", row.date, row.values);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod display;
pub mod types;

pub use api::{ApiEndpoint, ApiError, ApiResult, BoardClient, TickerSource};

pub use board::{
    AddOutcome, BoardError, BoardResult, BoardStatus, BoardView, ChartState, RebuildOutcome,
    TickerBoard, TrackedTickers,
};

pub use config::{ApiConfig, BoardConfig, Config, ConfigError, LoadedConfig, LoggingConfig};

pub use display::{render, OutputFormat};

pub use types::{ChartRow, HistoryPoint, MentionDate, TickerHistory, TrendingTicker};
