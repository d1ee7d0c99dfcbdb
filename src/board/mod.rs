//! Ticker Board
//!
//! The dashboard's state and logic, independent of how it is displayed:
//!
//! - **TickerBoard**: controller owning leaderboard, tracked set and chart rows
//! - **TrackedTickers**: ordered, duplicate-free symbol set
//! - **chart**: date-keyed merge of histories and the series palette
//!
//! ## Data Flow
//!
//! 1. `load_leaderboard` fetches trending tickers and tracks the top N
//! 2. Each selection change issues a rebuild ticket
//! 3. All histories are fetched concurrently and joined
//! 4. The merge replaces the chart rows if the ticket is still current

mod chart;
mod controller;
mod error;
mod tracked;

pub use chart::{merge_histories, series_color, SERIES_COLORS};
pub use controller::{
    fetch_histories, AddOutcome, BoardStatus, BoardView, ChartState, RebuildOutcome,
    RebuildTicket, TickerBoard, TrackedEntry,
};
pub use error::{BoardError, BoardResult};
pub use tracked::{normalize_symbol, TrackedTickers};
