//! Text rendering of the board for the terminal
//!
//! Tables for humans, CSV and JSON for piping into other tools.

use std::fmt::Write as _;
use thiserror::Error;

use crate::board::{BoardView, ChartState};
use crate::types::TrendingTicker;

/// Output format for board snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render a snapshot in the requested format
pub fn render(view: &BoardView, format: OutputFormat) -> Result<String, DisplayError> {
    match format {
        OutputFormat::Table => Ok(render_table(view)),
        OutputFormat::Csv => render_csv(view),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

/// Tracked tickers followed by the merged chart
pub fn render_table(view: &BoardView) -> String {
    let mut out = String::new();

    if let Some(error) = &view.error {
        let _ = writeln!(out, "Error: {}", error);
        out.push('\n');
    }

    out.push_str("Trending Stocks\n");
    if view.tracked.is_empty() {
        out.push_str("  No stocks selected. Add a custom ticker to get started.\n");
    }
    for entry in &view.tracked {
        let mentions = entry
            .total_mentions
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(
            out,
            "  #{:<3} ${:<8} {:>8} mentions  {}",
            entry.rank, entry.symbol, mentions, entry.color
        );
    }

    out.push_str("\nMention Trends\n");
    match view.chart {
        ChartState::Loading => {
            out.push_str("  Loading chart data...\n");
            return out;
        }
        ChartState::Empty => {
            out.push_str("  Select tickers to view trends\n");
            return out;
        }
        ChartState::Ready => {}
    }

    // Header
    let _ = write!(out, "{:<12}", "Date");
    for entry in &view.tracked {
        let _ = write!(out, " | {:<8}", entry.symbol);
    }
    out.push('\n');

    // Separator
    out.push_str(&"-".repeat(12 + view.tracked.len() * 11));
    out.push('\n');

    // Data rows
    for row in &view.rows {
        let _ = write!(out, "{:<12}", row.date.to_string());
        for entry in &view.tracked {
            let val = row
                .get(&entry.symbol)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string());
            let _ = write!(out, " | {:<8}", val);
        }
        out.push('\n');
    }

    out
}

/// One CSV line per chart row; missing counts are empty cells
pub fn render_csv(view: &BoardView) -> Result<String, DisplayError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["date".to_string()];
    header.extend(view.tracked.iter().map(|e| e.symbol.clone()));
    writer.write_record(&header)?;

    for row in &view.rows {
        let mut record = vec![row.date.to_string()];
        record.extend(
            view.tracked
                .iter()
                .map(|e| row.get(&e.symbol).map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Ranked leaderboard listing
pub fn render_leaderboard(leaderboard: &[TrendingTicker]) -> String {
    if leaderboard.is_empty() {
        return "No trending tickers yet.\n".to_string();
    }

    let mut out = format!("{:<6} {:<8} {:>10}\n", "Rank", "Ticker", "Mentions");
    out.push_str(&"-".repeat(26));
    out.push('\n');
    for (idx, entry) in leaderboard.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<6} {:<8} {:>10}",
            format!("#{}", idx + 1),
            entry.symbol,
            entry.total_mentions
        );
    }
    out
}
