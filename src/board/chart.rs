//! Chart Series
//!
//! Joins per-ticker histories on a shared date axis and assigns series
//! colours.

use std::collections::BTreeMap;

use crate::types::{ChartRow, MentionDate, TickerHistory};

/// Chart colors for different series
pub const SERIES_COLORS: [&str; 10] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff7300", "#00ff00", "#ff00ff", "#00ffff", "#ff0000",
    "#0000ff", "#ffff00",
];

/// Colour of the series at `index` in the tracked set
pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Merge histories into one row per distinct date, ascending
///
/// Each row holds the count of every ticker with a point on that date.
/// Tickers without a point are left out of the row rather than set to
/// zero. If a history repeats a date, the later point wins.
pub fn merge_histories<'a, I>(histories: I) -> Vec<ChartRow>
where
    I: IntoIterator<Item = &'a TickerHistory>,
{
    let mut rows: BTreeMap<MentionDate, ChartRow> = BTreeMap::new();

    for history in histories {
        for point in &history.history {
            rows.entry(point.date)
                .or_insert_with(|| ChartRow::new(point.date))
                .values
                .insert(history.ticker.clone(), point.mentions);
        }
    }

    rows.into_values().collect()
}
