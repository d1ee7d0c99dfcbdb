//! Core data types for the ticker board
//!
//! - `TrendingTicker`: one leaderboard entry
//! - `MentionDate`: a calendar date in strict `YYYY-MM-DD` form
//! - `HistoryPoint` / `TickerHistory`: a ticker's daily mention series
//! - `ChartRow`: one merged row per date across all tracked tickers

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Wire format for every date exchanged with the backend
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A ticker on the trending leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingTicker {
    /// Ticker symbol, named `ticker` on the wire
    #[serde(rename = "ticker")]
    pub symbol: String,
    /// Mentions summed over the backend's collection window
    pub total_mentions: u64,
}

impl TrendingTicker {
    pub fn new(symbol: impl Into<String>, total_mentions: u64) -> Self {
        Self {
            symbol: symbol.into(),
            total_mentions,
        }
    }
}

/// Rejected date string
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid date {0:?}: expected zero-padded YYYY-MM-DD")]
pub struct DateFormatError(pub String);

/// Calendar date of a mention count
///
/// Only the fixed-width, zero-padded form is accepted, so ordering
/// dates is the same as ordering their wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MentionDate(NaiveDate);

impl MentionDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for MentionDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for MentionDate {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || DateFormatError(s.to_string());

        if s.len() != 10 {
            return Err(reject());
        }
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| reject())?;

        // chrono accepts unpadded fields, so round-trip to be sure
        if date.format(DATE_FORMAT).to_string() != s {
            return Err(reject());
        }
        Ok(Self(date))
    }
}

impl fmt::Display for MentionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for MentionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MentionDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Mention count for one ticker on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: MentionDate,
    pub mentions: u64,
}

impl HistoryPoint {
    pub fn new(date: MentionDate, mentions: u64) -> Self {
        Self { date, mentions }
    }
}

/// Daily mention series for a single ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerHistory {
    pub ticker: String,
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
}

impl TickerHistory {
    pub fn new(ticker: impl Into<String>, history: Vec<HistoryPoint>) -> Self {
        Self {
            ticker: ticker.into(),
            history,
        }
    }
}

/// One chart row: a date plus the mention count of every tracked ticker
/// that has data on that date
///
/// Serialized flat, e.g. `{"date": "2024-01-01", "AAPL": 5, "TSLA": 3}`.
/// A missing symbol means no data for that day, which is not the same as
/// zero mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    pub date: MentionDate,
    #[serde(flatten)]
    pub values: BTreeMap<String, u64>,
}

impl ChartRow {
    pub fn new(date: MentionDate) -> Self {
        Self {
            date,
            values: BTreeMap::new(),
        }
    }

    /// Builder method: set a symbol's count
    pub fn with(mut self, symbol: impl Into<String>, mentions: u64) -> Self {
        self.values.insert(symbol.into(), mentions);
        self
    }

    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.values.get(symbol).copied()
    }
}
