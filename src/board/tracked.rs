//! Tracked ticker set
//!
//! Ordered, duplicate-free list of the symbols currently charted.

use serde::Serialize;

use crate::types::TrendingTicker;

/// Trim and uppercase user input; `None` when nothing is left
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}

/// Insertion-ordered set of ticker symbols
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrackedTickers {
    symbols: Vec<String>,
}

impl TrackedTickers {
    pub fn new() -> Self {
        Self::default()
    }

    /// First `n` leaderboard symbols, in backend order
    pub fn from_leaderboard(leaderboard: &[TrendingTicker], n: usize) -> Self {
        let mut tracked = Self::new();
        for entry in leaderboard {
            if tracked.len() == n {
                break;
            }
            tracked.insert(entry.symbol.clone());
        }
        tracked
    }

    /// Append a symbol; returns `false` if it was already tracked
    pub fn insert(&mut self, symbol: impl Into<String>) -> bool {
        let symbol = symbol.into();
        if self.contains(&symbol) {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    /// Remove a symbol; returns `false` if it was not tracked
    pub fn remove(&mut self, symbol: &str) -> bool {
        match self.position(symbol) {
            Some(idx) => {
                self.symbols.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.position(symbol).is_some()
    }

    /// Index of a symbol, which also picks its series colour
    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.symbols
    }
}

impl FromIterator<String> for TrackedTickers {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut tracked = Self::new();
        for symbol in iter {
            tracked.insert(symbol);
        }
        tracked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaderboard(symbols: &[&str]) -> Vec<TrendingTicker> {
        symbols
            .iter()
            .enumerate()
            .map(|(i, s)| TrendingTicker::new(*s, 100 - i as u64))
            .collect()
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("  aapl "), Some("AAPL".to_string()));
        assert_eq!(normalize_symbol("Tsla"), Some("TSLA".to_string()));
        assert_eq!(normalize_symbol("   "), None);
        assert_eq!(normalize_symbol(""), None);
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut tracked = TrackedTickers::new();
        assert!(tracked.insert("AAPL"));
        assert!(tracked.insert("TSLA"));
        assert!(!tracked.insert("AAPL"));
        assert_eq!(tracked.as_slice(), ["AAPL", "TSLA"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut tracked: TrackedTickers = ["AAPL".to_string()].into_iter().collect();
        assert!(!tracked.remove("GME"));
        assert_eq!(tracked.len(), 1);
        assert!(tracked.remove("AAPL"));
        assert!(tracked.is_empty());
    }

    #[test]
    fn test_order_after_remove() {
        let mut tracked: TrackedTickers = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        tracked.remove("B");
        tracked.insert("D");
        assert_eq!(tracked.iter().collect::<Vec<_>>(), vec!["A", "C", "D"]);
        assert_eq!(tracked.position("D"), Some(2));
    }

    #[test]
    fn test_from_leaderboard_takes_prefix() {
        let board = leaderboard(&["GME", "AMC", "TSLA", "NVDA", "AAPL", "PLTR", "SPY"]);
        let tracked = TrackedTickers::from_leaderboard(&board, 5);
        assert_eq!(tracked.as_slice(), ["GME", "AMC", "TSLA", "NVDA", "AAPL"]);

        let short = leaderboard(&["GME", "AMC"]);
        assert_eq!(TrackedTickers::from_leaderboard(&short, 5).len(), 2);
        assert!(TrackedTickers::from_leaderboard(&[], 5).is_empty());
    }

    #[test]
    fn test_no_duplicates_under_mixed_operations() {
        let ops = [
            ("add", "AAPL"),
            ("add", "TSLA"),
            ("add", "AAPL"),
            ("remove", "TSLA"),
            ("add", "TSLA"),
            ("add", "TSLA"),
            ("remove", "NVDA"),
            ("add", "NVDA"),
        ];
        let mut tracked = TrackedTickers::new();
        for (op, symbol) in ops {
            match op {
                "add" => {
                    tracked.insert(symbol);
                }
                _ => {
                    tracked.remove(symbol);
                }
            }
            let mut seen = std::collections::HashSet::new();
            assert!(tracked.iter().all(|s| seen.insert(s)));
        }
        assert_eq!(tracked.as_slice(), ["AAPL", "TSLA", "NVDA"]);
    }
}
