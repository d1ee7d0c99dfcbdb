//! Ticker board error types

use thiserror::Error;

use crate::api::ApiError;

/// Failures surfaced by board operations
///
/// None of these are fatal; the board keeps its previous data and the
/// user can retry.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Trending leaderboard could not be fetched
    #[error("Failed to fetch trending data: {0}")]
    Leaderboard(#[source] ApiError),

    /// One ticker's history failed, aborting the whole rebuild
    #[error("Failed to fetch history for {symbol}: {source}")]
    History {
        symbol: String,
        #[source]
        source: ApiError,
    },

    /// Validation request itself failed
    #[error("Failed to validate ticker {symbol}: {source}")]
    Validation {
        symbol: String,
        #[source]
        source: ApiError,
    },

    /// Backend answered that the symbol is not a ticker
    #[error("Invalid ticker: {0}")]
    InvalidTicker(String),

    /// Backend refresh trigger failed
    #[error("Failed to refresh data: {0}")]
    Refresh(#[source] ApiError),
}

impl BoardError {
    /// Short message shown to the user in place of the previous one
    pub fn user_message(&self) -> String {
        match self {
            BoardError::Leaderboard(_) => "Failed to fetch trending data".to_string(),
            BoardError::History { .. } => "Failed to fetch ticker history".to_string(),
            BoardError::Validation { symbol, .. } => {
                format!("Failed to validate ticker {}", symbol)
            }
            BoardError::InvalidTicker(symbol) => format!("Invalid ticker: {}", symbol),
            BoardError::Refresh(_) => "Failed to refresh data".to_string(),
        }
    }
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            BoardError::InvalidTicker("ZZZZ".to_string()).user_message(),
            "Invalid ticker: ZZZZ"
        );
        assert_eq!(
            BoardError::Leaderboard(ApiError::Timeout).user_message(),
            "Failed to fetch trending data"
        );
        assert_eq!(
            BoardError::Refresh(ApiError::Unavailable).user_message(),
            "Failed to refresh data"
        );
    }

    #[test]
    fn test_validation_message_names_symbol() {
        let err = BoardError::Validation {
            symbol: "MSFT".to_string(),
            source: ApiError::Unavailable,
        };
        assert_eq!(err.user_message(), "Failed to validate ticker MSFT");
    }

    #[test]
    fn test_history_error_names_symbol() {
        let err = BoardError::History {
            symbol: "TSLA".to_string(),
            source: ApiError::Status {
                status: 404,
                message: "not found".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch history for TSLA: API error 404: not found"
        );
        assert_eq!(err.user_message(), "Failed to fetch ticker history");
    }
}
