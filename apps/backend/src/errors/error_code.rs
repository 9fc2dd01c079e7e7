//! Error codes for the backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Authentication required
    Unauthorized,
    /// Invalid player id in the request path
    InvalidPlayerId,
    /// Bet or winnings failed integer validation
    InvalidWager,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Player not found
    PlayerNotFound,
    /// Guarded update affected no row
    UpdateRejected,
    /// Storage-layer failure
    DbError,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::InvalidPlayerId => "INVALID_PLAYER_ID",
            ErrorCode::InvalidWager => "INVALID_WAGER",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::UpdateRejected => "UPDATE_REJECTED",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ErrorCode;

    const ALL: [ErrorCode; 10] = [
        ErrorCode::Unauthorized,
        ErrorCode::InvalidPlayerId,
        ErrorCode::InvalidWager,
        ErrorCode::ValidationError,
        ErrorCode::BadRequest,
        ErrorCode::PlayerNotFound,
        ErrorCode::UpdateRejected,
        ErrorCode::DbError,
        ErrorCode::Internal,
        ErrorCode::ConfigError,
    ];

    #[test]
    fn codes_are_unique() {
        let strings: HashSet<&'static str> = ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(strings.len(), ALL.len());
    }

    #[test]
    fn codes_are_screaming_snake_case() {
        for code in ALL {
            let s = code.as_str();
            assert!(!s.is_empty());
            assert!(s
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        }
    }
}
