//! Domain-level error type used across services and repos.
//!
//! This error type is HTTP- and DB-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller-supplied wager input is not usable
    InvalidWager(String),
    /// No player row for the requested id
    NotFound { player_id: i64 },
    /// Presented token does not match the stored secret. Carries the
    /// attempted id only; token values are never captured here.
    AuthenticationFailed { player_id: i64 },
    /// Guarded update matched no row: the row vanished or its secret
    /// changed between fetch and write
    UpdateRejected { player_id: i64 },
    /// Connection/prepare/execute failure at the storage layer
    Store(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidWager(d) => write!(f, "invalid wager: {d}"),
            DomainError::NotFound { player_id } => {
                write!(f, "player {player_id} not found")
            }
            DomainError::AuthenticationFailed { player_id } => {
                write!(f, "authentication failed for player {player_id}")
            }
            DomainError::UpdateRejected { player_id } => {
                write!(f, "guarded update rejected for player {player_id}")
            }
            DomainError::Store(d) => write!(f, "store error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_wager(detail: impl Into<String>) -> Self {
        Self::InvalidWager(detail.into())
    }
    pub fn not_found(player_id: i64) -> Self {
        Self::NotFound { player_id }
    }
    pub fn authentication_failed(player_id: i64) -> Self {
        Self::AuthenticationFailed { player_id }
    }
    pub fn update_rejected(player_id: i64) -> Self {
        Self::UpdateRejected { player_id }
    }
    pub fn store(detail: impl Into<String>) -> Self {
        Self::Store(detail.into())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Store(e.to_string())
    }
}
