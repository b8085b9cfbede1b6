//! The module contains the error the engine can throw.
//!
//! Validation errors ([`InvalidAmount`], [`InvalidReason`]) are raised before
//! any state mutation; [`InvalidFormat`] is raised when a backup bundle cannot
//! be decoded, leaving the current state intact.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidReason`]: EngineError::InvalidReason
//!  [`InvalidFormat`]: EngineError::InvalidFormat
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid reason: {0}")]
    InvalidReason(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::InvalidFormat(err.to_string())
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidReason(a), Self::InvalidReason(b)) => a == b,
            (Self::InvalidFormat(a), Self::InvalidFormat(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
