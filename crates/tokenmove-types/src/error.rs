//! Error types for tokenmove types

use thiserror::Error;

/// Result type for operations on tokenmove types
pub type Result<T> = std::result::Result<T, TypesError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Arithmetic across two different token types
    #[error("Token type mismatch: expected {expected}, got {actual}")]
    TokenTypeMismatch { expected: String, actual: String },

    #[error("Amount overflow during arithmetic operation")]
    AmountOverflow,

    #[error("Amount underflow during arithmetic operation")]
    AmountUnderflow,

    #[error("Unknown currency code: {code}")]
    UnknownCurrency { code: String },

    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] uuid::Error),
}

impl TypesError {
    /// Get an error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TokenTypeMismatch { .. } => "TOKEN_TYPE_MISMATCH",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::AmountUnderflow => "AMOUNT_UNDERFLOW",
            Self::UnknownCurrency { .. } => "UNKNOWN_CURRENCY",
            Self::InvalidId(_) => "INVALID_ID",
        }
    }
}
