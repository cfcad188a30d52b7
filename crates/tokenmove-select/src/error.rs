//! Error types for token selection
//!
//! Every error is returned from the call that caused it. Nothing is retried
//! or recovered inside the engine.

use thiserror::Error;

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, SelectionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    // ========================================================================
    // Caller Errors
    // ========================================================================
    /// Only a single recipient per move is supported
    #[error("Exactly one recipient is supported per move, got {count}")]
    UnsupportedMultiRecipient { count: usize },

    #[error("There are insufficient tokens available: have {available}, need {required}")]
    InsufficientBalance { available: u128, required: u64 },

    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    // ========================================================================
    // Record Source Errors
    // ========================================================================
    /// The source matched more records than it can return in one page
    #[error("Found {found} unspent records, but result sets larger than {limit} are not supported")]
    ResultSetTooLarge { found: usize, limit: usize },

    // ========================================================================
    // Defects
    // ========================================================================
    #[error("Cannot split {requested} from a record holding {available}")]
    InvalidSplitAmount { requested: u64, available: u64 },

    #[error("Cannot generate a token move: {message}")]
    SelectionInvariantViolation { message: String },
}

impl SelectionError {
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::SelectionInvariantViolation {
            message: message.into(),
        }
    }

    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount {
            message: message.into(),
        }
    }

    /// True when the error signals a bug in the caller or the engine rather
    /// than a condition the end user can act on
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            Self::InvalidSplitAmount { .. } | Self::SelectionInvariantViolation { .. }
        )
    }

    /// Get an error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedMultiRecipient { .. } => "UNSUPPORTED_MULTI_RECIPIENT",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::ResultSetTooLarge { .. } => "RESULT_SET_TOO_LARGE",
            Self::InvalidSplitAmount { .. } => "INVALID_SPLIT_AMOUNT",
            Self::SelectionInvariantViolation { .. } => "SELECTION_INVARIANT_VIOLATION",
        }
    }
}
