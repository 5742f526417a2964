//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ChannelId, MessageId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    #[error("Dialog not found: {0}")]
    DialogNotFound(ChannelId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::DialogNotFound(_) => "UNKNOWN_DIALOG",

            // Validation
            Self::MalformedRecord(_) => "MALFORMED_RECORD",
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MessageNotFound(_) | Self::DialogNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord(_) | Self::InvalidConfiguration(_) | Self::ValidationError(_)
        )
    }
}
