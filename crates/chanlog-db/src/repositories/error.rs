//! Error handling utilities for repositories

use chanlog_core::error::DomainError;
use chanlog_core::value_objects::{ChannelId, MessageId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "message not found" error
pub fn message_not_found(id: MessageId) -> DomainError {
    DomainError::MessageNotFound(id)
}

/// Create a "dialog not found" error
pub fn dialog_not_found(id: ChannelId) -> DomainError {
    DomainError::DialogNotFound(id)
}
