//! Message entity - one archived chat message
//!
//! A `MessageRecord` is immutable for the duration of one request: the
//! derivation engines operate on the exact collection (the working set)
//! handed to them and never reach outside it.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{ChannelId, MessageId};

/// Sender of a message, as reported by the upstream network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl Sender {
    /// Human-readable display name: "First Last (@username)" with absent parts skipped
    pub fn display_name(&self) -> String {
        let mut name = String::new();
        if let Some(first) = &self.first_name {
            name.push_str(first);
        }
        if let Some(last) = &self.last_name {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(last);
        }
        if let Some(username) = &self.username {
            if name.is_empty() {
                name.push('@');
                name.push_str(username);
            } else {
                name.push_str(" (@");
                name.push_str(username);
                name.push(')');
            }
        }
        if name.is_empty() {
            name.push_str("unknown");
        }
        name
    }
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub sender: Option<Sender>,
    pub content: String,
    pub date: DateTime<Utc>,
    pub reply_to_id: Option<MessageId>,
    pub reactions_count: i64,
    /// Opaque raw payload as delivered by the upstream client
    pub raw: Option<serde_json::Value>,
}

impl MessageRecord {
    /// Create a new MessageRecord with no sender, reply link, or reactions
    pub fn new(id: MessageId, channel_id: ChannelId, content: String, date: DateTime<Utc>) -> Self {
        Self {
            id,
            channel_id,
            sender: None,
            content,
            date,
            reply_to_id: None,
            reactions_count: 0,
            raw: None,
        }
    }

    /// Check if the message carries a reply reference
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.reply_to_id.is_some()
    }

    /// Get a truncated preview of the content (UTF-8 boundary safe)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }

    /// Validate structural integrity of the record
    ///
    /// A zero `id` or `channel_id` means the upstream row was missing a
    /// required field and the record cannot participate in any derivation.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_zero() {
            return Err(DomainError::MalformedRecord("message id is missing".to_string()));
        }
        if self.channel_id.is_zero() {
            return Err(DomainError::MalformedRecord(format!(
                "message {} has no channel id",
                self.id
            )));
        }
        Ok(())
    }
}

/// Screen a batch for malformed records
///
/// Malformed records are rejected and reported individually; the remainder of
/// the batch is kept in arrival order. A few bad rows never abort the batch.
pub fn screen_records(records: Vec<MessageRecord>) -> (Vec<MessageRecord>, Vec<DomainError>) {
    let mut kept = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for record in records {
        match record.validate() {
            Ok(()) => kept.push(record),
            Err(e) => rejected.push(e),
        }
    }

    (kept, rejected)
}
