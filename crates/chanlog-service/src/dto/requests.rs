//! Request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Query parameters for message listing and assembly
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesQuery {
    /// Restrict to one channel; omitted means all archived channels
    pub channel_id: Option<i64>,
    /// Inclusive lower bound on message date
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on message date
    pub to: Option<DateTime<Utc>>,
    /// Maximum number of messages in the working set
    pub limit: Option<u32>,
    /// Output format: text, json, json-no-chains, json-reactions
    pub format: Option<String>,
    /// Message sort mode: telegram, id_asc, id_desc
    pub sort: Option<String>,
}

/// Query parameters for reaction-change detection
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReactionChangesQuery {
    /// Lookback window in hours; defaults to the configured window
    #[validate(range(min = 1, max = 8760))]
    pub window_hours: Option<u32>,
    /// Restrict to one channel
    pub channel_id: Option<i64>,
}

/// Request body for forwarding an assembled document
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForwardRequest {
    /// Destination URL; falls back to the configured default when omitted
    #[validate(url)]
    pub url: Option<String>,
    /// Working set and format selection, same semantics as a messages query
    #[serde(flatten)]
    pub query: MessagesQuery,
}
