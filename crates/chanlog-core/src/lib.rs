//! # chanlog-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! derivation engines (chain building, reaction deltas, list sorting, channel
//! grouping). This crate has zero dependencies on infrastructure (database,
//! web framework, etc.) and performs no I/O: every engine is a pure function
//! over an already-materialized working set.

pub mod chains;
pub mod entities;
pub mod error;
pub mod grouping;
pub mod reactions;
pub mod sorting;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use chains::{build_chains, Chain, ChainForest, ChainStats};
pub use entities::{screen_records, DialogDescriptor, DialogKind, MessageRecord, ReactionSnapshot, Sender};
pub use error::DomainError;
pub use grouping::group_by_channel;
pub use reactions::{detect_changes, ReactionChange};
pub use sorting::{sort_dialogs, sort_messages, ChannelSortMode, MessageSortMode};
pub use traits::{
    ArchiveStats, DialogRepository, MessageFilter, MessageRepository, ReactionHistoryRepository,
    RepoResult,
};
pub use value_objects::{ChannelId, IdParseError, MessageId};
