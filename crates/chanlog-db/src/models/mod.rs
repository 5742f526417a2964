//! Database models (SQLx row types)

mod dialog;
mod message;
mod reaction;

pub use dialog::DialogModel;
pub use message::{ArchiveStatsModel, MessageModel};
pub use reaction::ReactionHistoryModel;
