//! Traits for the domain layer

mod repositories;

pub use repositories::{
    ArchiveStats, DialogRepository, MessageFilter, MessageRepository, ReactionHistoryRepository,
    RepoResult,
};
