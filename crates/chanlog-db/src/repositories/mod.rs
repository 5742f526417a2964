//! SQLite repository implementations

mod dialog;
mod error;
mod message;
mod reaction;

pub use dialog::SqliteDialogRepository;
pub use message::SqliteMessageRepository;
pub use reaction::SqliteReactionHistoryRepository;
