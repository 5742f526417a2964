//! Domain entities - core business objects

mod dialog;
mod message;
mod reaction;

pub use dialog::{DialogDescriptor, DialogKind};
pub use message::{screen_records, MessageRecord, Sender};
pub use reaction::ReactionSnapshot;
