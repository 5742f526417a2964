//! Entity <-> model mappers

mod dialog;
mod message;
mod reaction;

pub use message::MessageInsert;
