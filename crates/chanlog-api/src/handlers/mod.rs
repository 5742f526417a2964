//! Request handlers

pub mod dialogs;
pub mod forward;
pub mod health;
pub mod messages;
pub mod reactions;
