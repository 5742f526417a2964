//! Application services

mod archive;
mod assembler;
mod context;
mod dialog;
mod error;
mod forward;
mod reaction;
mod render;

pub use archive::{ArchiveService, IngestReport};
pub use assembler::AssemblerService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dialog::DialogService;
pub use error::{ServiceError, ServiceResult};
pub use forward::ForwardService;
pub use reaction::ReactionService;
pub use render::OutputFormat;
