//! # chanlog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{HealthResponse, ReadinessResponse};
pub use services::{
    ArchiveService, AssemblerService, DialogService, ForwardService, OutputFormat,
    ReactionService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
