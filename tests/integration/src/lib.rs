//! Integration test utilities for the channel archive server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API and the service pipeline, backed by throwaway SQLite
//! databases.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
