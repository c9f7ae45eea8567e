//! Import orchestration.
//!
//! # Responsibility
//! - Drive repository and snapshot collaborators through the per-table
//!   import workflow.
//! - Keep callers decoupled from SQL and resource-resolution details.

pub mod import_service;
