//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep shell callers decoupled from collection bookkeeping details.

pub mod task_service;
