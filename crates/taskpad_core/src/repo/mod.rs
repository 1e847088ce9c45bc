//! Repository layer abstraction and the in-memory implementation.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract.
//! - Keep collection bookkeeping details behind the repository seam.
//!
//! # Invariants
//! - Repository writes enforce model validation before mutating state.
//! - Repository APIs return semantic errors (`NotFound`) instead of
//!   sentinel values.

pub mod task_repo;
