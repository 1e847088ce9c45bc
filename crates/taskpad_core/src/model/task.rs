//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record owned by the task store.
//! - Normalize and validate user-entered descriptions.
//!
//! # Invariants
//! - `id` is positive, stable and never reused for another task.
//! - `description` is stored trimmed and is never empty.
//! - `completed` always holds a defined value; new tasks start open.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned to every task by the owning store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// Validation failures for task construction and description updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Description was empty or whitespace-only after trimming.
    EmptyDescription,
    /// Task ids start at 1; zero means never-assigned.
    ZeroId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => {
                write!(f, "task description cannot be empty or whitespace-only")
            }
            Self::ZeroId => write!(f, "task id must be a positive integer"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single to-do item.
///
/// The owning store is the only writer; callers work with value snapshots
/// returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, unique for the store lifetime.
    pub id: TaskId,
    /// Trimmed, non-empty description text.
    pub description: String,
    /// Completion flag. New tasks start open.
    pub completed: bool,
}

impl Task {
    /// Creates an open task after normalizing the description.
    ///
    /// # Invariants
    /// - The stored description is trimmed and non-empty.
    /// - `completed` starts as `false`.
    pub fn new(id: TaskId, description: impl Into<String>) -> Result<Self, TaskValidationError> {
        if id == 0 {
            return Err(TaskValidationError::ZeroId);
        }
        let description = normalize_description(&description.into())?;
        Ok(Self {
            id,
            description,
            completed: false,
        })
    }

    /// Marks this task as done.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Clears the completion flag.
    pub fn reopen(&mut self) {
        self.completed = false;
    }

    /// Returns whether this task still needs doing.
    pub fn is_open(&self) -> bool {
        !self.completed
    }
}

/// Trims surrounding whitespace and rejects empty results.
///
/// Interior whitespace is preserved as entered.
pub fn normalize_description(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}
