//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for shell callers.
//! - Delegate collection bookkeeping to the repository implementation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - The service layer stays storage-agnostic.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoResult, TaskRepository};

/// Use-case facade over a task repository.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new open task from user input.
    ///
    /// # Contract
    /// - The description is trimmed before storage.
    /// - Returns the created task snapshot with its assigned id.
    pub fn add_task(&mut self, description: &str) -> RepoResult<Task> {
        self.repo.add_task(description)
    }

    /// Lists all tasks in insertion order.
    ///
    /// An empty store yields an empty list, not an error.
    pub fn list_tasks(&self) -> Vec<Task> {
        self.repo.list_tasks()
    }

    /// Gets one task snapshot by id.
    pub fn get_task(&self, id: TaskId) -> RepoResult<Task> {
        self.repo.get_task(id)
    }

    /// Replaces a task's description, preserving id and completion state.
    pub fn update_description(&mut self, id: TaskId, new_description: &str) -> RepoResult<Task> {
        self.repo.update_description(id, new_description)
    }

    /// Deletes a task by id. The id is retired permanently.
    pub fn delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        self.repo.delete_task(id)
    }

    /// Marks a task as done. Idempotent.
    pub fn mark_complete(&mut self, id: TaskId) -> RepoResult<Task> {
        self.repo.set_completed(id, true)
    }

    /// Clears a task's completion flag. Idempotent.
    pub fn mark_incomplete(&mut self, id: TaskId) -> RepoResult<Task> {
        self.repo.set_completed(id, false)
    }
}
