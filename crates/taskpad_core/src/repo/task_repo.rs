//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the owned task collection.
//! - Assign identifiers and enforce existence and validation invariants.
//!
//! # Invariants
//! - Write paths validate input before touching the collection, so a
//!   rejected call leaves the store exactly as it was.
//! - The id counter only moves forward; deleted ids are never reassigned.
//! - Listing order is insertion order.

use crate::model::task::{normalize_description, Task, TaskId, TaskValidationError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Soft ceiling on the task count. Exceeding it is not an error; the
/// store stays unbounded and only emits a diagnostic.
pub const RECOMMENDED_MAX_TASKS: usize = 1000;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task store operations.
#[derive(Debug)]
pub enum RepoError {
    /// Input failed a precondition; no lookup was attempted.
    Validation(TaskValidationError),
    /// The supplied id matches no task currently in the store.
    NotFound(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "no task with id {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for task CRUD operations.
///
/// Operations are synchronous and fully applied or fully rejected; there is
/// no partial mutation on error.
pub trait TaskRepository {
    fn add_task(&mut self, description: &str) -> RepoResult<Task>;
    fn list_tasks(&self) -> Vec<Task>;
    fn get_task(&self, id: TaskId) -> RepoResult<Task>;
    fn update_description(&mut self, id: TaskId, new_description: &str) -> RepoResult<Task>;
    fn delete_task(&mut self, id: TaskId) -> RepoResult<()>;
    fn set_completed(&mut self, id: TaskId, completed: bool) -> RepoResult<Task>;
}

/// In-memory task repository: insertion-ordered rows plus an id counter.
///
/// Single-caller, request/response use only. Callers that later need
/// concurrent access should wrap the whole repository in one mutex; the
/// operations themselves are short and non-blocking.
#[derive(Debug)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl InMemoryTaskRepository {
    /// Creates an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn add_task(&mut self, description: &str) -> RepoResult<Task> {
        let task = Task::new(self.next_id, description)?;
        self.tasks.push(task.clone());
        self.next_id += 1;

        if self.tasks.len() > RECOMMENDED_MAX_TASKS {
            warn!(
                "event=capacity_soft_limit module=repo status=warn count={} recommended_max={}",
                self.tasks.len(),
                RECOMMENDED_MAX_TASKS
            );
        }

        Ok(task)
    }

    fn list_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Task> {
        self.position(id)
            .map(|index| self.tasks[index].clone())
            .ok_or(RepoError::NotFound(id))
    }

    fn update_description(&mut self, id: TaskId, new_description: &str) -> RepoResult<Task> {
        // Validation comes before the lookup: a bad description fails the
        // same way whether or not the id exists.
        let normalized = normalize_description(new_description)?;
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        self.tasks[index].description = normalized;
        Ok(self.tasks[index].clone())
    }

    fn delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        self.tasks.remove(index);
        Ok(())
    }

    fn set_completed(&mut self, id: TaskId, completed: bool) -> RepoResult<Task> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        self.tasks[index].completed = completed;
        Ok(self.tasks[index].clone())
    }
}
