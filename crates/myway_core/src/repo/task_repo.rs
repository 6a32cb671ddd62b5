//! Task list persistence over the key-value store.
//!
//! # Responsibility
//! - Read and write the `myWay_tasks` JSON payload.
//! - Enforce the blank-text rejection rule at the mutation boundary.
//!
//! # Invariants
//! - The stored sequence preserves insertion order.
//! - Writes are unconditional last-writer-wins; there is no optimistic
//!   concurrency.
//! - Mutations are keyed by stable id, never by position.

use crate::model::task::{Task, TaskId};
use crate::repo::{parse_or_default, RepoError, RepoResult};
use crate::store::KeyValueStore;

const TASKS_KEY: &str = "myWay_tasks";

/// Typed accessors for the persisted task list.
pub struct TaskRepository<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> TaskRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns all tasks in stored order.
    ///
    /// A missing or malformed payload degrades to an empty list.
    pub fn list(&self) -> RepoResult<Vec<Task>> {
        let raw = self.store.get(TASKS_KEY)?;
        Ok(parse_or_default(raw, Vec::new()))
    }

    /// Serializes and writes the full list back, replacing the payload.
    pub fn save(&self, tasks: &[Task]) -> RepoResult<()> {
        let payload = serde_json::to_string(tasks)?;
        self.store.set(TASKS_KEY, &payload)?;
        Ok(())
    }

    /// Appends a new open task.
    ///
    /// Returns `Ok(None)` without touching storage when the trimmed text is
    /// empty; otherwise returns the created task.
    pub fn add(&self, text: impl Into<String>) -> RepoResult<Option<Task>> {
        let Some(text) = normalize_task_text(&text.into()) else {
            return Ok(None);
        };

        let mut tasks = self.list()?;
        let task = Task::new(text);
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(Some(task))
    }

    /// Flips completion for the task with the given id.
    pub fn toggle(&self, id: TaskId) -> RepoResult<Task> {
        let mut tasks = self.list()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            return Err(RepoError::NotFound(id));
        };
        task.toggle();
        let updated = task.clone();
        self.save(&tasks)?;
        Ok(updated)
    }

    /// Removes the task with the given id.
    pub fn delete(&self, id: TaskId) -> RepoResult<()> {
        let mut tasks = self.list()?;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(RepoError::NotFound(id));
        }
        self.save(&tasks)?;
        Ok(())
    }

    /// Replaces the stored sequence with an empty list.
    pub fn clear(&self) -> RepoResult<()> {
        self.save(&[])
    }
}

/// Normalizes task text according to the add contract.
pub fn normalize_task_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
