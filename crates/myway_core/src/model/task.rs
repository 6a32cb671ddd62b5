//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record and its lifecycle helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty after trimming; the repository enforces this at
//!   the mutation boundary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// One entry of the persisted task list.
///
/// Serialized field names are the wire contract of the `myWay_tasks`
/// payload and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used to key toggle/delete mutations.
    pub id: TaskId,
    /// Display text, trimmed before persistence.
    pub text: String,
    /// Completion flag flipped by toggle.
    pub completed: bool,
}

impl Task {
    /// Creates a new open task with a generated stable id.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a task with a caller-provided stable id.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
