//! Domain model for the task list and weekly class schedule.
//!
//! # Responsibility
//! - Define the persisted data structures and their wire shapes.
//! - Keep identity stable: every task and class entry carries a generated
//!   id assigned at creation.
//!
//! # Invariants
//! - Stored sequences preserve insertion order; ordering is display order.
//! - Mutations are keyed by id, never by position.

pub mod schedule;
pub mod task;
