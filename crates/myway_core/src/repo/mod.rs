//! Repository layer: typed accessors over the injected key-value store.
//!
//! # Responsibility
//! - Own the persisted JSON payload shapes and their storage keys.
//! - Centralize the fail-soft parse boundary in [`parse_or_default`].
//!
//! # Invariants
//! - Malformed persisted content degrades to the caller's fallback value
//!   and is never propagated as an error.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   store transport errors.

use crate::store::StoreError;
use log::warn;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod profile_repo;
pub mod schedule_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and mutation operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Serialize(serde_json::Error),
    NotFound(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode persisted payload: {err}"),
            Self::NotFound(id) => write!(f, "no entry with id {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Parses a raw stored value, falling back on absence or malformed content.
///
/// This is the single parse boundary every repository reads through: an
/// absent key and an unreadable payload both degrade to `fallback` instead
/// of surfacing an error.
pub fn parse_or_default<T: DeserializeOwned>(raw: Option<String>, fallback: T) -> T {
    let Some(raw) = raw else {
        return fallback;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("event=parse_degraded module=repo status=fallback error={err}");
            fallback
        }
    }
}
