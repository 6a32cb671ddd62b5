//! Weekly class schedule persistence over the key-value store.
//!
//! # Responsibility
//! - Read and write the per-weekday JSON payloads (one key per day name).
//! - Provide the canonical sorted read used by every consumer.
//!
//! # Invariants
//! - Stored order is insertion order; sorting happens on read, never on
//!   write.
//! - The sorted read orders by `startTime` ascending with a stable sort, so
//!   equal start times keep insertion order.
//! - No semantic validation beyond the non-empty course rule: no overlap
//!   detection, no `startTime < endTime` check.

use crate::model::schedule::{ClassDraft, ClassEntry, ClassId, Weekday};
use crate::repo::{parse_or_default, RepoError, RepoResult};
use crate::store::KeyValueStore;

/// Typed accessors for the persisted per-weekday class lists.
pub struct ScheduleRepository<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> ScheduleRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns one day's entries in stored order.
    ///
    /// A missing or malformed payload degrades to an empty list.
    pub fn list_day(&self, day: Weekday) -> RepoResult<Vec<ClassEntry>> {
        let raw = self.store.get(day.storage_key())?;
        Ok(parse_or_default(raw, Vec::new()))
    }

    /// Returns one day's entries sorted by start time ascending.
    ///
    /// This is the canonical read order for display; the stored payload is
    /// left untouched.
    pub fn list_day_sorted(&self, day: Weekday) -> RepoResult<Vec<ClassEntry>> {
        let mut entries = self.list_day(day)?;
        entries.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(entries)
    }

    /// Serializes and writes one day's full list back.
    pub fn save_day(&self, day: Weekday, entries: &[ClassEntry]) -> RepoResult<()> {
        let payload = serde_json::to_string(entries)?;
        self.store.set(day.storage_key(), &payload)?;
        Ok(())
    }

    /// Appends a class entry to the given day.
    ///
    /// Returns `Ok(None)` without touching storage when the trimmed course
    /// name is empty; otherwise returns the created entry.
    pub fn add_class(&self, day: Weekday, draft: &ClassDraft) -> RepoResult<Option<ClassEntry>> {
        let Some(course) = normalize_course(&draft.course) else {
            return Ok(None);
        };

        let mut entries = self.list_day(day)?;
        let entry = ClassEntry::new(
            course,
            draft.start_time.clone(),
            draft.end_time.clone(),
            draft.modality,
        );
        entries.push(entry.clone());
        self.save_day(day, &entries)?;
        Ok(Some(entry))
    }

    /// Removes the entry with the given id from the given day.
    pub fn delete_class(&self, day: Weekday, id: ClassId) -> RepoResult<()> {
        let mut entries = self.list_day(day)?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(RepoError::NotFound(id));
        }
        self.save_day(day, &entries)?;
        Ok(())
    }

    /// Removes the stored sequence for every one of the 7 weekday keys.
    pub fn clear_all_days(&self) -> RepoResult<()> {
        for day in Weekday::ALL {
            self.store.remove(day.storage_key())?;
        }
        Ok(())
    }
}

/// Normalizes a course name according to the add contract.
pub fn normalize_course(course: &str) -> Option<String> {
    let trimmed = course.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
