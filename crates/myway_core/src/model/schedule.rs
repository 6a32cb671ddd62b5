//! Weekly class schedule domain model.
//!
//! # Responsibility
//! - Define the persisted class entry record and its wire shape.
//! - Validate wall-clock times at the type boundary so stored payloads are
//!   lexicographically sortable.
//!
//! # Invariants
//! - `ClassTime` always holds zero-padded 24h `"HH:MM"`; lexicographic
//!   order therefore equals chronological order.
//! - Each weekday's storage key is the literal English day name.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static CLASS_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid class time regex"));

/// Stable identifier for a class entry.
pub type ClassId = Uuid;

/// Zero-padded 24h wall-clock time, e.g. `"09:05"`.
///
/// Stored and serialized as the plain string, so sorting entries by this
/// field sorts them chronologically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassTime(String);

impl ClassTime {
    /// Parses a trimmed `"HH:MM"` value; `None` when empty or out of range.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if CLASS_TIME_RE.is_match(trimmed) {
            Some(Self(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClassTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
            .ok_or_else(|| format!("invalid class time `{value}`; expected zero-padded HH:MM"))
    }
}

impl From<ClassTime> for String {
    fn from(value: ClassTime) -> Self {
        value.0
    }
}

impl Display for ClassTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a class is attended. Wire values are `"Online"` and `"In-Person"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    Online,
    #[serde(rename = "In-Person")]
    InPerson,
}

impl Modality {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::InPerson => "In-Person",
        }
    }
}

impl Display for Modality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekday whose literal English name doubles as the storage key for that
/// day's class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the storage key for this day's class list.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Parses a day name case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sunday" => Some(Self::Sunday),
            "monday" => Some(Self::Monday),
            "tuesday" => Some(Self::Tuesday),
            "wednesday" => Some(Self::Wednesday),
            "thursday" => Some(Self::Thursday),
            "friday" => Some(Self::Friday),
            "saturday" => Some(Self::Saturday),
            _ => None,
        }
    }

    /// Returns the UTC weekday containing the given epoch-millisecond
    /// instant. 1970-01-01 was a Thursday.
    pub fn from_epoch_ms(epoch_ms: i64) -> Self {
        let days = epoch_ms.div_euclid(86_400_000);
        match (days + 4).rem_euclid(7) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// One entry of a weekday's persisted class list.
///
/// Serialized with camelCase field names to match the per-day payload
/// contract (`startTime`/`endTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    /// Stable id used to key delete mutations.
    pub id: ClassId,
    pub course: String,
    pub start_time: ClassTime,
    pub end_time: ClassTime,
    pub modality: Modality,
}

impl ClassEntry {
    /// Creates a new entry with a generated stable id.
    pub fn new(
        course: impl Into<String>,
        start_time: ClassTime,
        end_time: ClassTime,
        modality: Modality,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), course, start_time, end_time, modality)
    }

    /// Creates an entry with a caller-provided stable id.
    pub fn with_id(
        id: ClassId,
        course: impl Into<String>,
        start_time: ClassTime,
        end_time: ClassTime,
        modality: Modality,
    ) -> Self {
        Self {
            id,
            course: course.into(),
            start_time,
            end_time,
            modality,
        }
    }
}

/// Caller input for adding a class entry.
///
/// Times arrive already validated as [`ClassTime`]; the repository only
/// checks the course name for emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDraft {
    pub course: String,
    pub start_time: ClassTime,
    pub end_time: ClassTime,
    pub modality: Modality,
}
