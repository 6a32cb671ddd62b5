//! Pomodoro countdown engine and its injectable collaborators.
//!
//! # Responsibility
//! - Model the persistence-synchronized countdown state machine.
//! - Keep the engine headless: the wall clock and the frame scheduler are
//!   injected traits.
//!
//! # Invariants
//! - The authoritative remaining time is always recomputed from the
//!   persisted absolute end timestamp and the current wall clock, never
//!   accumulated from elapsed ticks.
//! - Reconstructing remaining time from persisted state yields the same
//!   value no matter how long the process was stopped.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod clock;
pub mod engine;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{PomodoroEngine, TimerHost};

/// Fixed pomodoro session length in seconds; also the reset target.
pub const WORK_TIME_SECS: i64 = 25 * 60;

pub type TimerResult<T> = Result<T, TimerError>;

#[derive(Debug)]
pub enum TimerError {
    Store(StoreError),
}

impl Display for TimerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TimerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for TimerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Which side of the state machine is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Frozen; `remaining_seconds` is the persisted countdown value.
    Idle,
    /// Counting down toward the persisted end timestamp.
    Running,
}

/// One rendered view of the countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub phase: TimerPhase,
    /// Whole seconds left, clamped at zero.
    pub remaining_seconds: i64,
    /// Absolute end instant; present only while running.
    pub end_timestamp_ms: Option<i64>,
}

impl TimerSnapshot {
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Countdown text in `MM:SS` form.
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds)
    }

    /// Fill angle for a circular progress indicator, in degrees.
    ///
    /// A full session maps to 360; the angle shrinks with the countdown.
    pub fn progress_degrees(&self) -> f64 {
        self.remaining_seconds as f64 / WORK_TIME_SECS as f64 * 360.0
    }
}

/// Formats whole seconds as zero-padded `MM:SS`.
pub fn format_clock(seconds: i64) -> String {
    let clamped = seconds.max(0);
    format!("{:02}:{:02}", clamped / 60, clamped % 60)
}
