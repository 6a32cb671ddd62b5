//! Core domain logic for MyWay, a student day planner.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod timer;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::schedule::{ClassDraft, ClassEntry, ClassId, ClassTime, Modality, Weekday};
pub use model::task::{Task, TaskId};
pub use repo::profile_repo::ProfileRepository;
pub use repo::schedule_repo::ScheduleRepository;
pub use repo::task_repo::TaskRepository;
pub use repo::{parse_or_default, RepoError, RepoResult};
pub use service::dashboard::{DashboardOverview, DashboardService};
pub use store::{
    open_store, open_store_in_memory, KeyValueStore, MemoryStore, SqliteStore, StoreError,
    StoreResult,
};
pub use timer::{
    format_clock, Clock, ManualClock, PomodoroEngine, SystemClock, TimerError, TimerHost,
    TimerPhase, TimerResult, TimerSnapshot, WORK_TIME_SECS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
