//! Dashboard overview assembly.
//!
//! # Responsibility
//! - Combine task, schedule, and profile reads into one home-screen view.
//!
//! # Invariants
//! - The overview is a pure read; assembling it never writes the store.
//! - Today's classes come back sorted by start time.

use crate::model::schedule::{ClassEntry, Weekday};
use crate::model::task::Task;
use crate::repo::profile_repo::ProfileRepository;
use crate::repo::schedule_repo::ScheduleRepository;
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoResult;
use crate::store::KeyValueStore;

/// How many open tasks the overview previews.
const DASHBOARD_PREVIEW_LIMIT: usize = 3;

/// Read-only aggregate for the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOverview {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Completed share of all tasks as a whole percentage; `0` when empty.
    pub completion_percent: u8,
    /// Up to the first few tasks in list order.
    pub preview: Vec<Task>,
    /// Today's classes sorted by start time.
    pub today_classes: Vec<ClassEntry>,
    pub profile_image: Option<String>,
}

/// Composes the repositories behind the dashboard.
pub struct DashboardService<'s, S: KeyValueStore> {
    tasks: TaskRepository<'s, S>,
    schedule: ScheduleRepository<'s, S>,
    profile: ProfileRepository<'s, S>,
}

impl<'s, S: KeyValueStore> DashboardService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            tasks: TaskRepository::new(store),
            schedule: ScheduleRepository::new(store),
            profile: ProfileRepository::new(store),
        }
    }

    /// Builds the overview for the given day of the week.
    pub fn overview(&self, today: Weekday) -> RepoResult<DashboardOverview> {
        let tasks = self.tasks.list()?;
        let completed = tasks.iter().filter(|t| t.completed).count();
        let preview = tasks.iter().take(DASHBOARD_PREVIEW_LIMIT).cloned().collect();

        Ok(DashboardOverview {
            total_tasks: tasks.len(),
            completed_tasks: completed,
            completion_percent: completion_percent(completed, tasks.len()),
            preview,
            today_classes: self.schedule.list_day_sorted(today)?,
            profile_image: self.profile.image()?,
        })
    }
}

/// Whole-number completion percentage, rounded; `0` for an empty list.
fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u8
}
