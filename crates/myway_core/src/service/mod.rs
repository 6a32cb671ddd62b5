//! Use-case services composed from repositories.
//!
//! # Responsibility
//! - Aggregate repository reads into caller-facing view models.
//!
//! # Invariants
//! - Services never bypass repository persistence contracts.

pub mod dashboard;

pub use dashboard::{DashboardOverview, DashboardService};
