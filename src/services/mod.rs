//! Orchestration services.
//!
//! Services combine the pure calculation rules with the employee store:
//! [`HiringService`] allocates matricules and persists new employees,
//! [`PerformanceService`] rates commercial staff.

mod hiring;
mod performance;

pub use hiring::{HireRequest, HiringService};
pub use performance::{PerformanceOutcome, PerformanceReview, PerformanceService};
