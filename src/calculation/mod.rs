//! Calculation logic for the HR engine.
//!
//! This module contains the pure business rules: seniority, paid leave,
//! reduced-work-time days (RTT) with their public holiday calendar, annual
//! bonus, raise multiplier, and the commercial performance bands. Nothing
//! here performs I/O; every function is deterministic given its reference
//! date.

mod bonus;
mod entitlements;
mod holidays;
mod performance;
mod raise;
mod reduced_time;
mod seniority;

pub use bonus::annual_bonus;
pub use entitlements::{Entitlements, calculate_entitlements};
pub use holidays::{FrenchPublicHolidays, HolidayCalendar, easter_sunday};
pub use performance::{PerformanceBand, PerformanceEvaluation, evaluate_performance};
pub use raise::{apply_raise, raise_multiplier};
pub use reduced_time::{
    BASE_WEEKEND_DAYS, RttBreakdown, calculate_reduced_time_days,
    reduced_time_days, reduced_time_days_today, weekend_days_in_year,
};
pub use seniority::{paid_leave_days, seniority_years, today};
