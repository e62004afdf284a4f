//! Configuration loading and management for the HR engine.
//!
//! This module provides functionality to load the company policy (leave,
//! bonus, raise and performance constants) and the hiring salary grid from
//! YAML files. Nothing in the engine reads global state: the loaded values
//! are passed explicitly to every calculation and service.
//!
//! # Example
//!
//! ```no_run
//! use hr_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/company").unwrap();
//! println!("Base leave days: {}", config.policy().base_leave_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyConfig, CompanyPolicy, PerformanceThresholds, SalaryGrid};
