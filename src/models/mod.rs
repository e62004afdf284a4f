//! Core data models for the HR engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod holiday;
mod matricule;
mod role;

pub use employee::Employee;
pub use holiday::PublicHoliday;
pub use matricule::{MATRICULE_DIGITS, MATRICULE_LIMIT, Matricule};
pub use role::{EducationLevel, Role};
