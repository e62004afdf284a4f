//! HR business-rule engine
//!
//! This crate hires employees under generated matricules and computes their
//! derived quantities: seniority, paid leave, reduced-work-time days, annual
//! bonus, raise multiplier and the performance rating of commercial staff.
//! An axum API exposes it over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
