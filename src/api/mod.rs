//! HTTP API module for the HR engine.
//!
//! This module provides the REST endpoints for hiring, employee lookup,
//! entitlement computation, raise simulation and commercial performance
//! review.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EntitlementsQuery, HireEmployeeRequest, RaiseRequest};
pub use response::{ApiError, ApiErrorResponse, RaiseSimulation};
pub use state::AppState;
