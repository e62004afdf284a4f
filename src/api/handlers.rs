//! HTTP request handlers for the HR engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{Entitlements, calculate_entitlements, raise_multiplier, today};
use crate::error::EngineError;
use crate::models::{Employee, Matricule};
use crate::services::{PerformanceOutcome, PerformanceReview};

use super::request::{EntitlementsQuery, HireEmployeeRequest, RaiseRequest};
use super::response::{ApiError, ApiErrorResponse, RaiseSimulation};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(hire_handler).get(list_handler))
        .route("/employees/:matricule", get(employee_handler))
        .route("/employees/:matricule/entitlements", get(entitlements_handler))
        .route("/employees/:matricule/raise", post(raise_handler))
        .route("/performance-reviews", post(performance_review_handler))
        .with_state(state)
}

/// Handler for POST /employees.
///
/// Hires an employee and returns the stored record with its new matricule.
async fn hire_handler(
    State(state): State<AppState>,
    payload: Result<Json<HireEmployeeRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hire request");

    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;
    let role = request.role;

    let employee = state.hiring().hire(request.into()).map_err(|err| {
        warn!(correlation_id = %correlation_id, %role, error = %err, "Hire failed");
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        matricule = ?employee.matricule.map(|m| m.to_string()),
        "Hire completed"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /employees.
async fn list_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.store().list()?;
    Ok(Json(employees))
}

/// Handler for GET /employees/:matricule.
async fn employee_handler(
    State(state): State<AppState>,
    Path(matricule): Path<String>,
) -> ApiResult<Json<Employee>> {
    let employee = find_employee(&state, &matricule)?;
    Ok(Json(employee))
}

/// Handler for GET /employees/:matricule/entitlements.
///
/// Computes seniority, paid leave, RTT and annual bonus at the `date` query
/// parameter, or today.
async fn entitlements_handler(
    State(state): State<AppState>,
    Path(matricule): Path<String>,
    query: Result<Query<EntitlementsQuery>, QueryRejection>,
) -> ApiResult<Json<Entitlements>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, %matricule, "Processing entitlements request");

    let Query(query) = query.map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query string");
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    })?;
    let employee = find_employee(&state, &matricule)?;
    let reference = query.date.unwrap_or_else(today);

    let start_time = Instant::now();
    let entitlements =
        calculate_entitlements(&employee, state.config().policy(), state.calendar(), reference);
    info!(
        correlation_id = %correlation_id,
        %reference,
        rtt_days = entitlements.reduced_time.days,
        annual_bonus = %entitlements.annual_bonus,
        duration_us = start_time.elapsed().as_micros(),
        "Entitlements computed"
    );

    Ok(Json(entitlements))
}

/// Handler for POST /employees/:matricule/raise.
///
/// Simulates a raise; the stored salary is left unchanged.
async fn raise_handler(
    State(state): State<AppState>,
    Path(matricule): Path<String>,
    payload: Result<Json<RaiseRequest>, JsonRejection>,
) -> ApiResult<Json<RaiseSimulation>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, %matricule, "Processing raise simulation");

    let Json(request) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;
    let employee = find_employee(&state, &matricule)?;

    let multiplier = raise_multiplier(request.percentage, state.config().policy())?;
    let matricule = employee.matricule.ok_or_else(|| {
        EngineError::store(format!("record found under {} has no matricule", matricule))
    })?;

    Ok(Json(RaiseSimulation {
        matricule,
        percentage: request.percentage,
        multiplier,
        current_salary: employee.salary,
        raised_salary: employee.salary * multiplier,
    }))
}

/// Handler for POST /performance-reviews.
async fn performance_review_handler(
    State(state): State<AppState>,
    payload: Result<Json<PerformanceReview>, JsonRejection>,
) -> ApiResult<Json<PerformanceOutcome>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing performance review");

    let Json(review) = payload.map_err(|rejection| json_rejection(rejection, correlation_id))?;

    let outcome = state.performance().review(review).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Performance review failed");
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        new_performance = outcome.new_performance,
        "Performance review completed"
    );
    Ok(Json(outcome))
}

fn find_employee(state: &AppState, matricule: &str) -> ApiResult<Employee> {
    let matricule = Matricule::parse(matricule)?;
    let employee = state
        .store()
        .find_by_matricule(&matricule)?
        .ok_or_else(|| EngineError::EmployeeNotFound {
            matricule: matricule.to_string(),
        })?;
    Ok(employee)
}

fn json_rejection(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
