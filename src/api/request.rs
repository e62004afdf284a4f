//! Request types for the HR engine API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EducationLevel, Role};
use crate::services::HireRequest;

fn full_time() -> Decimal {
    Decimal::ONE
}

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireEmployeeRequest {
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Role: `manager`, `technician` or `commercial`.
    pub role: Role,
    /// Highest diploma, e.g. `master`.
    pub education: EducationLevel,
    /// Share of a full-time contract; full time when omitted.
    #[serde(default = "full_time")]
    pub contract_fraction: Decimal,
}

impl From<HireEmployeeRequest> for HireRequest {
    fn from(req: HireEmployeeRequest) -> Self {
        HireRequest {
            last_name: req.last_name,
            first_name: req.first_name,
            role: req.role,
            education: req.education,
            contract_fraction: req.contract_fraction,
        }
    }
}

/// Request body for `POST /employees/:matricule/raise`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseRequest {
    /// Raise in percent, e.g. `"41.24"`.
    pub percentage: Decimal,
}

/// Query string of `GET /employees/:matricule/entitlements`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntitlementsQuery {
    /// Reference date; today when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hire_request_defaults_to_full_time() {
        let request: HireEmployeeRequest = serde_json::from_value(json!({
            "last_name": "Neymar",
            "first_name": "Jean",
            "role": "technician",
            "education": "cap"
        }))
        .unwrap();

        let hire: HireRequest = request.into();
        assert_eq!(hire.role, Role::Technician);
        assert_eq!(hire.education, EducationLevel::Cap);
        assert_eq!(hire.contract_fraction, Decimal::ONE);
    }

    #[test]
    fn test_hire_request_rejects_unknown_role() {
        let result: Result<HireEmployeeRequest, _> = serde_json::from_value(json!({
            "last_name": "Neymar",
            "first_name": "Jean",
            "role": "intern",
            "education": "cap"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_raise_request_accepts_string_and_number() {
        let from_string: RaiseRequest = serde_json::from_value(json!({"percentage": "41.24"})).unwrap();
        let from_number: RaiseRequest = serde_json::from_value(json!({"percentage": 10})).unwrap();
        assert_eq!(from_string.percentage, Decimal::new(4124, 2));
        assert_eq!(from_number.percentage, Decimal::TEN);
    }
}
