//! Hiring: matricule allocation and creation of new employees.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::today;
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{EducationLevel, Employee, MATRICULE_LIMIT, Matricule, Role};
use crate::store::EmployeeStore;

/// What HR supplies to hire someone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireRequest {
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Role, which fixes the matricule prefix.
    pub role: Role,
    /// Highest diploma, which scales the salary.
    pub education: EducationLevel,
    /// Share of a full-time contract, in (0, 1].
    pub contract_fraction: Decimal,
}

/// Hires employees, allocating sequential matricules per role prefix.
///
/// Allocation is serialized per role: the last-suffix lookup, the duplicate
/// check and the save of one hire never interleave with another hire of the
/// same role.
pub struct HiringService<S: ?Sized> {
    store: Arc<S>,
    config: Arc<ConfigLoader>,
    clock: fn() -> NaiveDate,
    allocation_locks: HashMap<Role, Mutex<()>>,
}

impl<S: EmployeeStore + ?Sized> HiringService<S> {
    /// Creates a service hiring with today's date.
    pub fn new(store: Arc<S>, config: Arc<ConfigLoader>) -> Self {
        Self::with_clock(store, config, today)
    }

    /// Creates a service taking the hire date from `clock`.
    pub fn with_clock(store: Arc<S>, config: Arc<ConfigLoader>, clock: fn() -> NaiveDate) -> Self {
        let allocation_locks = Role::ALL.into_iter().map(|role| (role, Mutex::new(()))).collect();
        Self {
            store,
            config,
            clock,
            allocation_locks,
        }
    }

    /// Hires an employee and returns the stored record.
    ///
    /// # Errors
    ///
    /// * [`EngineError::Validation`] for blank names or a contract fraction
    ///   outside (0, 1]; the store is not touched.
    /// * [`EngineError::RangeExhausted`] when the role's 99999 matricules
    ///   are all used.
    /// * [`EngineError::AlreadyExists`] when the allocated matricule is
    ///   already stored.
    ///
    /// No record is written when an error is returned.
    pub fn hire(&self, request: HireRequest) -> EngineResult<Employee> {
        validate(&request)?;

        let role = request.role;
        let prefix = role.prefix();
        let _allocation = self.allocation_locks[&role]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let last_number = match self.store.find_last_matricule_suffix(prefix)? {
            Some(suffix) => suffix.parse::<u32>().map_err(|_| {
                EngineError::store(format!(
                    "invalid matricule suffix '{}' for prefix '{}'",
                    suffix, prefix
                ))
            })?,
            None => 0,
        };

        let next_number = last_number.saturating_add(1);
        if next_number >= MATRICULE_LIMIT {
            warn!(%prefix, last_number, "Matricule range exhausted");
            return Err(EngineError::RangeExhausted {
                limit: MATRICULE_LIMIT,
            });
        }
        let matricule = Matricule::new(prefix, next_number)?;

        if self.store.find_by_matricule(&matricule)?.is_some() {
            warn!(%matricule, "Matricule already allocated");
            return Err(EngineError::AlreadyExists {
                matricule: matricule.to_string(),
            });
        }

        let salary =
            self.config
                .hiring_salary(role, request.education, request.contract_fraction)?;

        let employee = Employee {
            id: None,
            last_name: request.last_name,
            first_name: request.first_name,
            matricule: Some(matricule),
            hire_date: Some((self.clock)()),
            salary,
            performance: Some(self.config.policy().base_performance),
            contract_fraction: request.contract_fraction,
        };

        let saved = self.store.save(employee)?;
        info!(
            %matricule,
            %role,
            education = %request.education,
            salary = %saved.salary,
            "Hired employee"
        );
        Ok(saved)
    }
}

fn validate(request: &HireRequest) -> EngineResult<()> {
    if request.last_name.trim().is_empty() {
        return Err(EngineError::validation("last name cannot be blank"));
    }
    if request.first_name.trim().is_empty() {
        return Err(EngineError::validation("first name cannot be blank"));
    }
    if request.contract_fraction <= Decimal::ZERO || request.contract_fraction > Decimal::ONE {
        return Err(EngineError::validation("contract fraction must be in (0, 1]"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryEmployeeStore, MockEmployeeStore};
    use mockall::predicate::eq;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hire_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 9, 2).unwrap()
    }

    fn request(role: Role, education: EducationLevel, fraction: &str) -> HireRequest {
        HireRequest {
            last_name: "Neymar".to_string(),
            first_name: "Jean".to_string(),
            role,
            education,
            contract_fraction: dec(fraction),
        }
    }

    fn service<S: EmployeeStore>(store: S) -> HiringService<S> {
        HiringService::with_clock(Arc::new(store), Arc::new(ConfigLoader::default()), hire_day)
    }

    fn store_with_last_suffix(prefix: char, suffix: Option<&'static str>) -> MockEmployeeStore {
        let mut store = MockEmployeeStore::new();
        store
            .expect_find_last_matricule_suffix()
            .with(eq(prefix))
            .times(1)
            .returning(move |_| Ok(suffix.map(str::to_string)));
        store
    }

    #[test]
    fn test_hire_technician_cap_full_time() {
        let mut store = store_with_last_suffix('T', Some("12344"));
        store
            .expect_find_by_matricule()
            .withf(|m| m.to_string() == "T12345")
            .times(1)
            .returning(|_| Ok(None));
        store.expect_save().times(1).returning(Ok);

        let employee = service(store)
            .hire(request(Role::Technician, EducationLevel::Cap, "1.0"))
            .unwrap();

        assert_eq!(employee.last_name, "Neymar");
        assert_eq!(employee.first_name, "Jean");
        assert_eq!(employee.contract_fraction, dec("1.0"));
        assert_eq!(employee.matricule.unwrap().to_string(), "T12345");
        assert_eq!(employee.salary, dec("1521.22"));
        assert_eq!(employee.hire_date, Some(hire_day()));
        assert_eq!(employee.performance, Some(1));
    }

    #[test]
    fn test_hire_first_technician() {
        let mut store = store_with_last_suffix('T', None);
        store
            .expect_find_by_matricule()
            .withf(|m| m.to_string() == "T00001")
            .times(1)
            .returning(|_| Ok(None));
        store.expect_save().times(1).returning(Ok);

        let employee = service(store)
            .hire(request(Role::Technician, EducationLevel::Cap, "1.0"))
            .unwrap();

        assert_eq!(employee.matricule.unwrap().to_string(), "T00001");
    }

    #[test]
    fn test_hire_manager_master_half_time() {
        let mut store = store_with_last_suffix('M', Some("12344"));
        store
            .expect_find_by_matricule()
            .withf(|m| m.to_string() == "M12345")
            .times(1)
            .returning(|_| Ok(None));
        store.expect_save().times(1).returning(Ok);

        let employee = service(store)
            .hire(request(Role::Manager, EducationLevel::Master, "0.5"))
            .unwrap();

        assert_eq!(employee.matricule.unwrap().to_string(), "M12345");
        assert_eq!(employee.salary, dec("1064.854"));
        assert_eq!(employee.contract_fraction, dec("0.5"));
    }

    #[test]
    fn test_hire_existing_matricule_fails_without_saving() {
        let mut store = store_with_last_suffix('T', Some("12344"));
        store.expect_find_by_matricule().times(1).returning(|_| {
            Ok(Some(Employee::with_policy_defaults(
                "Bruel",
                "Patrick",
                &crate::config::CompanyPolicy::default(),
            )))
        });
        store.expect_save().never();

        let result = service(store).hire(request(Role::Technician, EducationLevel::Cap, "1.0"));

        let error = result.unwrap_err();
        assert!(matches!(error, EngineError::AlreadyExists { .. }));
        assert_eq!(error.to_string(), "employee with matricule T12345 already exists");
    }

    #[test]
    fn test_hire_when_range_exhausted_fails_without_saving() {
        let mut store = store_with_last_suffix('M', Some("99999"));
        store.expect_find_by_matricule().never();
        store.expect_save().never();

        let result = service(store).hire(request(Role::Manager, EducationLevel::Master, "0.5"));

        let error = result.unwrap_err();
        assert!(matches!(error, EngineError::RangeExhausted { limit: 100_000 }));
        assert!(error.to_string().contains("matricule range exhausted"));
    }

    #[test]
    fn test_hire_rejects_invalid_contract_fraction_before_store_access() {
        for fraction in ["0", "-0.5", "1.01"] {
            let mut store = MockEmployeeStore::new();
            store.expect_find_last_matricule_suffix().never();
            store.expect_find_by_matricule().never();
            store.expect_save().never();

            let result = service(store).hire(request(Role::Technician, EducationLevel::Cap, fraction));
            match result {
                Err(EngineError::Validation { message }) => {
                    assert_eq!(message, "contract fraction must be in (0, 1]")
                }
                other => panic!("Expected validation error for {}, got {:?}", fraction, other),
            }
        }
    }

    #[test]
    fn test_hire_rejects_blank_names() {
        let mut store = MockEmployeeStore::new();
        store.expect_save().never();
        let service = service(store);

        let mut blank_last = request(Role::Commercial, EducationLevel::Bac, "1");
        blank_last.last_name = "  ".to_string();
        assert_eq!(
            service.hire(blank_last).unwrap_err().to_string(),
            "last name cannot be blank"
        );

        let mut blank_first = request(Role::Commercial, EducationLevel::Bac, "1");
        blank_first.first_name = String::new();
        assert_eq!(
            service.hire(blank_first).unwrap_err().to_string(),
            "first name cannot be blank"
        );
    }

    #[test]
    fn test_hire_rejects_corrupt_suffix() {
        let mut store = store_with_last_suffix('C', Some("12a45"));
        store.expect_save().never();

        let result = service(store).hire(request(Role::Commercial, EducationLevel::Bac, "1"));
        assert!(matches!(result, Err(EngineError::Store { .. })));
    }

    #[test]
    fn test_sequential_hires_with_in_memory_store() {
        let service = service(InMemoryEmployeeStore::new());

        let first = service
            .hire(request(Role::Commercial, EducationLevel::Bac, "1"))
            .unwrap();
        let second = service
            .hire(request(Role::Commercial, EducationLevel::Bac, "1"))
            .unwrap();
        let technician = service
            .hire(request(Role::Technician, EducationLevel::Bac, "1"))
            .unwrap();

        assert_eq!(first.matricule.unwrap().to_string(), "C00001");
        assert_eq!(second.matricule.unwrap().to_string(), "C00002");
        assert_eq!(technician.matricule.unwrap().to_string(), "T00001");
        assert!(first.id.is_some());
        assert_eq!(first.salary, dec("1673.342"));
    }

    #[test]
    fn test_concurrent_hires_never_share_a_matricule() {
        let service = service(InMemoryEmployeeStore::new());
        let hires_per_thread = 25;
        let threads = 8;

        let matricules: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    scope.spawn(|| {
                        (0..hires_per_thread)
                            .map(|_| {
                                service
                                    .hire(request(Role::Technician, EducationLevel::Cap, "1"))
                                    .unwrap()
                                    .matricule
                                    .unwrap()
                                    .to_string()
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        let unique: HashSet<&String> = matricules.iter().collect();
        assert_eq!(matricules.len(), threads * hires_per_thread);
        assert_eq!(unique.len(), matricules.len());
        assert!(unique.contains(&format!("T{:05}", threads * hires_per_thread)));
    }
}
