//! In-memory employee store.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, MATRICULE_DIGITS, Matricule};

use super::EmployeeStore;

/// An [`EmployeeStore`] keeping records in a map keyed by id.
///
/// Matricules are unique: saving a record whose matricule belongs to another
/// id fails with [`EngineError::AlreadyExists`], like a unique constraint.
///
/// # Example
///
/// ```
/// use hr_engine::config::CompanyPolicy;
/// use hr_engine::models::{Employee, Matricule};
/// use hr_engine::store::{EmployeeStore, InMemoryEmployeeStore};
///
/// let store = InMemoryEmployeeStore::new();
/// let mut employee = Employee::with_policy_defaults("Doe", "Jane", &CompanyPolicy::default());
/// employee.matricule = Some(Matricule::parse("T00123").unwrap());
///
/// let saved = store.save(employee).unwrap();
/// assert!(saved.id.is_some());
/// assert_eq!(store.find_last_matricule_suffix('T').unwrap().as_deref(), Some("00123"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    employees: RwLock<HashMap<String, Employee>>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, HashMap<String, Employee>>> {
        self.employees
            .read()
            .map_err(|_| EngineError::store("employee store lock poisoned"))
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, HashMap<String, Employee>>> {
        self.employees
            .write()
            .map_err(|_| EngineError::store("employee store lock poisoned"))
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn find_by_matricule(&self, matricule: &Matricule) -> EngineResult<Option<Employee>> {
        let employees = self.read()?;
        Ok(employees
            .values()
            .find(|e| e.matricule.as_ref() == Some(matricule))
            .cloned())
    }

    fn find_last_matricule_suffix(&self, prefix: char) -> EngineResult<Option<String>> {
        let employees = self.read()?;
        Ok(employees
            .values()
            .filter_map(|e| e.matricule)
            .filter(|m| m.prefix() == prefix)
            .map(|m| m.number())
            .max()
            .map(|number| format!("{:0width$}", number, width = MATRICULE_DIGITS)))
    }

    fn average_performance(&self, prefix: char) -> EngineResult<Option<Decimal>> {
        let employees = self.read()?;
        let scores: Vec<i32> = employees
            .values()
            .filter(|e| e.matricule.is_some_and(|m| m.prefix() == prefix))
            .filter_map(|e| e.performance)
            .collect();

        if scores.is_empty() {
            return Ok(None);
        }
        let total: i64 = scores.iter().map(|&s| i64::from(s)).sum();
        Ok(Some(Decimal::from(total) / Decimal::from(scores.len())))
    }

    fn save(&self, mut employee: Employee) -> EngineResult<Employee> {
        let mut employees = self.write()?;
        let id = employee
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();

        if let Some(matricule) = employee.matricule {
            let taken = employees
                .values()
                .any(|other| other.matricule == Some(matricule) && other.id.as_deref() != Some(&id));
            if taken {
                return Err(EngineError::AlreadyExists {
                    matricule: matricule.to_string(),
                });
            }
        }

        employees.insert(id, employee.clone());
        Ok(employee)
    }

    fn list(&self) -> EngineResult<Vec<Employee>> {
        let employees = self.read()?;
        let mut all: Vec<Employee> = employees.values().cloned().collect();
        all.sort_by_key(|e| e.matricule);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompanyPolicy;
    use std::str::FromStr;

    fn employee(matricule: &str, performance: i32) -> Employee {
        let mut employee = Employee::with_policy_defaults("Doe", "Jane", &CompanyPolicy::default());
        employee.matricule = Some(Matricule::parse(matricule).unwrap());
        employee.performance = Some(performance);
        employee
    }

    fn seeded(records: &[(&str, i32)]) -> InMemoryEmployeeStore {
        let store = InMemoryEmployeeStore::new();
        for (matricule, performance) in records {
            store.save(employee(matricule, *performance)).unwrap();
        }
        store
    }

    #[test]
    fn test_last_suffix_per_prefix() {
        let store = seeded(&[("M00123", 1), ("T00123", 2), ("A00123", 3), ("T00456", 1)]);

        assert_eq!(store.find_last_matricule_suffix('M').unwrap().as_deref(), Some("00123"));
        assert_eq!(store.find_last_matricule_suffix('T').unwrap().as_deref(), Some("00456"));
        assert_eq!(store.find_last_matricule_suffix('C').unwrap(), None);
    }

    #[test]
    fn test_last_suffix_on_empty_store() {
        let store = InMemoryEmployeeStore::new();
        assert_eq!(store.find_last_matricule_suffix('T').unwrap(), None);
    }

    #[test]
    fn test_average_performance_on_empty_store() {
        let store = InMemoryEmployeeStore::new();
        assert_eq!(store.average_performance('C').unwrap(), None);
    }

    #[test]
    fn test_average_performance_same_prefix() {
        let store = seeded(&[("M00001", 1), ("M00002", 2), ("M00003", 3)]);
        assert_eq!(store.average_performance('M').unwrap(), Some(Decimal::from(2)));
    }

    #[test]
    fn test_average_performance_ignores_other_prefixes() {
        let store = seeded(&[("T00123", 1), ("M00001", 2), ("M00002", 3)]);
        assert_eq!(
            store.average_performance('M').unwrap(),
            Some(Decimal::from_str("2.5").unwrap())
        );
        assert_eq!(store.average_performance('T').unwrap(), Some(Decimal::ONE));
    }

    #[test]
    fn test_average_performance_ignores_absent_scores() {
        let store = seeded(&[("C00001", 4)]);
        let mut unscored = employee("C00002", 0);
        unscored.performance = None;
        store.save(unscored).unwrap();

        assert_eq!(store.average_performance('C').unwrap(), Some(Decimal::from(4)));
    }

    #[test]
    fn test_save_assigns_id_and_upserts() {
        let store = InMemoryEmployeeStore::new();
        let mut saved = store.save(employee("C24355", 4)).unwrap();
        let id = saved.id.clone().unwrap();

        saved.performance = Some(9);
        let updated = store.save(saved).unwrap();

        assert_eq!(updated.id.as_deref(), Some(id.as_str()));
        assert_eq!(store.list().unwrap().len(), 1);
        let found = store
            .find_by_matricule(&Matricule::parse("C24355").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(found.performance, Some(9));
    }

    #[test]
    fn test_save_rejects_matricule_of_another_record() {
        let store = seeded(&[("T12345", 1)]);
        let result = store.save(employee("T12345", 1));

        assert!(matches!(result, Err(EngineError::AlreadyExists { matricule }) if matricule == "T12345"));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_matricule_absent() {
        let store = seeded(&[("T12345", 1)]);
        let found = store
            .find_by_matricule(&Matricule::parse("T12346").unwrap())
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_list_is_sorted_by_matricule() {
        let store = seeded(&[("T00002", 1), ("C00001", 1), ("M00003", 1)]);
        let matricules: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .filter_map(|e| e.matricule.map(|m| m.to_string()))
            .collect();
        assert_eq!(matricules, vec!["C00001", "M00003", "T00002"]);
    }
}
