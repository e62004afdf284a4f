//! Employee persistence.
//!
//! The services only see the [`EmployeeStore`] trait; the crate ships an
//! in-memory implementation used by the HTTP server and the tests.

mod memory;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Employee, Matricule};

pub use memory::InMemoryEmployeeStore;

/// Persistence operations the hiring and performance services rely on.
///
/// Implementations must be safe to share between request handlers.
#[cfg_attr(test, mockall::automock)]
pub trait EmployeeStore: Send + Sync {
    /// Returns the employee holding `matricule`, if any.
    fn find_by_matricule(&self, matricule: &Matricule) -> EngineResult<Option<Employee>>;

    /// Returns the greatest 5-digit suffix among matricules starting with
    /// `prefix`, e.g. `"12344"`.
    fn find_last_matricule_suffix(&self, prefix: char) -> EngineResult<Option<String>>;

    /// Returns the average performance of employees whose matricule starts
    /// with `prefix`; employees without a performance are ignored.
    fn average_performance(&self, prefix: char) -> EngineResult<Option<Decimal>>;

    /// Inserts or replaces the employee keyed by its `id`, assigning one when
    /// absent, and returns what was stored.
    fn save(&self, employee: Employee) -> EngineResult<Employee>;

    /// Returns every stored employee.
    fn list(&self) -> EngineResult<Vec<Employee>>;
}
