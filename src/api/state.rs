//! Application state for the HR engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{FrenchPublicHolidays, HolidayCalendar};
use crate::config::ConfigLoader;
use crate::services::{HiringService, PerformanceService};
use crate::store::{EmployeeStore, InMemoryEmployeeStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded company configuration, the employee store, the holiday calendar
/// and the services built over them.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn EmployeeStore>,
    calendar: Arc<dyn HolidayCalendar>,
    hiring: Arc<HiringService<dyn EmployeeStore>>,
    performance: Arc<PerformanceService<dyn EmployeeStore>>,
}

impl AppState {
    /// Creates a state over an empty in-memory store and the French
    /// public holidays.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config, Arc::new(InMemoryEmployeeStore::new()))
    }

    /// Creates a state over the given store.
    pub fn with_store(config: ConfigLoader, store: Arc<dyn EmployeeStore>) -> Self {
        let config = Arc::new(config);
        let hiring = HiringService::new(Arc::clone(&store), Arc::clone(&config));
        let performance = PerformanceService::new(Arc::clone(&store), Arc::clone(&config));
        Self {
            config,
            store,
            calendar: Arc::new(FrenchPublicHolidays),
            hiring: Arc::new(hiring),
            performance: Arc::new(performance),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the employee store.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }

    /// Returns the public holiday calendar.
    pub fn calendar(&self) -> &dyn HolidayCalendar {
        self.calendar.as_ref()
    }

    /// Returns the hiring service.
    pub fn hiring(&self) -> &HiringService<dyn EmployeeStore> {
        &self.hiring
    }

    /// Returns the performance review service.
    pub fn performance(&self) -> &PerformanceService<dyn EmployeeStore> {
        &self.performance
    }
}
