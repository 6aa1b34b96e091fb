//! API server state

use std::sync::Arc;

use crate::storage::EmployeeStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Backing employee store
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}
