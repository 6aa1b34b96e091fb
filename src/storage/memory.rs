//! In-memory store backend

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::Employee;
use crate::Result;

use super::EmployeeStore;

/// In-memory store, used as a test fake and for ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    employees: RwLock<Vec<Employee>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn read_all(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.read().await.clone())
    }

    async fn write_all(&self, employees: &[Employee]) -> Result<()> {
        *self.employees.write().await = employees.to_vec();
        Ok(())
    }
}
