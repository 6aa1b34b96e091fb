//! Store abstraction layer
//!
//! Provides a unified interface over the persisted employee document so a
//! real file-backed store and an in-memory fake are interchangeable.

use async_trait::async_trait;

use crate::types::Employee;
use crate::Result;

pub mod json_file;
pub mod memory;

/// Employee store trait
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Read the full collection. A store that has never been written to
    /// reads as empty; an unreadable or unparsable document is an error.
    async fn read_all(&self) -> Result<Vec<Employee>>;

    /// Overwrite the full collection in a single write.
    async fn write_all(&self, employees: &[Employee]) -> Result<()>;

    /// Produce a new record id: millisecond timestamp plus a short random
    /// base-36 suffix. Probabilistically unique, never checked against
    /// existing ids.
    fn generate_id(&self) -> String {
        let millis = chrono::Utc::now().timestamp_millis();
        let mut suffix = String::with_capacity(7);
        for _ in 0..7 {
            let digit = fastrand::u32(0..36);
            suffix.push(char::from_digit(digit, 36).unwrap_or('0'));
        }
        format!("{}{}", millis, suffix)
    }
}

/// Store configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    JsonFile { path: String },
    Memory,
}

/// Create a store backend from config
pub fn create_store(config: StoreConfig) -> Result<Box<dyn EmployeeStore>> {
    match config {
        StoreConfig::JsonFile { path } => {
            let backend = json_file::JsonFileStore::new(path)?;
            Ok(Box::new(backend))
        }
        StoreConfig::Memory => Ok(Box::new(memory::MemoryStore::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IdOnly;

    #[async_trait]
    impl EmployeeStore for IdOnly {
        async fn read_all(&self) -> Result<Vec<Employee>> {
            Ok(Vec::new())
        }

        async fn write_all(&self, _employees: &[Employee]) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn generated_ids_are_well_formed_and_distinct() {
        let store = IdOnly;
        let a = store.generate_id();
        let b = store.generate_id();

        assert_ne!(a, b);
        assert!(a.len() > 7);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        // Leading portion is the decimal millisecond timestamp
        let ts: String = a.chars().take(a.len() - 7).collect();
        assert!(ts.parse::<i64>().is_ok());
    }
}
