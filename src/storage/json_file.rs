//! JSON-file store backend

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::types::{Employee, EmployeeDocument};
use crate::{Error, Result};

use super::EmployeeStore;

/// File-backed store holding the whole collection in one pretty-printed
/// JSON document. Every read parses the full document and every write
/// rewrites it; there is no locking, so concurrent writers race and the
/// last one wins.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }
}

#[async_trait]
impl EmployeeStore for JsonFileStore {
    async fn read_all(&self) -> Result<Vec<Employee>> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            // Never-written store reads as empty
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::storage(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let document: EmployeeDocument = serde_json::from_slice(&data).map_err(|e| {
            Error::storage(format!("failed to parse {}: {}", self.path.display(), e))
        })?;

        Ok(document.employees)
    }

    async fn write_all(&self, employees: &[Employee]) -> Result<()> {
        let document = EmployeeDocument {
            employees: employees.to_vec(),
        };
        let data = serde_json::to_vec_pretty(&document)?;

        fs::write(&self.path, &data).await.map_err(|e| {
            Error::storage(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department: "Engineering".to_string(),
            position: "Analyst".to_string(),
            employee_id: 1,
            salary: 52000.0,
            start_date: "2024-01-01".to_string(),
        }
    }

    #[tokio::test]
    async fn round_trip_preserves_all_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("employees.json")).unwrap();

        let employees = vec![sample("a1"), sample("b2")];
        store.write_all(&employees).await.unwrap();

        let read_back = store.read_all().await.unwrap();
        assert_eq!(read_back, employees);
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("employees.json")).unwrap();

        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_document_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("employees.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = JsonFileStore::new(&path).unwrap();
        let err = store.read_all().await.unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[tokio::test]
    async fn document_uses_employees_root_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("employees.json");
        let store = JsonFileStore::new(&path).unwrap();

        store.write_all(&[sample("a1")]).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert!(raw["employees"].is_array());
        assert_eq!(raw["employees"][0]["employeeId"], 1);
        assert_eq!(raw["employees"][0]["startDate"], "2024-01-01");
    }
}
