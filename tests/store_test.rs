//! Store-level integration tests

use roster::storage::json_file::JsonFileStore;
use roster::storage::{create_store, EmployeeStore, StoreConfig};
use roster::types::Employee;
use tempfile::TempDir;

fn employee(id: &str, name: &str, salary: f64) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        department: "Engineering".to_string(),
        position: "Developer".to_string(),
        employee_id: 7,
        salary,
        start_date: "2023-06-15".to_string(),
    }
}

#[tokio::test]
async fn collection_survives_store_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("employees.json");

    let employees = vec![
        employee("a", "Alice", 50000.0),
        employee("b", "Bob", 55000.0),
        employee("c", "Carol", 60000.0),
    ];

    {
        let store = JsonFileStore::new(&path).unwrap();
        store.write_all(&employees).await.unwrap();
    }

    // A fresh store instance over the same path sees the same collection
    let store = JsonFileStore::new(&path).unwrap();
    assert_eq!(store.read_all().await.unwrap(), employees);
}

#[tokio::test]
async fn rewrite_replaces_the_whole_document() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("employees.json")).unwrap();

    store
        .write_all(&[employee("a", "Alice", 50000.0), employee("b", "Bob", 55000.0)])
        .await
        .unwrap();
    store.write_all(&[employee("c", "Carol", 60000.0)]).await.unwrap();

    let read_back = store.read_all().await.unwrap();
    assert_eq!(read_back.len(), 1);
    assert_eq!(read_back[0].id, "c");
}

#[tokio::test]
async fn create_store_builds_the_configured_backend() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested/dir/employees.json");

    let store = create_store(StoreConfig::JsonFile {
        path: path.to_str().unwrap().to_string(),
    })
    .unwrap();

    // Parent directories are created eagerly
    assert!(path.parent().unwrap().exists());

    store.write_all(&[employee("a", "Alice", 50000.0)]).await.unwrap();
    assert_eq!(store.read_all().await.unwrap().len(), 1);

    let memory = create_store(StoreConfig::Memory).unwrap();
    assert!(memory.read_all().await.unwrap().is_empty());
}
