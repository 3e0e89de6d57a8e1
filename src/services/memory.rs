use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::{AppError, DUPLICATE_EMAIL};
use crate::models::employee::Employee;
use crate::services::EmployeeService;

#[derive(Default)]
struct Store {
    employees: BTreeMap<i64, Employee>,
    last_id: i64,
}

impl Store {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.employees
            .values()
            .any(|e| e.email == email && e.id != except)
    }
}

/// Keeps employees in process memory. Used when no database is configured.
#[derive(Default)]
pub struct InMemoryEmployeeService {
    store: RwLock<Store>,
}

impl InMemoryEmployeeService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeService for InMemoryEmployeeService {
    async fn create(&self, employee: Employee) -> Result<Employee, AppError> {
        let mut store = self.store.write().await;

        if store.email_taken(&employee.email, None) {
            return Err(AppError::DatabaseError(DUPLICATE_EMAIL.to_string()));
        }

        store.last_id += 1;
        let id = store.last_id;
        let created = employee.with_id(id);
        store.employees.insert(id, created.clone());

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let store = self.store.read().await;
        Ok(store.employees.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let store = self.store.read().await;
        Ok(store.employees.get(&id).cloned())
    }

    async fn update(&self, employee: Employee) -> Result<Employee, AppError> {
        let id = employee
            .id
            .ok_or_else(|| AppError::BadRequest("Employee id is required for update".to_string()))?;

        let mut store = self.store.write().await;

        if !store.employees.contains_key(&id) {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }
        if store.email_taken(&employee.email, Some(id)) {
            return Err(AppError::DatabaseError(DUPLICATE_EMAIL.to_string()));
        }

        store.employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.store.write().await.employees.remove(&id);
        Ok(())
    }
}
