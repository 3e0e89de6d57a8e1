pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::employee::Employee;

pub use memory::InMemoryEmployeeService;
pub use postgres::PgEmployeeService;

/// Storage operations the HTTP handlers delegate to.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Stores a new employee. Any identifier on the input is ignored.
    async fn create(&self, employee: Employee) -> Result<Employee, AppError>;

    /// All employees, ordered by identifier.
    async fn list(&self) -> Result<Vec<Employee>, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    /// Replaces the record identified by `employee.id`.
    async fn update(&self, employee: Employee) -> Result<Employee, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
