use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::services::EmployeeService;

pub struct PgEmployeeService {
    pool: PgPool,
}

impl PgEmployeeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeService for PgEmployeeService {
    async fn create(&self, employee: Employee) -> Result<Employee, AppError> {
        let created = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (first_name, last_name, email) VALUES ($1, $2, $3) \
             RETURNING id, first_name, last_name, email",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, AppError> {
        let id = employee
            .id
            .ok_or_else(|| AppError::BadRequest("Employee id is required for update".to_string()))?;

        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET first_name = $1, last_name = $2, email = $3 WHERE id = $4 \
             RETURNING id, first_name, last_name, email",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
