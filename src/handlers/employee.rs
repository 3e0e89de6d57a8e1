use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::services::EmployeeService;

pub async fn create_employee(
    service: web::Data<dyn EmployeeService>,
    new_employee: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let created = service.create(new_employee.into_inner()).await?;
    info!("Created employee {:?}", created.id);

    Ok(HttpResponse::Created().json(created))
}

pub async fn get_employees(
    service: web::Data<dyn EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list().await?;
    debug!("Listing {} employees", employees.len());

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee_by_id(
    service: web::Data<dyn EmployeeService>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee_id = employee_id.into_inner();

    match service.get_by_id(employee_id).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => {
            debug!("Employee {} not found", employee_id);
            Ok(HttpResponse::NotFound().finish())
        }
    }
}

pub async fn update_employee(
    service: web::Data<dyn EmployeeService>,
    employee_id: web::Path<i64>,
    updates: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let employee_id = employee_id.into_inner();

    let saved = match service.get_by_id(employee_id).await? {
        Some(saved) => saved,
        None => {
            debug!("Employee {} not found, nothing to update", employee_id);
            return Ok(HttpResponse::NotFound().finish());
        }
    };

    // The row may have been deleted since the lookup above
    match service.update(saved.replaced_by(&updates)).await {
        Ok(updated) => {
            info!("Updated employee {}", employee_id);
            Ok(HttpResponse::Ok().json(updated))
        }
        Err(AppError::NotFound(_)) => {
            debug!("Employee {} vanished before update", employee_id);
            Ok(HttpResponse::NotFound().finish())
        }
        Err(err) => Err(err),
    }
}

pub async fn delete_employee(
    service: web::Data<dyn EmployeeService>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee_id = employee_id.into_inner();

    service.delete(employee_id).await?;
    info!("Deleted employee {}", employee_id);

    Ok(HttpResponse::Ok().finish())
}
