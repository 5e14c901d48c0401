use crate::error::ApiError;
use crate::model::employee::{Employee, NewEmployee};
use crate::store;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Rows to skip from the start of the list
    pub skip: Option<i64>,
    /// Page size cap
    pub limit: Option<i64>,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Duplicate email or employee ID, or validation failure"),
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<NewEmployee>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    // Look-before-write so each duplicate field gets its own message.
    if store::employee::get_employee_by_email(pool.get_ref(), &payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    if store::employee::get_employee_by_code(pool.get_ref(), &payload.employee_id)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Employee ID already exists".to_string()));
    }

    let employee = store::employee::create_employee(pool.get_ref(), &payload).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    params(ListQuery),
    responses(
        (status = 200, description = "Employee list", body = [Employee]),
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    pool: web::Data<SqlitePool>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(100);

    let employees = store::employee::list_employees(pool.get_ref(), skip, limit).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id", Path, description = "Internal employee id")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found"),
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    match store::employee::get_employee(pool.get_ref(), id).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(ApiError::NotFound("Employee not found".to_string())),
    }
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id", Path, description = "Internal employee id")),
    responses(
        (status = 200, description = "Deleted employee returned", body = Employee),
        (status = 404, description = "Employee not found"),
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    match store::employee::delete_employee(pool.get_ref(), id).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(ApiError::NotFound("Employee not found".to_string())),
    }
}
