use crate::error::ApiError;
use crate::model::attendance::{Attendance, MarkAttendance};
use crate::store;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AttendanceQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    /// Restrict to records on exactly this date
    pub date: Option<NaiveDate>,
}

/// Mark Attendance
///
/// Upserts the record for (employee, date): marking the same day twice
/// overwrites the status rather than adding a second row.
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 200, description = "Attendance recorded", body = Attendance),
        (status = 404, description = "Employee not found"),
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    if store::employee::get_employee(pool.get_ref(), payload.employee_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    let record = store::attendance::mark_attendance(pool.get_ref(), &payload).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// List Attendance
#[utoipa::path(
    get,
    path = "/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance list", body = [Attendance]),
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(100);

    let records =
        store::attendance::list_attendance(pool.get_ref(), skip, limit, query.date).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// List Attendance for one Employee
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(("employee_id", Path, description = "Internal employee id")),
    responses(
        (status = 200, description = "Attendance for the employee", body = [Attendance]),
        (status = 404, description = "Employee not found"),
    ),
    tag = "Attendance"
)]
pub async fn list_by_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    if store::employee::get_employee(pool.get_ref(), employee_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    let records = store::attendance::list_by_employee(pool.get_ref(), employee_id).await?;
    Ok(HttpResponse::Ok().json(records))
}
