use crate::model::employee::{Employee, NewEmployee};
use sqlx::SqlitePool;
use tracing::debug;

pub async fn get_employee(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Pre-insert uniqueness lookup; a miss is not an error.
pub async fn get_employee_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Same contract as [`get_employee_by_email`], keyed on the external code.
pub async fn get_employee_by_code(
    pool: &SqlitePool,
    code: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE employee_id = ?")
        .bind(code)
        .fetch_optional(pool)
        .await
}

pub async fn list_employees(
    pool: &SqlitePool,
    skip: i64,
    limit: i64,
) -> Result<Vec<Employee>, sqlx::Error> {
    debug!(skip, limit, "Fetching employees");

    sqlx::query_as::<_, Employee>("SELECT * FROM employees LIMIT ? OFFSET ?")
        .bind(limit.max(0))
        .bind(skip.max(0))
        .fetch_all(pool)
        .await
}

/// Inserts the candidate and re-reads the row so the caller gets the record
/// exactly as persisted, assigned id included. Uniqueness is the caller's
/// job; the schema constraints are only a backstop.
pub async fn create_employee(
    pool: &SqlitePool,
    new: &NewEmployee,
) -> Result<Employee, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO employees
        (employee_id, full_name, email, department, designation, joined_date)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.employee_id)
    .bind(&new.full_name)
    .bind(&new.email)
    .bind(&new.department)
    .bind(&new.designation)
    .bind(new.joined_date)
    .execute(pool)
    .await?;

    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await
}

/// Hard delete. Returns the removed record, or `None` when the id is unknown
/// (the table is left untouched). Attendance rows cascade with the row.
pub async fn delete_employee(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    let Some(employee) = get_employee(pool, id).await? else {
        return Ok(None);
    };

    sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(Some(employee))
}
