use crate::model::attendance::{Attendance, MarkAttendance};
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

pub async fn list_attendance(
    pool: &SqlitePool,
    skip: i64,
    limit: i64,
    date_filter: Option<NaiveDate>,
) -> Result<Vec<Attendance>, sqlx::Error> {
    let sql = if date_filter.is_some() {
        "SELECT * FROM attendance WHERE date = ? LIMIT ? OFFSET ?"
    } else {
        "SELECT * FROM attendance LIMIT ? OFFSET ?"
    };
    debug!(sql, skip, limit, ?date_filter, "Fetching attendance");

    let mut query = sqlx::query_as::<_, Attendance>(sql);
    if let Some(date) = date_filter {
        query = query.bind(date);
    }
    query
        .bind(limit.max(0))
        .bind(skip.max(0))
        .fetch_all(pool)
        .await
}

pub async fn list_by_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_all(pool)
        .await
}

/// Upsert keyed on (employee_id, date): a second mark for the same day
/// overwrites the status in place instead of inserting a duplicate row.
/// Look-then-write, not atomic; the UNIQUE constraint catches the race.
pub async fn mark_attendance(
    pool: &SqlitePool,
    mark: &MarkAttendance,
) -> Result<Attendance, sqlx::Error> {
    let existing = sqlx::query_as::<_, Attendance>(
        "SELECT * FROM attendance WHERE employee_id = ? AND date = ?",
    )
    .bind(mark.employee_id)
    .bind(mark.date)
    .fetch_optional(pool)
    .await?;

    if let Some(record) = existing {
        sqlx::query("UPDATE attendance SET status = ? WHERE id = ?")
            .bind(mark.status)
            .bind(record.id)
            .execute(pool)
            .await?;

        return sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE id = ?")
            .bind(record.id)
            .fetch_one(pool)
            .await;
    }

    let result = sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)")
        .bind(mark.employee_id)
        .bind(mark.date)
        .bind(mark.status)
        .execute(pool)
        .await?;

    sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await
}
