use crate::model::DashboardStats;
use crate::model::attendance::AttendanceStatus;
use chrono::{Local, NaiveDate};
use sqlx::SqlitePool;

async fn count_today(
    pool: &SqlitePool,
    today: NaiveDate,
    status: AttendanceStatus,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?")
        .bind(today)
        .bind(status)
        .fetch_one(pool)
        .await
}

/// Four independent counts, computed fresh on every call. "Today" is the
/// server's local calendar date at the moment of the request.
pub async fn dashboard_stats(pool: &SqlitePool) -> Result<DashboardStats, sqlx::Error> {
    let today = Local::now().date_naive();

    let total_employees = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;

    Ok(DashboardStats {
        total_employees,
        present_today: count_today(pool, today, AttendanceStatus::Present).await?,
        absent_today: count_today(pool, today, AttendanceStatus::Absent).await?,
        leave_today: count_today(pool, today, AttendanceStatus::Leave).await?,
    })
}
