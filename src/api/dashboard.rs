use crate::error::ApiError;
use crate::model::DashboardStats;
use crate::store;
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

/// Dashboard Stats
///
/// Total head count plus today's attendance broken down by status.
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    responses(
        (status = 200, description = "Current dashboard counters", body = DashboardStats),
    ),
    tag = "Dashboard"
)]
pub async fn stats(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let stats = store::dashboard::dashboard_stats(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(stats))
}
