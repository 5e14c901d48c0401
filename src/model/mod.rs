pub mod attendance;
pub mod employee;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[schema(
    example = json!({
        "total_employees": 12,
        "present_today": 9,
        "absent_today": 2,
        "leave_today": 1
    })
)]
pub struct DashboardStats {
    pub total_employees: i64,
    pub present_today: i64,
    pub absent_today: i64,
    pub leave_today: i64,
}
