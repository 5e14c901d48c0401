use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of daily attendance states. Stored as TEXT, serialized verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 7,
        "employee_id": 1,
        "date": "2024-01-15",
        "status": "Present"
    })
)]
pub struct Attendance {
    #[schema(example = 7)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: AttendanceStatus,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2024-01-15", format = "date", value_type = String)]
    pub date: NaiveDate,

    pub status: AttendanceStatus,
}
