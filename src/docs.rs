use crate::model::DashboardStats;
use crate::model::attendance::{Attendance, AttendanceStatus, MarkAttendance};
use crate::model::employee::{Employee, NewEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

Backend API for the HRMS Lite application.

### 🔹 Key Features
- **Employee Management**
  - Create, list, view, and delete employee records
- **Attendance Management**
  - Mark daily attendance (one record per employee per day; re-marking a day updates it)
- **Dashboard**
  - Head count plus today's Present/Absent/Leave counters

### 📦 Response Format
- JSON-based RESTful responses
- `skip`/`limit` paging on list endpoints

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::dashboard::stats,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::list_by_employee,
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            Attendance,
            AttendanceStatus,
            MarkAttendance,
            DashboardStats
        )
    ),
    tags(
        (name = "Dashboard", description = "Dashboard counter APIs"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;
