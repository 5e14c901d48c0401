use crate::api::{attendance, dashboard, employee};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/dashboard/stats").route(web::get().to(dashboard::stats)))
        .service(
            web::scope("/employees")
                // /employees
                .service(
                    web::resource("")
                        .route(web::post().to(employee::create_employee))
                        .route(web::get().to(employee::list_employees)),
                )
                // /employees/{id}
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(employee::get_employee))
                        .route(web::delete().to(employee::delete_employee)),
                ),
        )
        .service(
            web::scope("/attendance")
                // /attendance
                .service(
                    web::resource("")
                        .route(web::post().to(attendance::mark_attendance))
                        .route(web::get().to(attendance::list_attendance)),
                )
                // /attendance/{employee_id}
                .service(
                    web::resource("/{employee_id}")
                        .route(web::get().to(attendance::list_by_employee)),
                ),
        );
}

#[cfg(test)]
mod tests {
    use super::configure;
    use crate::model::attendance::{Attendance, AttendanceStatus};
    use crate::model::employee::Employee;
    use crate::store::{self, testing};
    use actix_web::middleware::NormalizePath;
    use actix_web::web::Data;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    macro_rules! app {
        ($pool:expr) => {
            test::init_service(
                App::new()
                    .wrap(NormalizePath::trim())
                    .app_data(Data::new($pool.clone()))
                    .configure(configure),
            )
            .await
        };
    }

    fn employee_body(code: &str, email: &str) -> Value {
        json!({
            "employee_id": code,
            "full_name": "John Doe",
            "email": email,
            "department": "Engineering",
            "designation": "Backend Developer",
            "joined_date": "2024-01-01"
        })
    }

    macro_rules! post_employee {
        ($app:expr, $body:expr) => {
            test::call_service(
                &$app,
                test::TestRequest::post()
                    .uri("/employees")
                    .set_json($body)
                    .to_request(),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_employee_returns_created_record() {
        let pool = testing::pool().await;
        let app = app!(pool);

        let resp = post_employee!(app, employee_body("EMP-001", "john@company.com"));
        assert_eq!(resp.status(), 201);

        let created: Employee = test::read_body_json(resp).await;
        assert_eq!(created.employee_id, "EMP-001");
        assert_eq!(created.email, "john@company.com");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/employees/{}", created.id))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let fetched: Employee = test::read_body_json(resp).await;
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.full_name, "John Doe");
    }

    #[actix_web::test]
    async fn duplicate_email_and_code_are_rejected_with_distinct_messages() {
        let pool = testing::pool().await;
        let app = app!(pool);

        let resp = post_employee!(app, employee_body("EMP-001", "john@company.com"));
        assert_eq!(resp.status(), 201);

        let resp = post_employee!(app, employee_body("EMP-002", "john@company.com"));
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Email already registered");

        let resp = post_employee!(app, employee_body("EMP-001", "jane@company.com"));
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Employee ID already exists");
    }

    #[actix_web::test]
    async fn malformed_email_gets_field_level_error() {
        let pool = testing::pool().await;
        let app = app!(pool);

        let resp = post_employee!(app, employee_body("EMP-001", "not-an-email"));
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Validation failed");
        assert!(body["errors"]["email"].is_array());
    }

    #[actix_web::test]
    async fn unknown_employee_is_404() {
        let pool = testing::pool().await;
        let app = app!(pool);

        for req in [
            test::TestRequest::get().uri("/employees/99").to_request(),
            test::TestRequest::delete().uri("/employees/99").to_request(),
            test::TestRequest::get().uri("/attendance/99").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 404);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Employee not found");
        }
    }

    #[actix_web::test]
    async fn mark_for_unknown_employee_creates_nothing() {
        let pool = testing::pool().await;
        let app = app!(pool);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/attendance")
                .set_json(json!({
                    "employee_id": 77,
                    "date": "2024-01-15",
                    "status": "Present"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 404);

        assert!(
            store::attendance::list_attendance(&pool, 0, 100, None)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[actix_web::test]
    async fn remarking_a_day_replaces_the_status() {
        let pool = testing::pool().await;
        let app = app!(pool);

        let resp = post_employee!(app, employee_body("EMP-001", "john@company.com"));
        let emp: Employee = test::read_body_json(resp).await;

        let mark = |status: &str| {
            json!({
                "employee_id": emp.id,
                "date": "2024-01-15",
                "status": status
            })
        };

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/attendance")
                .set_json(mark("Present"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/attendance")
                .set_json(mark("Absent"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let updated: Attendance = test::read_body_json(resp).await;
        assert_eq!(updated.status, AttendanceStatus::Absent);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/attendance/{}", emp.id))
                .to_request(),
        )
        .await;
        let records: Vec<Attendance> = test::read_body_json(resp).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AttendanceStatus::Absent);
    }

    #[actix_web::test]
    async fn status_outside_the_enumeration_is_rejected() {
        let pool = testing::pool().await;
        let app = app!(pool);

        let resp = post_employee!(app, employee_body("EMP-001", "john@company.com"));
        let emp: Employee = test::read_body_json(resp).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/attendance")
                .set_json(json!({
                    "employee_id": emp.id,
                    "date": "2024-01-15",
                    "status": "Vacation"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn attendance_list_filters_by_date_and_handles_trailing_slash() {
        let pool = testing::pool().await;
        let app = app!(pool);

        let resp = post_employee!(app, employee_body("EMP-001", "john@company.com"));
        let emp: Employee = test::read_body_json(resp).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/attendance/")
                .set_json(json!({
                    "employee_id": emp.id,
                    "date": "2024-01-15",
                    "status": "Leave"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/attendance/?date=2024-01-15")
                .to_request(),
        )
        .await;
        let hits: Vec<Attendance> = test::read_body_json(resp).await;
        assert_eq!(hits.len(), 1);

        // Zero matches is an empty list, not an error.
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/attendance?date=2030-06-01")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let misses: Vec<Attendance> = test::read_body_json(resp).await;
        assert!(misses.is_empty());
    }

    #[actix_web::test]
    async fn delete_returns_record_and_second_delete_is_404() {
        let pool: SqlitePool = testing::pool().await;
        let app = app!(pool);

        let resp = post_employee!(app, employee_body("EMP-001", "john@company.com"));
        let emp: Employee = test::read_body_json(resp).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/employees/{}", emp.id))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let deleted: Employee = test::read_body_json(resp).await;
        assert_eq!(deleted.id, emp.id);

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/employees/{}", emp.id))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn dashboard_stats_counts_todays_marks() {
        let pool = testing::pool().await;
        let app = app!(pool);
        let today = chrono::Local::now().date_naive();

        let mut ids = Vec::new();
        for i in 1..=3 {
            let resp = post_employee!(
                app,
                employee_body(&format!("EMP-{i:03}"), &format!("emp{i}@company.com"))
            );
            let emp: Employee = test::read_body_json(resp).await;
            ids.push(emp.id);
        }

        for (id, status) in [(ids[0], "Present"), (ids[1], "Present"), (ids[2], "Absent")] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/attendance")
                    .set_json(json!({
                        "employee_id": id,
                        "date": today,
                        "status": status
                    }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), 200);
        }

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/dashboard/stats").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);
        let stats: Value = test::read_body_json(resp).await;
        assert_eq!(
            stats,
            json!({
                "total_employees": 3,
                "present_today": 2,
                "absent_today": 1,
                "leave_today": 0
            })
        );
    }
}
