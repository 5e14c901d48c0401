pub mod attendance;
pub mod dashboard;
pub mod employee;

#[cfg(test)]
pub(crate) mod testing {
    use crate::model::employee::NewEmployee;
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory database with the real schema. Single connection, otherwise
    /// every pooled connection would see its own empty `:memory:` store.
    pub async fn pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::create_schema(&pool).await.unwrap();
        pool
    }

    pub fn new_employee(code: &str, email: &str) -> NewEmployee {
        NewEmployee {
            employee_id: code.to_string(),
            full_name: "John Doe".to_string(),
            email: email.to_string(),
            department: "Engineering".to_string(),
            designation: Some("Backend Developer".to_string()),
            joined_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
        }
    }
}
