use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

pub async fn init_db(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .context("Failed to connect to database")?;

    create_schema(&pool).await.context("Failed to initialize schema")?;
    Ok(pool)
}

/// Bootstraps both tables on startup. The UNIQUE constraints back up the
/// application-layer duplicate checks, so concurrent creates cannot slip
/// past the pre-insert lookups.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id TEXT NOT NULL UNIQUE,
            full_name   TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            department  TEXT NOT NULL,
            designation TEXT,
            joined_date DATE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
            date        DATE NOT NULL,
            status      TEXT NOT NULL,
            UNIQUE (employee_id, date)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
