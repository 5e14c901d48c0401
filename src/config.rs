use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            // Falls back to an embedded file-backed store when unset.
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://hrms.db".to_string()),
        }
    }
}
