/// Local file database used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:/tmp/test.db?mode=rwc";

/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// Database connection URL (Postgres or SQLite). Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `PORT`.
    pub port: u16,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}
