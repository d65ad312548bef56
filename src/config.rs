use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    /// Ceiling applied to the `limit` listing parameter.
    pub max_page_size: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://products.db?mode=rwc".into());
        let max_page_size = std::env::var("MAX_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(500);
        Self {
            database_url,
            max_page_size,
        }
    }
}
