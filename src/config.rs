use std::env;

use tracing::info;

/// Process configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub rate_limit_max_requests: u32,
    pub rate_limit_window_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let port = env_or("PORT", 3000)?;
        let rate_limit_max_requests = env_or("RATE_LIMIT_MAX_REQUESTS", 100)?;
        let rate_limit_window_secs = env_or("RATE_LIMIT_WINDOW_SECS", 60)?;

        info!(
            port,
            rate_limit_max_requests, rate_limit_window_secs, "Configuration loaded"
        );

        Ok(Self {
            database_url,
            port,
            rate_limit_max_requests,
            rate_limit_window_secs,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {} value: {}", key, e)),
        Err(_) => Ok(default),
    }
}
