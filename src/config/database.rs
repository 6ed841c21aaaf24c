use crate::core::{AppError, Result};
use serde::Deserialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;
use std::time::Duration;

/// Connections kept open while idle
pub const DEFAULT_POOL_SIZE: u32 = 5;
/// Upper bound on open connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
const IDLE_TIMEOUT: Duration = Duration::from_secs(10 * 60);
const MAX_LIFETIME: Duration = Duration::from_secs(30 * 60);

/// Where the revenue, billing and review tables live
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
}

fn count_from_env(key: &str, default: u32) -> Result<u32> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}: '{}'", key, raw))),
        Err(_) => Ok(default),
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Configuration("DATABASE_URL not set".to_string()))?;

        Ok(Self {
            url,
            pool_size: count_from_env("DATABASE_POOL_SIZE", DEFAULT_POOL_SIZE)?,
            max_connections: count_from_env("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        })
    }

    /// Pool settings without connecting
    pub fn pool_options(&self) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .idle_timeout(IDLE_TIMEOUT)
            .max_lifetime(MAX_LIFETIME)
            .test_before_acquire(true)
    }

    /// Connect the pool shared by every repository
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        let pool = self.pool_options().connect(&self.url).await?;
        tracing::debug!(
            min = self.pool_size,
            max = self.max_connections,
            "MySQL pool connected"
        );
        Ok(pool)
    }
}
