//! Runtime configuration for the decklog server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Access-token lifetime (minutes).
    pub access_token_minutes: i64,
    /// Refresh-token lifetime in Redis (seconds).
    pub refresh_ttl: u64,
    /// Postgres pool size.
    pub db_pool_size: u32,
}

impl Settings {
    fn from_env() -> Self {
        let access_token_minutes = env::var("ACCESS_TOKEN_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(15);

        let refresh_ttl = env::var("REFRESH_TTL")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30 * 24 * 3_600); // 30 days default

        let db_pool_size = env::var("DB_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);

        Settings {
            access_token_minutes,
            refresh_ttl,
            db_pool_size,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
