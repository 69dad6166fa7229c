use std::{fmt::Display, str::FromStr, time::Duration};

/// Settings read from the environment (and `.env`, if present).
/// Address and port are Rocket's own `ROCKET_*` settings.
pub struct Config {
    /// Scores are kept in memory when no database is configured.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub session_key_length: usize,
    /// Sessions without a move for this long are dropped.
    pub session_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self {
            database_url: dotenv::var("DATABASE_URL").ok(),
            max_connections: try_load("DATABASE_MAX_CONNECTIONS", 5),
            session_key_length: try_load("SESSION_KEY_LENGTH", 16),
            session_timeout: Duration::from_secs(try_load("SESSION_TIMEOUT", 3600)),
        }
    }
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match dotenv::var(key) {
        Err(_) => default,
        Ok(value) => value.parse().unwrap_or_else(|error| {
            tracing::warn!("invalid {key} value {value:?}: {error}, using default: {default}");
            default
        }),
    }
}
