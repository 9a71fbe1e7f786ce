//! Runtime configuration for the training tracker server.

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

#[derive(Debug)]
pub struct Settings {
    /// SQLite file backing every table.
    pub database_path: String,
    /// Address the HTTP server binds to.
    pub server_addr: String,
    /// Upper bound on pooled SQLite connections.
    pub max_connections: u32,
    /// Time allowed for a client to send the request head.
    pub read_timeout: Duration,
    /// Time allowed for a client to drain the response before disconnect.
    pub write_timeout: Duration,
    /// Keep-alive window for idle connections.
    pub idle_timeout: Duration,
    /// Grace period for in-flight requests on shutdown.
    pub shutdown_grace: Duration,
    /// Largest JSON body accepted; media uploads travel inline as base64.
    pub max_body_bytes: usize,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl Settings {
    fn from_env() -> Self {
        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "data/training.db".into());
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());

        Settings {
            database_path,
            server_addr,
            max_connections: env_or("DB_MAX_CONNECTIONS", 5),
            read_timeout: Duration::from_secs(env_or("READ_TIMEOUT_SECS", 30)),
            write_timeout: Duration::from_secs(env_or("WRITE_TIMEOUT_SECS", 30)),
            idle_timeout: Duration::from_secs(env_or("IDLE_TIMEOUT_SECS", 60)),
            shutdown_grace: Duration::from_secs(env_or("SHUTDOWN_GRACE_SECS", 10)),
            max_body_bytes: env_or("MAX_BODY_BYTES", 32 * 1024 * 1024),
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_values_fall_back_to_default() {
        env::set_var("TT_TEST_BAD_NUMBER", "thirty");
        assert_eq!(env_or("TT_TEST_BAD_NUMBER", 30u64), 30);
        env::set_var("TT_TEST_GOOD_NUMBER", "12");
        assert_eq!(env_or("TT_TEST_GOOD_NUMBER", 30u64), 12);
    }
}
