use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("DEVINQUIRE_PORT", "8080"),
            database_path: try_load("DEVINQUIRE_DB", "devinquire.db"),
            admin_username: try_load("DEVINQUIRE_ADMIN_USER", "admin"),
            admin_password: read_secret("DEVINQUIRE_ADMIN_PASSWORD"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

/// Admin credentials come from the environment, or a mounted secrets file
/// when the variable names a path under /run/secrets.
fn read_secret(key: &str) -> String {
    if let Ok(value) = env::var(key) {
        return value;
    }

    let path = format!("/run/secrets/{key}");
    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {key} from environment or {path}: {e}");
        })
        .expect("Secrets misconfigured!")
}
