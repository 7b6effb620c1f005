use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub henrik_api_key: String,
    pub henrik_base_url: String,
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "5000"),
            henrik_api_key: load_api_key(),
            henrik_base_url: try_load("HENRIK_BASE_URL", "https://api.henrikdev.xyz"),
            upstream_timeout_secs: try_load("UPSTREAM_TIMEOUT_SECS", "10"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| ())
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

fn load_api_key() -> String {
    var("HENRIK_API_KEY").unwrap_or_else(|_| {
        warn!("HENRIK_API_KEY not set, upstream calls go out without credentials");
        String::new()
    })
}
