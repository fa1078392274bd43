use std::time::Duration;

use crate::errors::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3333";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3333";
const DEFAULT_SEED_ORDERS: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = get("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        let timeout_ms = parse_or(&get, "API_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?;
        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockServerConfig {
    pub bind_addr: String,
    pub seed_orders: usize,
}

impl MockServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            seed_orders: parse_or(&get, "SEED_ORDERS", DEFAULT_SEED_ORDERS)?,
        })
    }
}

fn parse_or<F, T>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
