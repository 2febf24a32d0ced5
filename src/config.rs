use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: String, value: String },
}

/// Runtime settings, read from `.env` / the process environment
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub api_url: String,
    pub api_key: Option<String>,
    pub api_timeout: Duration,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Config {
    pub const DEFAULT_API_URL: &'static str = "https://api.exchangeratesapi.io/history";

    /// Read the config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("FX_API_KEY").filter(|k| !k.trim().is_empty());

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 5000)?,
            api_url: lookup("FX_API_URL").unwrap_or_else(|| Self::DEFAULT_API_URL.to_string()),
            api_key,
            api_timeout: Duration::from_secs(parse_or(&lookup, "FX_API_TIMEOUT_SECS", 10)?),
            chart_width: parse_or(&lookup, "CHART_WIDTH", 800)?,
            chart_height: parse_or(&lookup, "CHART_HEIGHT", 480)?,
        })
    }

    /// Socket address string for the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
