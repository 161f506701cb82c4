use std::{env, net::SocketAddr, time::Duration};
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub api_url: String,
    pub upstream_timeout: Duration,
    pub templates_dir: String,
    pub css_dir: String,
}

impl AppConfig {
    // Every variable is optional
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "BIND_ADDR",
                value,
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "UPSTREAM_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let api_url = lookup("COCKTAIL_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "COCKTAIL_API_URL",
                value: api_url,
            });
        }

        Ok(AppConfig {
            bind_addr,
            api_url: api_url.trim_end_matches('/').to_string(),
            upstream_timeout,
            templates_dir: lookup("TEMPLATES_DIR").unwrap_or_else(|| "templates".into()),
            css_dir: lookup("CSS_DIR").unwrap_or_else(|| "css".into()),
        })
    }
}
