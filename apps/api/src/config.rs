use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration
///
/// Read from the process environment (and a `.env` file, if the binary loaded
/// one). Every setting has a default.
///
/// | Variable    | Default   |
/// |-------------|-----------|
/// | `HOST`      | `0.0.0.0` |
/// | `PORT`      | `8080`    |
/// | `LOG_LEVEL` | `info`    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
            name: "HOST",
            value: host.clone(),
        })?;

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            host,
            port,
            log_level,
        })
    }

    /// Address the HTTP server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = AppConfig::from_lookup(lookup(&[("PORT", "eighty")]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidValue {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn invalid_host_is_rejected() {
        let result = AppConfig::from_lookup(lookup(&[("HOST", "not-an-ip")]));

        assert!(result.is_err());
    }
}
