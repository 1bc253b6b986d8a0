use std::net::SocketAddr;

use thiserror::Error;

pub const ADDR_VAR: &str = "USER_REGISTRY_ADDR";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} is not a socket address: [{value}]")]
    InvalidAddr { var: &'static str, value: String },
}

/// Settings for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub addr: SocketAddr,
}

impl HttpConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: value.clone(),
        })?;
        Ok(Self { addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = HttpConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn reads_address() {
        let config = HttpConfig::from_lookup(|key| {
            (key == ADDR_VAR).then(|| "0.0.0.0:9000".to_string())
        })
        .unwrap();
        assert_eq!(config.addr.port(), 9000);
    }

    #[test]
    fn rejects_garbage() {
        let err = HttpConfig::from_lookup(|_| Some("localhost".into())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: "localhost".into()
            }
        );
    }
}
