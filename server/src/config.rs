//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `BIND_ADDR`: listen address, default `0.0.0.0`
//! - `CORS_ALLOW_ANY`: allow cross-origin API calls from any origin,
//!   default off

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// A configuration value that is present but unusable.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid {var}: {value:?} is not an IP address")]
    InvalidAddr { var: &'static str, value: String },

    #[error("invalid {var}: {value:?} is not a boolean")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub cors_allow_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, cors_allow_any: false }
    }
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from any key lookup. Unset and blank values take
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort { var: "PORT", value: raw })?,
            None => defaults.port,
        };
        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidAddr { var: "BIND_ADDR", value: raw })?,
            None => defaults.bind_addr,
        };
        let cors_allow_any = match get("CORS_ALLOW_ANY") {
            Some(raw) => {
                parse_bool(&raw).ok_or(ConfigError::InvalidBool { var: "CORS_ALLOW_ANY", value: raw })?
            }
            None => defaults.cors_allow_any,
        };

        Ok(Self { bind_addr, port, cors_allow_any })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Accepts 1/0, true/false, yes/no and on/off in any case.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
