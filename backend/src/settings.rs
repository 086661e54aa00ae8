//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `QUESTIONARY_*` environment variables and an
//! optional configuration file, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_GRPC_ADDR: &str = "0.0.0.0:50051";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A listen address did not parse as `host:port`.
    #[error("invalid {field} `{value}`: {source}")]
    InvalidAddress {
        field: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Runtime settings for the `questionary` service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "QUESTIONARY")]
pub struct QuestionarySettings {
    /// HTTP listen address.
    pub http_addr: Option<String>,
    /// gRPC listen address.
    pub grpc_addr: Option<String>,
    /// PostgreSQL connection string. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Pool checkout and connect timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// Seed the in-memory store with the example questions.
    #[ortho_config(default = false)]
    pub seed_example_data: bool,
}

fn parse_addr(field: &'static str, value: &str) -> Result<SocketAddr, SettingsError> {
    value
        .parse()
        .map_err(|source| SettingsError::InvalidAddress {
            field,
            value: value.to_owned(),
            source,
        })
}

impl QuestionarySettings {
    /// HTTP listen address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidAddress`] when the value is malformed.
    pub fn http_addr(&self) -> Result<SocketAddr, SettingsError> {
        parse_addr(
            "http_addr",
            self.http_addr.as_deref().unwrap_or(DEFAULT_HTTP_ADDR),
        )
    }

    /// gRPC listen address, defaulting to `0.0.0.0:50051`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidAddress`] when the value is malformed.
    pub fn grpc_addr(&self) -> Result<SocketAddr, SettingsError> {
        parse_addr(
            "grpc_addr",
            self.grpc_addr.as_deref().unwrap_or(DEFAULT_GRPC_ADDR),
        )
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.connect_timeout_secs
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }
}
