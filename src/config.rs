//! Service configuration loaded from environment variables
//!
//! - `AGENTIC_API_HOST` - bind address (default: 0.0.0.0)
//! - `AGENTIC_API_PORT` - bind port (default: 8000)
//! - `OTEL_SERVICE_NAME` - `service.name` resource attribute (default: agentic-api)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP gRPC endpoint, export disabled when unset
//! - `OTEL_SDK_DISABLED` - "true" (any case) skips the OpenTelemetry pipeline
//! - `RUST_LOG` - log filter (default: info)

use crate::telemetry::TelemetryConfig;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;

/// Default `service.name` reported to the telemetry pipeline
pub const DEFAULT_SERVICE_NAME: &str = "agentic-api";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for the whole process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub port: u16,
    pub telemetry: TelemetryConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match get("AGENTIC_API_HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|e| {
                ConfigError::Invalid {
                    var: "AGENTIC_API_HOST",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match get("AGENTIC_API_PORT") {
            Some(raw) => {
                raw.trim()
                    .parse::<u16>()
                    .map_err(|e| ConfigError::Invalid {
                        var: "AGENTIC_API_PORT",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?
            }
            None => DEFAULT_PORT,
        };

        let sdk_disabled = get("OTEL_SDK_DISABLED")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let telemetry = TelemetryConfig {
            service_name: get("OTEL_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            otlp_endpoint: get("OTEL_EXPORTER_OTLP_ENDPOINT"),
            log_filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            enabled: !sdk_disabled,
        };

        Ok(Self {
            host,
            port,
            telemetry,
        })
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
