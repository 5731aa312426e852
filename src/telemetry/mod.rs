//! Telemetry pipeline setup
//!
//! The lifespan calls [`TelemetryInitializer::configure`] exactly once before
//! the listener binds, and holds the returned [`TelemetryGuard`] until the
//! server stops.
//!
//! - [`OpenTelemetryInitializer`] - production pipeline (tracing subscriber,
//!   OpenTelemetry tracer provider, optional OTLP export)
//! - [`NoopTelemetry`] - installs nothing, for embedders that own the
//!   global subscriber

mod guard;
mod otel;

pub use guard::TelemetryGuard;
pub use otel::OpenTelemetryInitializer;

use crate::config::{DEFAULT_LOG_FILTER, DEFAULT_SERVICE_NAME};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(String),

    #[error("failed to build span exporter: {0}")]
    Exporter(String),

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),

    #[error("telemetry shutdown failed: {0}")]
    Shutdown(String),
}

/// Settings for the telemetry pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Reported as the `service.name` resource attribute
    pub service_name: String,
    /// OTLP gRPC endpoint; spans are not exported when unset
    pub otlp_endpoint: Option<String>,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
    /// When false only the log subscriber is installed
    pub enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            otlp_endpoint: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            enabled: true,
        }
    }
}

/// One-time process telemetry setup
///
/// Implementations may register process-global state (subscriber, tracer
/// provider), so `configure` is called once per process. An error aborts
/// startup.
pub trait TelemetryInitializer: Send + Sync {
    fn configure(&self) -> Result<TelemetryGuard, TelemetryError>;
}

/// Initializer that installs nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetry;

impl TelemetryInitializer for NoopTelemetry {
    fn configure(&self) -> Result<TelemetryGuard, TelemetryError> {
        Ok(TelemetryGuard::empty())
    }
}

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_tests;
