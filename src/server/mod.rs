//! HTTP server for the Agentic API
//!
//! Provides the health endpoints:
//! - `/` - Service banner with health status
//! - `/health` - Liveness probe (process is running)
//!
//! The lifespan configures telemetry before binding and releases it after
//! graceful shutdown on SIGTERM/SIGINT.

mod health;
mod lifespan;
pub mod shutdown;

pub use health::{build_router, HealthResponse, ROOT_MESSAGE, STATUS_HEALTHY};
pub use lifespan::{run_service, run_until_signal, ServeError};
pub use shutdown::{
    shutdown_channel, wait_for_signal, ShutdownController, ShutdownSignal, CONTROLLER_DROPPED,
};

#[cfg(test)]
#[path = "health_test.rs"]
mod health_tests;

#[cfg(test)]
#[path = "lifespan_test.rs"]
mod lifespan_tests;

#[cfg(test)]
#[path = "shutdown_test.rs"]
mod shutdown_tests;
