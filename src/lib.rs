//! Agentic API service
//!
//! A small HTTP service exposing liveness endpoints, with an OpenTelemetry
//! pipeline configured once at startup before the listener binds.
//!
//! - [`config`] - settings from environment variables
//! - [`telemetry`] - tracing subscriber and OpenTelemetry setup
//! - [`server`] - health endpoints, lifespan and graceful shutdown

pub mod config;
pub mod server;
pub mod telemetry;
