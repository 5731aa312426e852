//! Application lifespan
//!
//! Telemetry is configured before the listener binds, so no request is ever
//! served without it. The returned guard lives for the whole serve loop and
//! is released on every exit path: graceful shutdown, serve error, or a bind
//! failure after telemetry was already set up.

use super::health::build_router;
use super::shutdown::{shutdown_channel, ShutdownSignal};
use crate::config::ServiceConfig;
use crate::telemetry::{TelemetryError, TelemetryGuard, TelemetryInitializer};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("telemetry setup failed")]
    Telemetry(#[from] TelemetryError),

    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error")]
    Serve(#[source] io::Error),

    #[error("cannot listen for shutdown signals")]
    Signal(#[source] io::Error),
}

/// Run the API server until `signals` resolves
///
/// `signals` is normally [`super::wait_for_signal`]. When it yields a signal
/// name the server drains and the call returns the serve result. When it
/// yields an error the server is still drained and released, and the call
/// fails with [`ServeError::Signal`] so the process does not exit cleanly
/// without signal handling.
pub async fn run_until_signal<S>(
    config: &ServiceConfig,
    telemetry: &dyn TelemetryInitializer,
    signals: S,
) -> Result<(), ServeError>
where
    S: Future<Output = io::Result<&'static str>>,
{
    let (controller, shutdown) = shutdown_channel();
    let server = run_service(config, telemetry, shutdown);
    tokio::pin!(server);

    tokio::select! {
        served = &mut server => served,
        received = signals => {
            let outcome = match received {
                Ok(signal) => {
                    controller.shutdown(signal);
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "Signal handlers unavailable, stopping");
                    controller.shutdown("signal handler failure");
                    Err(ServeError::Signal(e))
                }
            };
            server.await.and(outcome)
        }
    }
}

/// Run the API server until `shutdown` fires
///
/// # Arguments
/// * `config` - Bind address
/// * `telemetry` - Called exactly once, before binding
/// * `shutdown` - Stops accepting connections once a reason is set
///
/// # Errors
/// A telemetry failure aborts startup before anything listens.
pub async fn run_service(
    config: &ServiceConfig,
    telemetry: &dyn TelemetryInitializer,
    mut shutdown: ShutdownSignal,
) -> Result<(), ServeError> {
    let guard = telemetry.configure()?;

    let addr = config.bind_addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(source) => {
            error!(addr = %addr, error = %source, "Failed to bind");
            release(guard).await;
            return Err(ServeError::Bind { addr, source });
        }
    };
    // Log after successful bind - server is actually listening
    info!(addr = %addr, "Agentic API listening");

    let served = axum::serve(listener, build_router())
        .with_graceful_shutdown(async move {
            let reason = shutdown.wait().await;
            info!(reason = reason, "Draining connections");
        })
        .await
        .map_err(ServeError::Serve);

    release(guard).await;

    served
}

/// Flush and shut down telemetry off the async workers
///
/// Exporter shutdown blocks until pending spans are flushed.
async fn release(guard: TelemetryGuard) {
    match tokio::task::spawn_blocking(move || guard.shutdown()).await {
        Ok(Ok(())) => info!("Telemetry released"),
        Ok(Err(e)) => warn!(error = %e, "Telemetry release incomplete"),
        Err(e) => warn!(error = %e, "Telemetry release task failed"),
    }
}
