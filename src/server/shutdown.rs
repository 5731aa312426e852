//! Shutdown plumbing for the API server
//!
//! A [`ShutdownController`] records why the server should stop; the server
//! holds a [`ShutdownSignal`] and drains in-flight requests once a reason is
//! set. OS signals are turned into a reason by the lifespan.

use std::io;
use tokio::sync::watch;
use tracing::info;

/// Reason reported when the controller goes away without calling `shutdown`
pub const CONTROLLER_DROPPED: &str = "controller dropped";

/// Receiving side of the shutdown channel
#[derive(Clone)]
pub struct ShutdownSignal {
    receiver: watch::Receiver<Option<&'static str>>,
}

impl ShutdownSignal {
    /// Wait until shutdown is requested and return the reason
    pub async fn wait(&mut self) -> &'static str {
        match self.receiver.wait_for(Option::is_some).await {
            Ok(reason) => (*reason).unwrap_or(CONTROLLER_DROPPED),
            Err(_) => CONTROLLER_DROPPED,
        }
    }

    /// Reason for shutdown, if one was requested (non-blocking)
    pub fn reason(&self) -> Option<&'static str> {
        *self.receiver.borrow()
    }
}

/// Sending side of the shutdown channel
pub struct ShutdownController {
    sender: watch::Sender<Option<&'static str>>,
}

impl ShutdownController {
    /// Request shutdown; only the first reason is kept
    pub fn shutdown(&self, reason: &'static str) {
        let recorded = self.sender.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        });
        if recorded {
            info!(reason = reason, "Shutdown requested");
        }
    }
}

/// Create a connected controller/signal pair
pub fn shutdown_channel() -> (ShutdownController, ShutdownSignal) {
    let (sender, receiver) = watch::channel(None);
    (ShutdownController { sender }, ShutdownSignal { receiver })
}

/// Wait for SIGTERM or SIGINT
///
/// Returns the name of the signal received, or the registration error if the
/// handlers cannot be installed.
#[cfg(unix)]
pub async fn wait_for_signal() -> io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    Ok(tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    })
}

/// Wait for Ctrl+C (non-unix)
#[cfg(not(unix))]
pub async fn wait_for_signal() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("CTRL_C")
}
