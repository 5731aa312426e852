//! Scoped release of telemetry resources

use super::TelemetryError;
use std::fmt;
use tracing::{debug, warn};

type ReleaseAction = Box<dyn FnOnce() -> Result<(), TelemetryError> + Send>;

/// Handle returned by [`super::TelemetryInitializer::configure`]
///
/// Holds the release actions for everything the initializer set up. They run
/// once, in reverse registration order, on [`TelemetryGuard::shutdown`] or
/// when the guard is dropped.
#[must_use = "dropping the guard releases telemetry immediately"]
pub struct TelemetryGuard {
    actions: Vec<(&'static str, ReleaseAction)>,
}

impl TelemetryGuard {
    /// Guard with nothing to release
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Register a release action
    pub fn on_release<F>(mut self, name: &'static str, action: F) -> Self
    where
        F: FnOnce() -> Result<(), TelemetryError> + Send + 'static,
    {
        self.actions.push((name, Box::new(action)));
        self
    }

    /// Whether any release actions are pending
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Run all release actions now
    ///
    /// Every action runs even if an earlier one fails; the first error is
    /// returned.
    pub fn shutdown(mut self) -> Result<(), TelemetryError> {
        self.release()
    }

    fn release(&mut self) -> Result<(), TelemetryError> {
        let mut first_error = None;

        while let Some((name, action)) = self.actions.pop() {
            match action() {
                Ok(()) => debug!(component = name, "Telemetry component released"),
                Err(e) => {
                    warn!(component = name, error = %e, "Telemetry release failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        // Failures were already logged in release()
        let _ = self.release();
    }
}

impl fmt::Debug for TelemetryGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.actions.iter().map(|(name, _)| *name).collect();
        f.debug_struct("TelemetryGuard")
            .field("pending", &names)
            .finish()
    }
}
