//! Logging-only mode when the OpenTelemetry SDK is disabled

use agentic_api::telemetry::{
    OpenTelemetryInitializer, TelemetryConfig, TelemetryError, TelemetryInitializer,
};

#[test]
fn test_disabled_sdk_installs_logging_only() {
    let initializer = OpenTelemetryInitializer::new(TelemetryConfig {
        enabled: false,
        ..TelemetryConfig::default()
    });

    let guard = initializer
        .configure()
        .expect("logging-only configure should succeed");
    assert!(guard.is_empty(), "no tracer provider to release");

    tracing::info!("logging still works");

    let second = OpenTelemetryInitializer::new(TelemetryConfig::default()).configure();
    assert!(
        matches!(second, Err(TelemetryError::Subscriber(_))),
        "subscriber from the first call stays installed, got {:?}",
        second
    );
}
