//! OpenTelemetry pipeline installed for real
//!
//! The global subscriber can only be set once per process, so the whole
//! sequence lives in one test.

use agentic_api::telemetry::{
    OpenTelemetryInitializer, TelemetryConfig, TelemetryError, TelemetryInitializer,
};

#[test]
fn test_configure_installs_pipeline_once() {
    let initializer = OpenTelemetryInitializer::new(TelemetryConfig {
        service_name: "agentic-api-test".to_string(),
        ..TelemetryConfig::default()
    });

    let guard = initializer
        .configure()
        .expect("first configure should install the pipeline");
    assert!(
        !guard.is_empty(),
        "enabled pipeline must hand back the tracer provider for release"
    );

    // Spans flow through the installed subscriber without panicking
    tracing::info_span!("startup_check").in_scope(|| tracing::info!("pipeline installed"));

    let second = initializer.configure();
    assert!(
        matches!(second, Err(TelemetryError::Subscriber(_))),
        "a second configure must fail, got {:?}",
        second
    );

    guard.shutdown().expect("tracer provider should shut down");
}
