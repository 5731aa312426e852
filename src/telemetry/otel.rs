//! OpenTelemetry pipeline wired into `tracing`

use super::{TelemetryConfig, TelemetryError, TelemetryGuard, TelemetryInitializer};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::TracerProvider;
use opentelemetry_sdk::{runtime, Resource};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Production telemetry initializer
///
/// Installs the global `tracing` subscriber (env filter + fmt layer) and,
/// unless disabled, an OpenTelemetry tracer provider bridged through
/// `tracing-opentelemetry`. Spans are batch-exported over OTLP/gRPC when an
/// endpoint is configured.
#[derive(Debug, Clone)]
pub struct OpenTelemetryInitializer {
    config: TelemetryConfig,
}

impl OpenTelemetryInitializer {
    pub fn new(config: TelemetryConfig) -> Self {
        Self { config }
    }
}

impl TelemetryInitializer for OpenTelemetryInitializer {
    fn configure(&self) -> Result<TelemetryGuard, TelemetryError> {
        let filter = EnvFilter::try_new(&self.config.log_filter)
            .map_err(|e| TelemetryError::Filter(e.to_string()))?;

        if !self.config.enabled {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .try_init()
                .map_err(|e| TelemetryError::Subscriber(e.to_string()))?;

            info!("OpenTelemetry SDK disabled, logging only");
            return Ok(TelemetryGuard::empty());
        }

        let provider = build_tracer_provider(&self.config)?;
        let tracer = provider.tracer(self.config.service_name.clone());

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .try_init()
            .map_err(|e| TelemetryError::Subscriber(e.to_string()))?;

        // Globals are only touched once the subscriber is in place
        global::set_text_map_propagator(TraceContextPropagator::new());
        let _ = global::set_tracer_provider(provider.clone());

        info!(
            service = %self.config.service_name,
            exporter = self.config.otlp_endpoint.as_deref().unwrap_or("none"),
            "OpenTelemetry configured"
        );

        Ok(TelemetryGuard::empty().on_release("tracer_provider", move || {
            provider
                .shutdown()
                .map_err(|e| TelemetryError::Shutdown(e.to_string()))
        }))
    }
}

/// Build the SDK tracer provider, attaching an OTLP exporter if configured
fn build_tracer_provider(config: &TelemetryConfig) -> Result<TracerProvider, TelemetryError> {
    let resource = Resource::new([KeyValue::new(
        "service.name",
        config.service_name.clone(),
    )]);

    let mut builder = TracerProvider::builder().with_resource(resource);

    if let Some(endpoint) = &config.otlp_endpoint {
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint.clone())
            .build()
            .map_err(|e| TelemetryError::Exporter(e.to_string()))?;
        builder = builder.with_batch_exporter(exporter, runtime::Tokio);
    }

    Ok(builder.build())
}
