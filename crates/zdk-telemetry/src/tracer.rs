//! Subscriber and tracer provider setup

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::{Builder, SpanProcessor, TracerProvider};
use std::sync::{Arc, OnceLock};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static TRACER_PROVIDER: OnceLock<Arc<TracerProvider>> = OnceLock::new();

const DEFAULT_LOG_FILTER: &str = "info";

/// Deferred `with_span_processor` call; keeps processors of any concrete type
type ProcessorHook = Box<dyn FnOnce(Builder) -> Builder + Send>;

/// Settings for [`init_telemetry_with`]
#[derive(Default)]
pub struct TelemetryOptions {
    /// Instrumentation name of the tracer; defaults to `zdk`
    pub service_name: Option<String>,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: Option<String>,

    /// Emit one JSON object per log line instead of human-readable text
    pub json_logs: bool,

    span_processors: Vec<ProcessorHook>,
}

impl TelemetryOptions {
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    pub fn json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Attach an exporter pipeline (simple, batch or custom) to the provider
    pub fn with_span_processor<P: SpanProcessor + 'static>(mut self, processor: P) -> Self {
        self.span_processors
            .push(Box::new(move |builder: Builder| builder.with_span_processor(processor)));
        self
    }

    fn build_provider(&mut self) -> TracerProvider {
        self.span_processors
            .drain(..)
            .fold(TracerProvider::builder(), |builder, hook| hook(builder))
            .build()
    }
}

/// Initialize telemetry with default settings.
///
/// Log verbosity comes from `RUST_LOG`, falling back to `info`.
///
/// # Example
///
/// ```rust,no_run
/// use zdk_telemetry::init_telemetry;
///
/// init_telemetry();
/// ```
pub fn init_telemetry() {
    init_telemetry_with(TelemetryOptions::default());
}

/// Install the global subscriber: an OpenTelemetry layer feeding the tracer
/// provider, plus a fmt layer for log output.
///
/// Only the first call takes effect. `RUST_LOG` always wins over
/// `options.log_filter`.
pub fn init_telemetry_with(mut options: TelemetryOptions) {
    let provider = options.build_provider();
    let TelemetryOptions {
        service_name,
        log_filter,
        json_logs,
        ..
    } = options;

    let tracer = provider.tracer(
        service_name.unwrap_or_else(|| crate::attributes::SYSTEM_NAME.to_string()),
    );

    if TRACER_PROVIDER.set(Arc::new(provider)).is_err() {
        tracing::debug!("Telemetry already initialized");
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });
    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(tracer);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true);

    let installed = if json_logs {
        tracing_subscriber::registry()
            .with(telemetry_layer)
            .with(fmt_layer.json())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(telemetry_layer)
            .with(fmt_layer)
            .with(filter)
            .try_init()
    };

    // Another subscriber (test harness, host application) may already own the slot
    if let Err(e) = installed {
        tracing::debug!(error = %e, "Global subscriber already set");
    }
}

/// Get the global tracer provider if initialized
pub fn tracer_provider() -> Option<Arc<TracerProvider>> {
    TRACER_PROVIDER.get().cloned()
}
