//! Usage metrics emission.
//!
//! The aggregation core reports usage events through the [`MetricsEmitter`]
//! seam. The Prometheus-backed emitter below is the in-process default; the
//! embedding server mounts [`REGISTRY`] on its metrics endpoint. Deployments
//! that forward events to an external analytics service implement the trait
//! themselves.

use lazy_static::lazy_static;
use prometheus::{CounterVec, Opts, Registry};

/// Metric name prefix for all Chirper metrics
const PREFIX: &str = "chirper";

/// A named usage event with an occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricEvent {
    pub name: &'static str,
    pub count: usize,
}

/// Trait for usage event sinks.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MetricsEmitter: Send + Sync {
    /// Records a usage event. Fire-and-forget: failures are the emitter's
    /// concern and are never surfaced to the caller.
    fn emit(&self, event: MetricEvent);
}

/// An emitter that discards every event (CLI tools, tests).
pub struct NoOpMetricsEmitter;

impl MetricsEmitter for NoOpMetricsEmitter {
    fn emit(&self, _event: MetricEvent) {}
}

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref EVENTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_events_total"), "Total usage events by name"),
        &["event"]
    ).expect("Failed to create events_total metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(EVENTS_TOTAL.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// An emitter backed by the crate's Prometheus registry.
pub struct PrometheusEmitter;

impl MetricsEmitter for PrometheusEmitter {
    fn emit(&self, event: MetricEvent) {
        EVENTS_TOTAL
            .with_label_values(&[event.name])
            .inc_by(event.count as f64);
    }
}
