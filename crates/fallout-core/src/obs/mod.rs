//! Observability: traversal telemetry (metrics) and sink abstractions.
//!
//! Collection logic records `MetricsEvent`s only; it never reads metrics back.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EntityCounters, EventOps, EventReport};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
