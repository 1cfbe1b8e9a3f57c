//! Metrics sink boundary.
//!
//! Traversal code MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::{obs::metrics, traits::Action};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    TraversalStart {
        root_path: String,
    },
    TraversalFinish {
        root_path: String,
        nodes: u64,
        missing: u64,
    },
    InstanceVisited {
        entity_path: String,
    },
    DuplicateSkipped {
        entity_path: String,
    },
    HookDeclined {
        entity_path: String,
    },
    PermissionDenied {
        entity_path: String,
        action: Action,
    },
    DepthTruncated {
        depth: u32,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into global metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::TraversalStart { root_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.traversals = m.ops.traversals.saturating_add(1);
                    let entry = m.entities.entry(root_path).or_default();
                    entry.roots = entry.roots.saturating_add(1);
                });
            }

            MetricsEvent::TraversalFinish { nodes, missing, .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.report_nodes = m.ops.report_nodes.saturating_add(nodes);
                    m.ops.missing_labels = m.ops.missing_labels.saturating_add(missing);
                });
            }

            MetricsEvent::InstanceVisited { entity_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.instances_visited = m.ops.instances_visited.saturating_add(1);
                    let entry = m.entities.entry(entity_path).or_default();
                    entry.visited = entry.visited.saturating_add(1);
                });
            }

            MetricsEvent::DuplicateSkipped { entity_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.duplicates_skipped = m.ops.duplicates_skipped.saturating_add(1);
                    let entry = m.entities.entry(entity_path).or_default();
                    entry.duplicates_skipped = entry.duplicates_skipped.saturating_add(1);
                });
            }

            MetricsEvent::HookDeclined { entity_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.hook_declines = m.ops.hook_declines.saturating_add(1);
                    let entry = m.entities.entry(entity_path).or_default();
                    entry.hook_declines = entry.hook_declines.saturating_add(1);
                });
            }

            MetricsEvent::PermissionDenied {
                entity_path,
                action,
            } => {
                metrics::with_state_mut(|m| {
                    match action {
                        Action::Delete => {
                            m.ops.delete_denials = m.ops.delete_denials.saturating_add(1);
                        }
                        Action::Change => {
                            m.ops.change_denials = m.ops.change_denials.saturating_add(1);
                        }
                    }
                    let entry = m.entities.entry(entity_path).or_default();
                    entry.denials = entry.denials.saturating_add(1);
                });
            }

            MetricsEvent::DepthTruncated { .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.depth_truncations = m.ops.depth_truncations.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => GlobalMetricsSink.record(event),
    }
}

/// Snapshot the current thread's metrics state.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous sink is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
