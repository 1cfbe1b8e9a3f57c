//! Cascade impact collection.
//!
//! Walks every relationship pointing at a root entity, depth first, and
//! builds the nested report of instances a delete would take with it, along
//! with the labels of related types the acting user lacks permission on.


use crate::{
    config::{CollectorConfig, MAX_DEPTH_LIMIT},
    link::LinkContext,
    model::{EntityRef, RelationDescriptor, RelationKind, capfirst, escape_html},
    obs::sink::{MetricsEvent, record},
    registry::{HandlerTable, HookRequest},
    report::{DeletionImpact, ImpactSummary, MissingPermissions, ReportLine, ReportNode},
    traits::{Action, LinkFormatter, ObjectSource, PermissionOracle, SchemaCatalog},
};
use std::collections::BTreeSet;

/// Depth of the top-level call.
const ROOT_DEPTH: u32 = 1;

/// Depth added per relationship hop: one level for the instance line, one for
/// its nested children.
const HOP_DEPTH: u32 = 2;

///
/// Traversal
///
/// Accumulators for one `collect_impact` call.
/// Created once at the top level and threaded by reference through recursion.
///

struct Traversal<'r, U: ?Sized> {
    root: &'r EntityRef,
    user: &'r U,
    max_depth: u32,
    context: LinkContext,
    visited: BTreeSet<EntityRef>,
    missing: MissingPermissions,
    summary: ImpactSummary,
}

///
/// ImpactCollector
///
/// Borrows its collaborators; holds no state between calls.
///

pub struct ImpactCollector<'a, C: ?Sized, S: ?Sized, P: ?Sized, L: ?Sized> {
    catalog: &'a C,
    source: &'a S,
    permissions: &'a P,
    links: &'a L,
    handlers: &'a HandlerTable,
    config: CollectorConfig,
}

impl<'a, C, S, P, L> ImpactCollector<'a, C, S, P, L>
where
    C: SchemaCatalog + ?Sized,
    S: ObjectSource + ?Sized,
    P: PermissionOracle + ?Sized,
    L: LinkFormatter + ?Sized,
{
    #[must_use]
    pub fn new(
        catalog: &'a C,
        source: &'a S,
        permissions: &'a P,
        links: &'a L,
        handlers: &'a HandlerTable,
    ) -> Self {
        Self {
            catalog,
            source,
            permissions,
            links,
            handlers,
            config: CollectorConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: CollectorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Collect the impact of deleting `root` using the configured depth bound.
    #[must_use]
    pub fn collect_impact(&self, root: &EntityRef, user: &P::User) -> DeletionImpact {
        self.collect_impact_with_depth(root, user, self.config.max_depth)
    }

    /// Collect the impact of deleting `root`, truncating below `max_depth`.
    ///
    /// `max_depth` is capped at [`MAX_DEPTH_LIMIT`].
    #[must_use]
    pub fn collect_impact_with_depth(
        &self,
        root: &EntityRef,
        user: &P::User,
        max_depth: u32,
    ) -> DeletionImpact {
        record(MetricsEvent::TraversalStart {
            root_path: root.path.to_string(),
        });

        let mut traversal = Traversal {
            root,
            user,
            max_depth: max_depth.min(MAX_DEPTH_LIMIT),
            context: LinkContext::from_config(&self.config),
            visited: BTreeSet::from([root.clone()]),
            missing: MissingPermissions::new(),
            summary: ImpactSummary::default(),
        };

        let mut report = ReportNode::new(self.root_line(&traversal));
        traversal
            .summary
            .add(&root.path, || self.catalog.labels(&root.path));
        self.walk(&mut traversal, root, ROOT_DEPTH, &mut report);

        record(MetricsEvent::TraversalFinish {
            root_path: root.path.to_string(),
            nodes: report.node_count() as u64,
            missing: traversal.missing.len() as u64,
        });

        DeletionImpact {
            report,
            missing_permissions: traversal.missing,
            summary: traversal.summary,
        }
    }

    // First report line: the root's own description, optionally replaced by
    // the root type's confirmation hook.
    fn root_line(&self, t: &Traversal<'_, P::User>) -> ReportLine {
        let root = t.root;
        let labels = self.catalog.labels(&root.path);
        let prefix = format!("{}:", capfirst(&labels.singular));
        let display = self.source.describe(root);

        let default = if self.handlers.has_handler(&root.path) {
            ReportLine::Markup(format!(
                "{} {}",
                escape_html(&prefix),
                self.links.format_link(root, &display, &t.context)
            ))
        } else {
            ReportLine::Text(format!("{prefix} {display}"))
        };

        let Some(hook) = self.handlers.hook(&root.path) else {
            return default;
        };
        let request = HookRequest {
            root,
            parent: root,
            label_prefix: default.as_str(),
            instance: root,
            context: &t.context,
        };

        match hook.confirmation_message(&request) {
            Some(message) => ReportLine::Markup(message),
            None => default,
        }
    }

    fn walk(
        &self,
        t: &mut Traversal<'_, P::User>,
        entity: &EntityRef,
        depth: u32,
        node: &mut ReportNode,
    ) {
        if depth > t.max_depth {
            record(MetricsEvent::DepthTruncated { depth });
            return;
        }

        // a catalog may list the same reverse accessor twice
        let mut seen_accessors = BTreeSet::new();
        for relation in self.catalog.relations_of(&entity.path) {
            let Some(accessor) = relation.resolve_accessor(&entity.path) else {
                continue;
            };
            if !seen_accessors.insert(accessor.to_string()) {
                continue;
            }

            self.walk_relation(t, entity, &relation, accessor, depth, node);
        }
    }

    fn walk_relation(
        &self,
        t: &mut Traversal<'_, P::User>,
        entity: &EntityRef,
        relation: &RelationDescriptor,
        accessor: &str,
        depth: u32,
        node: &mut ReportNode,
    ) {
        let mut fetched = self.source.fetch(entity, accessor);
        if relation.kind.is_single() {
            fetched.truncate(1);
        }

        // Phase 1: drop instances already in the report.
        let mut candidates: Vec<EntityRef> = Vec::with_capacity(fetched.len());
        for instance in fetched {
            if t.visited.contains(&instance) || candidates.contains(&instance) {
                record(MetricsEvent::DuplicateSkipped {
                    entity_path: instance.path.to_string(),
                });
                continue;
            }
            candidates.push(instance);
        }
        if candidates.is_empty() {
            return;
        }

        // Phase 2: one permission check for the whole group.
        let has_handler = self.handlers.has_handler(&relation.related);
        let action = required_action(relation.kind);
        if has_handler && !self.permissions.has_permission(t.user, &relation.related, action) {
            record(MetricsEvent::PermissionDenied {
                entity_path: relation.related.to_string(),
                action,
            });
            // no lines were emitted, so the group stays reachable through other paths
            t.missing.insert(relation.verbose_name.clone());
            return;
        }

        // Phase 3: one line per instance, then descend.
        let prefix = label_prefix(relation);
        for instance in candidates {
            // an earlier sibling's subtree may have reached this instance
            if !t.visited.insert(instance.clone()) {
                record(MetricsEvent::DuplicateSkipped {
                    entity_path: instance.path.to_string(),
                });
                continue;
            }

            let Some(line) = self.instance_line(t, entity, relation, &prefix, &instance, has_handler)
            else {
                // declined here; another relationship path may still include it
                t.visited.remove(&instance);
                record(MetricsEvent::HookDeclined {
                    entity_path: instance.path.to_string(),
                });
                continue;
            };

            record(MetricsEvent::InstanceVisited {
                entity_path: instance.path.to_string(),
            });
            t.summary
                .add(&instance.path, || self.catalog.labels(&instance.path));

            let child = node.push(line);
            self.walk(t, &instance, depth.saturating_add(HOP_DEPTH), child);
        }
    }

    // Report line for one related instance; `None` when a hook declines it.
    fn instance_line(
        &self,
        t: &Traversal<'_, P::User>,
        parent: &EntityRef,
        relation: &RelationDescriptor,
        prefix: &str,
        instance: &EntityRef,
        has_handler: bool,
    ) -> Option<ReportLine> {
        let display = self.source.describe(instance);

        // no handler: the type is edited inline, so there is nothing to link to
        if !has_handler {
            return Some(ReportLine::Text(format!("{prefix} {display}")));
        }

        if let Some(hook) = self.handlers.hook(&relation.related) {
            let escaped_prefix = escape_html(prefix);
            let request = HookRequest {
                root: t.root,
                parent,
                label_prefix: &escaped_prefix,
                instance,
                context: &t.context,
            };

            return hook
                .confirmation_message(&request)
                .map(ReportLine::Markup);
        }

        Some(ReportLine::Markup(format!(
            "{} {}",
            escape_html(prefix),
            self.links.format_link(instance, &display, &t.context)
        )))
    }
}

/// Permission the acting user needs on a related type.
///
/// Removing many-to-many membership changes the other side rather than
/// deleting it.
#[must_use]
pub const fn required_action(kind: RelationKind) -> Action {
    match kind {
        RelationKind::OneToOne | RelationKind::OneToMany => Action::Delete,
        RelationKind::ManyToMany => Action::Change,
    }
}

/// Leading label of an instance line, e.g. `"Book:"`.
#[must_use]
pub fn label_prefix(relation: &RelationDescriptor) -> String {
    match relation.kind {
        RelationKind::OneToOne | RelationKind::OneToMany => {
            format!("{}:", capfirst(&relation.verbose_name))
        }
        RelationKind::ManyToMany => format!(
            "One or more {} in {}:",
            relation.field_label, relation.verbose_name
        ),
    }
}
