//! Collaborator contracts consumed by the impact collector.
//!
//! Implementations are expected to be deterministic pure reads; the collector
//! calls them synchronously while it walks the graph.

use crate::{
    link::LinkContext,
    model::{EntityLabels, EntityPath, EntityRef, RelationDescriptor},
};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SCHEMA
// ============================================================================

///
/// SchemaCatalog
/// Relationship and label metadata per entity type.
///

pub trait SchemaCatalog {
    /// Relationships pointing at `path`, in catalog order.
    fn relations_of(&self, path: &EntityPath) -> Vec<RelationDescriptor>;

    fn labels(&self, path: &EntityPath) -> EntityLabels;
}

// ============================================================================
// DATA
// ============================================================================

///
/// ObjectSource
/// Instance-level reads used to follow relationship accessors.
///

pub trait ObjectSource {
    /// Instances reachable from `source` through `accessor`.
    /// An empty result means the related instance does not exist.
    fn fetch(&self, source: &EntityRef, accessor: &str) -> Vec<EntityRef>;

    /// Human-readable text for one instance.
    fn describe(&self, entity: &EntityRef) -> String;
}

// ============================================================================
// PERMISSIONS
// ============================================================================

///
/// Action
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Action {
    Change,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Change => f.write_str("change"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

///
/// PermissionOracle
///

pub trait PermissionOracle {
    type User: ?Sized;

    fn has_permission(&self, user: &Self::User, path: &EntityPath, action: Action) -> bool;
}

// ============================================================================
// PRESENTATION
// ============================================================================

///
/// LinkFormatter
/// Builds the markup that points at one instance's change view.
///

pub trait LinkFormatter {
    fn format_link(&self, entity: &EntityRef, display: &str, context: &LinkContext) -> String;
}
