//! In-memory collaborators for collector tests.

use crate::{
    model::{EntityLabels, EntityPath, EntityRef, RelationDescriptor},
    traits::{Action, ObjectSource, PermissionOracle, SchemaCatalog},
};
use std::collections::{BTreeMap, BTreeSet};

///
/// FixtureGraph
///
/// Schema catalog and object source backed by plain maps.
///

#[derive(Default)]
pub struct FixtureGraph {
    labels: BTreeMap<EntityPath, EntityLabels>,
    relations: BTreeMap<EntityPath, Vec<RelationDescriptor>>,
    edges: BTreeMap<(EntityRef, String), Vec<EntityRef>>,
    names: BTreeMap<EntityRef, String>,
}

impl FixtureGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an entity type with a regular plural label.
    pub fn entity(mut self, path: &str, singular: &str) -> Self {
        self.labels
            .insert(path.into(), EntityLabels::regular(singular));
        self
    }

    /// Declare a relationship pointing at `source`.
    pub fn relation(mut self, source: &str, relation: RelationDescriptor) -> Self {
        self.relations.entry(source.into()).or_default().push(relation);
        self
    }

    /// Connect `source` to `targets` through `accessor`.
    pub fn edge(mut self, source: &EntityRef, accessor: &str, targets: &[&EntityRef]) -> Self {
        self.edges
            .entry((source.clone(), accessor.to_string()))
            .or_default()
            .extend(targets.iter().map(|target| (*target).clone()));
        self
    }

    pub fn name(mut self, entity: &EntityRef, name: &str) -> Self {
        self.names.insert(entity.clone(), name.to_string());
        self
    }
}

impl SchemaCatalog for FixtureGraph {
    fn relations_of(&self, path: &EntityPath) -> Vec<RelationDescriptor> {
        self.relations.get(path).cloned().unwrap_or_default()
    }

    fn labels(&self, path: &EntityPath) -> EntityLabels {
        self.labels
            .get(path)
            .cloned()
            .unwrap_or_else(|| EntityLabels::regular(path.model_name()))
    }
}

impl ObjectSource for FixtureGraph {
    fn fetch(&self, source: &EntityRef, accessor: &str) -> Vec<EntityRef> {
        self.edges
            .get(&(source.clone(), accessor.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn describe(&self, entity: &EntityRef) -> String {
        self.names
            .get(entity)
            .cloned()
            .unwrap_or_else(|| entity.to_string())
    }
}

///
/// TestUser
///
/// Holds every permission except the ones explicitly denied.
///

#[derive(Default)]
pub struct TestUser {
    denied: BTreeSet<(EntityPath, Action)>,
}

impl TestUser {
    pub fn superuser() -> Self {
        Self::default()
    }

    pub fn deny(mut self, path: &str, action: Action) -> Self {
        self.denied.insert((path.into(), action));
        self
    }
}

///
/// TestPermissions
///

pub struct TestPermissions;

impl PermissionOracle for TestPermissions {
    type User = TestUser;

    fn has_permission(&self, user: &TestUser, path: &EntityPath, action: Action) -> bool {
        !user.denied.contains(&(path.clone(), action))
    }
}
