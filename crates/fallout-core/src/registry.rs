//! Handler table: which entity types have an admin-style handler, and which
//! of those override the confirmation message shown for their instances.

use crate::{
    link::LinkContext,
    model::{EntityPath, EntityRef},
};
use std::{collections::BTreeMap, fmt};
use thiserror::Error as ThisError;

///
/// HandlerRegistryError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum HandlerRegistryError {
    #[error("handler for '{0}' already registered")]
    AlreadyRegistered(EntityPath),
}

///
/// HookRequest
///
/// Arguments passed to a confirmation hook for one instance.
///

#[derive(Clone, Copy, Debug)]
pub struct HookRequest<'a> {
    /// Entity whose deletion is being previewed.
    pub root: &'a EntityRef,

    /// Instance whose relationship led to `instance`.
    pub parent: &'a EntityRef,

    /// Label the default line would start with, e.g. `"Book:"`.
    pub label_prefix: &'a str,

    pub instance: &'a EntityRef,
    pub context: &'a LinkContext,
}

///
/// ConfirmationHook
///
/// Per-type override of the report line for one instance.
/// `None` declines the instance at this relationship path.
///

pub trait ConfirmationHook {
    fn confirmation_message(&self, request: &HookRequest<'_>) -> Option<String>;
}

impl<F> ConfirmationHook for F
where
    F: Fn(&HookRequest<'_>) -> Option<String>,
{
    fn confirmation_message(&self, request: &HookRequest<'_>) -> Option<String> {
        self(request)
    }
}

///
/// HandlerEntry
///

#[derive(Default)]
struct HandlerEntry {
    hook: Option<Box<dyn ConfirmationHook>>,
}

///
/// HandlerTable
///
/// Capability table injected into each collector call.
///

#[derive(Default)]
pub struct HandlerTable {
    entries: BTreeMap<EntityPath, HandlerEntry>,
}

impl HandlerTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plain handler for `path`.
    pub fn register(&mut self, path: impl Into<EntityPath>) -> Result<(), HandlerRegistryError> {
        self.insert(path.into(), HandlerEntry::default())
    }

    /// Register a handler for `path` that overrides confirmation messages.
    pub fn register_with_hook(
        &mut self,
        path: impl Into<EntityPath>,
        hook: impl ConfirmationHook + 'static,
    ) -> Result<(), HandlerRegistryError> {
        self.insert(
            path.into(),
            HandlerEntry {
                hook: Some(Box::new(hook)),
            },
        )
    }

    fn insert(&mut self, path: EntityPath, entry: HandlerEntry) -> Result<(), HandlerRegistryError> {
        if self.entries.contains_key(&path) {
            return Err(HandlerRegistryError::AlreadyRegistered(path));
        }
        self.entries.insert(path, entry);

        Ok(())
    }

    #[must_use]
    pub fn has_handler(&self, path: &EntityPath) -> bool {
        self.entries.contains_key(path)
    }

    #[must_use]
    pub fn hook(&self, path: &EntityPath) -> Option<&dyn ConfirmationHook> {
        self.entries.get(path)?.hook.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(path, entry)| (path, entry.hook.is_some())),
            )
            .finish()
    }
}

///
/// TESTS
///
