//! Core runtime for Fallout: the primary-key codec, entity and relationship
//! model, collaborator traits, and the cascade impact collector.

pub mod collect;
pub mod config;
pub mod error;
pub mod key;
pub mod link;
pub mod model;
pub mod obs;
pub mod registry;
pub mod report;
pub mod traits;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// Prelude
///
/// Domain vocabulary plus the collaborator traits an integration implements.
///

pub mod prelude {
    pub use crate::{
        collect::ImpactCollector,
        config::CollectorConfig,
        key::{PrimaryKey, quote, unquote},
        link::{ChangeViewLinks, LinkContext},
        model::{EntityLabels, EntityPath, EntityRef, RelationDescriptor, RelationKind},
        registry::{ConfirmationHook, HandlerTable, HookRequest},
        report::{DeletionImpact, MissingPermissions, ReportLine, ReportNode},
        traits::{Action, LinkFormatter, ObjectSource, PermissionOracle, SchemaCatalog},
    };
}
