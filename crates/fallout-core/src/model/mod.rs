//! Entity identities, relationship descriptors and display labels.

pub mod entity;
pub mod labels;
pub mod relation;


pub use entity::{EntityPath, EntityRef};
pub use labels::{EntityLabels, capfirst, escape_html};
pub use relation::{RelationDescriptor, RelationKind};
