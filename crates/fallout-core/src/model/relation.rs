use crate::model::entity::EntityPath;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// RelationKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToMany,
}

impl RelationKind {
    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, Self::OneToOne)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::OneToOne => "one_to_one",
            Self::OneToMany => "one_to_many",
            Self::ManyToMany => "many_to_many",
        };

        write!(f, "{label}")
    }
}

///
/// RelationDescriptor
///
/// One relationship pointing at a source entity type, as reported by the
/// schema catalog.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RelationDescriptor {
    pub kind: RelationKind,

    /// Entity type on the other end of the relationship.
    pub related: EntityPath,

    /// Reverse accessor on the source instance.
    /// `None` for a symmetrical self-relationship.
    pub accessor: Option<String>,

    /// Field name on the related type.
    pub field_name: String,

    /// Human-readable field name.
    pub field_label: String,

    /// Singular human-readable name of the related type.
    pub verbose_name: String,
}

impl RelationDescriptor {
    #[must_use]
    pub fn new(
        kind: RelationKind,
        related: impl Into<EntityPath>,
        accessor: impl Into<String>,
        verbose_name: impl Into<String>,
    ) -> Self {
        let accessor = accessor.into();

        Self {
            kind,
            related: related.into(),
            field_name: accessor.clone(),
            field_label: accessor.replace('_', " "),
            accessor: Some(accessor),
            verbose_name: verbose_name.into(),
        }
    }

    /// Symmetrical many-to-many from a type to itself through one field.
    #[must_use]
    pub fn symmetrical(
        related: impl Into<EntityPath>,
        field_name: impl Into<String>,
        verbose_name: impl Into<String>,
    ) -> Self {
        let field_name = field_name.into();

        Self {
            kind: RelationKind::ManyToMany,
            related: related.into(),
            field_label: field_name.replace('_', " "),
            field_name,
            accessor: None,
            verbose_name: verbose_name.into(),
        }
    }

    #[must_use]
    pub fn with_field(
        mut self,
        field_name: impl Into<String>,
        field_label: impl Into<String>,
    ) -> Self {
        self.field_name = field_name.into();
        self.field_label = field_label.into();
        self
    }

    /// Accessor used to walk this relationship from an instance of `source`.
    ///
    /// A missing reverse accessor is only usable for a many-to-many whose
    /// related type is the source type itself; the field's own name is used.
    #[must_use]
    pub fn resolve_accessor(&self, source: &EntityPath) -> Option<&str> {
        match self.accessor.as_deref() {
            Some(accessor) => Some(accessor),
            None if self.kind == RelationKind::ManyToMany && &self.related == source => {
                Some(self.field_name.as_str())
            }
            None => None,
        }
    }
}
