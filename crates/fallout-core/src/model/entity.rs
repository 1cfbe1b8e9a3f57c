use crate::key::PrimaryKey;
use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

///
/// EntityPath
///
/// Type identifier of an entity, conventionally `app_label.model`.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct EntityPath(String);

impl EntityPath {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Application label (text before the first `.`), or the whole path.
    #[must_use]
    pub fn app_label(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(app, _)| app)
    }

    /// Lowercased model name (text after the first `.`), or the whole path.
    #[must_use]
    pub fn model_name(&self) -> String {
        self.0
            .split_once('.')
            .map_or(self.0.as_str(), |(_, model)| model)
            .to_lowercase()
    }
}

impl From<&str> for EntityPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

///
/// EntityRef
///
/// Identity of one entity instance.
/// Equality and ordering are by (path, key), never by object identity.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("{path}({key})")]
pub struct EntityRef {
    pub path: EntityPath,
    pub key: PrimaryKey,
}

impl EntityRef {
    #[must_use]
    pub fn new(path: impl Into<EntityPath>, key: impl Into<PrimaryKey>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }
}
