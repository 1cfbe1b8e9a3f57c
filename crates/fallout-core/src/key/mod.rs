mod codec;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub use codec::{KeyDecodeError, RESERVED, quote, try_unquote, unquote};

///
/// PrimaryKey
///
/// Primary-key value of one entity instance.
/// Only text keys can carry reserved path characters, so only they are quoted.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum PrimaryKey {
    Int(i64),
    Text(String),
    Uint(u64),
}

impl PrimaryKey {
    /// Quote this key for use as a single path segment.
    /// Numeric keys pass through unchanged.
    #[must_use]
    pub fn quoted(&self) -> Self {
        match self {
            Self::Text(s) => Self::Text(quote(s).into_owned()),
            other => other.clone(),
        }
    }

    /// Path-segment form of this key.
    #[must_use]
    pub fn to_segment(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => quote(s),
            Self::Int(v) => Cow::Owned(v.to_string()),
            Self::Uint(v) => Cow::Owned(v.to_string()),
        }
    }
}

impl From<i64> for PrimaryKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for PrimaryKey {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<&str> for PrimaryKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PrimaryKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
