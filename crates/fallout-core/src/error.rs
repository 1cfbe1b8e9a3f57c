use crate::{config::ConfigError, key::KeyDecodeError, registry::HandlerRegistryError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error surface.
/// Impact collection itself is infallible; these come from setup and strict decoding.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    KeyDecode(#[from] KeyDecodeError),

    #[error(transparent)]
    Registry(#[from] HandlerRegistryError),
}
