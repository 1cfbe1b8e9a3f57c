//! ## Crate layout
//! - `core`: key codec, entity/relationship model, impact collector, report
//!   tree, observability, and configuration.
//!
//! The `prelude` module mirrors the surface an integration implements and calls.

pub use fallout_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use fallout_core::Error;

///
/// Prelude
///

pub mod prelude {
    pub use fallout_core::prelude::*;
    pub use serde::{Deserialize, Serialize};
}
