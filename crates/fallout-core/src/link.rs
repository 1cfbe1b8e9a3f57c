//! Change-view links for report lines.

use crate::{
    config::CollectorConfig,
    model::{EntityRef, escape_html},
    traits::LinkFormatter,
};
use serde::{Deserialize, Serialize};

///
/// LinkContext
///
/// Site context threaded to link formatters and confirmation hooks.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LinkContext {
    pub site_name: String,

    /// Number of `../` segments from the current page to the site root.
    pub levels_to_root: usize,
}

impl LinkContext {
    #[must_use]
    pub fn new(site_name: impl Into<String>, levels_to_root: usize) -> Self {
        Self {
            site_name: site_name.into(),
            levels_to_root,
        }
    }

    #[must_use]
    pub fn from_config(config: &CollectorConfig) -> Self {
        Self::new(config.site_name.clone(), config.levels_to_root)
    }
}

///
/// ChangeViewLinks
///
/// Relative `<a>` links of the form `{../…}{app}/{model}/{quoted pk}/`.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ChangeViewLinks;

impl ChangeViewLinks {
    /// Relative change-view URL for one instance.
    #[must_use]
    pub fn change_url(entity: &EntityRef, context: &LinkContext) -> String {
        format!(
            "{}{}/{}/{}/",
            "../".repeat(context.levels_to_root),
            entity.path.app_label(),
            entity.path.model_name(),
            entity.key.to_segment(),
        )
    }
}

impl LinkFormatter for ChangeViewLinks {
    fn format_link(&self, entity: &EntityRef, display: &str, context: &LinkContext) -> String {
        format!(
            r#"<a href="{}">{}</a>"#,
            Self::change_url(entity, context),
            escape_html(display)
        )
    }
}

///
/// TESTS
///
