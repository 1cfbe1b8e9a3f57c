use serde::{Deserialize, Serialize};

///
/// EntityLabels
///
/// Singular and plural display names for an entity type.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntityLabels {
    pub singular: String,
    pub plural: String,
}

impl EntityLabels {
    #[must_use]
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Plural formed by appending `s`.
    #[must_use]
    pub fn regular(singular: impl Into<String>) -> Self {
        let singular = singular.into();
        let plural = format!("{singular}s");

        Self { singular, plural }
    }

    /// Label matching `count` instances.
    #[must_use]
    pub fn for_count(&self, count: usize) -> &str {
        if count == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

/// Uppercase the first character, leaving the rest untouched.
#[must_use]
pub fn capfirst(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escape text for inclusion in HTML markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }

    out
}
