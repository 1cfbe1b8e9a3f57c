//! Nested description of everything a delete would take with it.

use crate::model::{EntityLabels, EntityPath};
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

///
/// ReportLine
///
/// `Text` is raw and must be escaped by a renderer.
/// `Markup` was assembled from escaped parts and is safe to emit as-is.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ReportLine {
    Text(String),
    Markup(String),
}

impl ReportLine {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Markup(s) => s,
        }
    }

    #[must_use]
    pub const fn is_markup(&self) -> bool {
        matches!(self, Self::Markup(_))
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// ReportNode
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ReportNode {
    pub line: ReportLine,
    pub children: Vec<Self>,
}

impl ReportNode {
    #[must_use]
    pub const fn new(line: ReportLine) -> Self {
        Self {
            line,
            children: Vec::new(),
        }
    }

    /// Append a child and return it for further nesting.
    pub fn push(&mut self, line: ReportLine) -> &mut Self {
        self.children.push(Self::new(line));
        let last = self.children.len() - 1;

        &mut self.children[last]
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth-first, pre-order walk yielding `(nesting level, node)`.
    #[must_use]
    pub fn walk(&self) -> Vec<(usize, &Self)> {
        let mut out = Vec::with_capacity(self.node_count());
        let mut stack = vec![(0, self)];
        while let Some((level, node)) = stack.pop() {
            out.push((level, node));
            stack.extend(node.children.iter().rev().map(|child| (level + 1, child)));
        }

        out
    }

    /// Deepest nesting level below this node (`0` for a leaf).
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.walk()
            .into_iter()
            .any(|(_, node)| node.line.as_str().contains(needle))
    }
}

impl fmt::Display for ReportNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, node) in self.walk() {
            writeln!(f, "{}- {}", "  ".repeat(level), node.line)?;
        }

        Ok(())
    }
}

///
/// MissingPermissions
///
/// Labels of related types the acting user may not touch.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
pub struct MissingPermissions(BTreeSet<String>);

impl MissingPermissions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the label was not already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }
}

impl<S: Into<String>> FromIterator<S> for MissingPermissions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

///
/// SummaryEntry
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub path: EntityPath,
    pub labels: EntityLabels,
    pub count: usize,
}

impl fmt::Display for SummaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.labels.for_count(self.count))
    }
}

///
/// ImpactSummary
///
/// Per-type instance counts of everything included in the report.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ImpactSummary {
    entries: BTreeMap<EntityPath, SummaryEntry>,
}

impl ImpactSummary {
    pub(crate) fn add(&mut self, path: &EntityPath, labels: impl FnOnce() -> EntityLabels) {
        if let Some(entry) = self.entries.get_mut(path) {
            entry.count += 1;
            return;
        }

        self.entries.insert(
            path.clone(),
            SummaryEntry {
                path: path.clone(),
                labels: labels(),
                count: 1,
            },
        );
    }

    #[must_use]
    pub fn count(&self, path: &EntityPath) -> usize {
        self.entries.get(path).map_or(0, |entry| entry.count)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.values().map(|entry| entry.count).sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = &SummaryEntry> {
        self.entries.values()
    }

    /// One `"{count} {label}"` line per type, ordered by path.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries().map(ToString::to_string).collect()
    }
}

///
/// DeletionImpact
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DeletionImpact {
    pub report: ReportNode,
    pub missing_permissions: MissingPermissions,
    pub summary: ImpactSummary,
}

impl DeletionImpact {
    /// The acting user holds every permission the delete needs.
    #[must_use]
    pub fn is_permitted(&self) -> bool {
        self.missing_permissions.is_empty()
    }
}

///
/// TESTS
///
